use ctf_core::datetime::format_date;
use ctf_core::dto::{Task, TaskAudit};
use ctf_core::state::LoadState;
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::flag_submit::FlagSubmit;
use crate::components::loader::Loader;
use crate::store::CtfStore;

/// Task details with a description tab and a solvers tab. Solvers are
/// page-local state fetched per task, not part of the store.
#[component]
pub fn ChallengeModal(task: Task) -> impl IntoView {
    let store = expect_context::<CtfStore>();
    let active_tab = create_rw_signal(1u8);
    let solvers_state = create_rw_signal(LoadState::Pending);
    let solvers = create_rw_signal(Vec::<TaskAudit>::new());

    let task_id = task.id;
    spawn_local(async move {
        match api::get_task_solvers(task_id).await {
            Ok(list) => {
                solvers.set(list);
                solvers_state.set(LoadState::Done);
            }
            Err(e) => {
                logging::error!("Failed to fetch solvers: {e}");
                solvers_state.set(LoadState::Error);
            }
        }
    });

    let solved = move || store.has_task_solved(task_id);
    let first_solver = move || {
        solvers.with(|list| {
            list.first()
                .map(|audit| audit.name.clone())
                .unwrap_or_else(|| "---".to_string())
        })
    };

    view! {
      <div class="tabs">
        <header>
          <div class:active=move || active_tab.get() == 1 on:click=move |_| active_tab.set(1)>
            "Challenges"
          </div>
          <div class:active=move || active_tab.get() == 2 on:click=move |_| active_tab.set(2)>
            {format!("Solves ({})", task.solvers)}
          </div>
        </header>

        <div class="content info" class:active=move || active_tab.get() == 1>
          <h2 class="title">{task.name.clone()}</h2>

          <header>
            <div class="points">{format!("Points: {}", task.points)}</div>
            <div class="first">{first_solver}</div>
            <div class="categories">{task.categories.join(", ").to_uppercase()}</div>
          </header>

          <div class="description scrollable">{task.description.clone()}</div>

          <div class="flag">
            <Show
              when=solved
              fallback=|| view! { <FlagSubmit/> }
            >
              <p class="solved">"Challenge solved"</p>
            </Show>
          </div>
        </div>

        <div class="content solves" class:active=move || active_tab.get() == 2>
          <h2 class="title">{task.name.clone()}</h2>

          <div class="table scrollable">
            {move || match solvers_state.get() {
                LoadState::Pending => view! { <Loader text="Loading solvers"/> }.into_view(),
                LoadState::Error => view! { <Loader text="Error during loading solvers"/> }.into_view(),
                LoadState::Done => view! {
                  <table>
                    <thead>
                      <tr><th>"#"</th><th>"Team"</th><th>"Submit time"</th></tr>
                    </thead>
                    <tbody>
                      <For
                        each={move || solvers.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(_, solver)| solver.id
                        children=|(index, solver)| view! {
                          <tr>
                            <td>{index + 1}</td>
                            <td><A href=format!("/team/{}", solver.id)>{solver.name.clone()}</A></td>
                            <td>{format_date(&solver.created_at)}</td>
                          </tr>
                        }
                      />
                    </tbody>
                  </table>
                }.into_view(),
                LoadState::None => ().into_view(),
            }}
          </div>
        </div>
      </div>
    }
}
