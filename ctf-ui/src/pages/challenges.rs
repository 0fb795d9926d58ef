use std::collections::HashSet;

use ctf_core::dto::Task;
use ctf_core::state::LoadState;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::challenge::Challenge;
use crate::components::challenge_modal::ChallengeModal;
use crate::components::flag_submit::FlagSubmit;
use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::components::modal::Modal;
use crate::store::CtfStore;

#[component]
pub fn ChallengesPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    spawn_local(async move {
        store.fetch_tasks().await;
        store.fetch_my_team().await;
    });

    let selected_categories = create_rw_signal(HashSet::<String>::new());
    let show_unsolved = create_rw_signal(false);
    let opened_task = create_rw_signal(None::<Task>);

    // Selecting a chip keeps only that category; selecting it again clears.
    let on_category = move |category_id: String| {
        selected_categories.update(|selection| {
            if selection.contains(&category_id) {
                selection.remove(&category_id);
            } else {
                selection.clear();
                selection.insert(category_id);
            }
        });
    };

    let open_task = move |task_id: u32| {
        let task = store
            .tasks
            .with_untracked(|tasks| tasks.iter().find(|task| task.id == task_id).cloned());
        opened_task.set(task);
    };

    view! {
      <div class="page challenges">
        <div class="inner">
          <h1 class="mainTitle">"Challenges"</h1>

          {move || match store.tasks_state.get() {
              LoadState::Pending => view! { <Loader text="Loading challenges"/> }.into_view(),
              LoadState::Error => view! { <Loader text="Error during loading challenges"/> }.into_view(),
              LoadState::Done => view! {
                <header>
                  <ul>
                    <For
                      each=move || store.categories.get()
                      key=|category| category.id.clone()
                      children=move |category| {
                        let chip_id = category.id.clone();
                        let click_id = category.id.clone();
                        let inactive = move || {
                          selected_categories.with(|selection| {
                            !(selection.is_empty() || selection.contains(&chip_id))
                          })
                        };
                        view! {
                          <li
                            class="category"
                            class:inactive=inactive
                            style=format!("background-color: #{}", category.color)
                            on:click=move |_| on_category(click_id.clone())
                          >
                            {category.name.to_uppercase()}
                          </li>
                        }
                      }
                    />
                    <li class="unsolved">
                      <input
                        type="checkbox"
                        id="iOnlyUnsolved"
                        prop:checked=move || show_unsolved.get()
                        on:change=move |_| show_unsolved.update(|v| *v = !*v)
                      />
                      <label for="iOnlyUnsolved">
                        <span></span>
                        <p>"Only unsolved"</p>
                      </label>
                    </li>
                  </ul>

                  <FlagSubmit/>
                </header>

                <div class="list">
                  <For
                    each=move || {
                      selected_categories.with(|selection| {
                        store.filtered_tasks(selection, show_unsolved.get())
                      })
                    }
                    key=|task| task.id
                    children=move |task| {
                      let task_id = task.id;
                      view! {
                        <Challenge
                          task
                          solved=Signal::derive(move || store.has_task_solved(task_id))
                          on_select=open_task
                        />
                      }
                    }
                  />
                </div>

                {move || opened_task.get().map(|task| view! {
                  <Modal on_close=move |_: ()| opened_task.set(None)>
                    <ChallengeModal task=task.clone()/>
                  </Modal>
                })}
              }.into_view(),
              LoadState::None => ().into_view(),
          }}

          <Footer/>
        </div>
      </div>
    }
}
