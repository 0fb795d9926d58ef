use ctf_core::scoreboard::{ComputedScoreboard, Medal};
use ctf_core::state::LoadState;
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::components::timer::Timer;
use crate::store::CtfStore;
use crate::text::trunc;

const RANKING_PAGE: usize = 20;

#[component]
pub fn ScoreboardPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    spawn_local(async move {
        store.fetch_tasks().await;
        store.fetch_scoreboard().await;
        store.fetch_info().await;
    });

    let ranking_offset = create_rw_signal(RANKING_PAGE);
    let computed = create_memo(move |_| {
        store.tasks.with(|tasks| {
            store
                .scoreboard
                .with(|rows| ComputedScoreboard::compute(tasks, rows))
        })
    });

    let loaded = move || {
        store.tasks_state.get().is_done() && store.scoreboard_state.get().is_done()
    };
    let pending = move || {
        store.tasks_state.get().is_pending() || store.scoreboard_state.get().is_pending()
    };
    let failed = move || {
        store.tasks_state.get() == LoadState::Error
            || store.scoreboard_state.get() == LoadState::Error
    };

    let end = Signal::derive(move || store.info.with(|info| info.end));

    view! {
      <div class="page scoreboard">
        <div class="inner">
          <h1 class="mainTitle">"Scoreboard"</h1>

          <Show when=pending fallback=|| ()>
            <Loader text="Loading scoreboard"/>
          </Show>
          <Show when=failed fallback=|| ()>
            <Loader text="Error during loading scoreboard"/>
          </Show>

          <Show when=loaded fallback=|| ()>
            <Show when=move || store.scoreboard_is_freeze.get() fallback=|| ()>
              <h4>"Scoreboard has been frozen."</h4>
              <span class="unfreeze">"unfreezed in"</span>
              <Timer date=end/>
            </Show>

            <div class="table">
              <table>
                <thead>
                  <tr>
                    <th colspan="4"></th>
                    <For
                      each=move || computed.get().groups
                      key=|group| group.category.clone()
                      children=|group| view! {
                        <th colspan=group.count.to_string()><div>{group.category.clone()}</div></th>
                      }
                    />
                  </tr>
                  <tr>
                    <th colspan="4"></th>
                    <For
                      each=move || computed.get().sorted_tasks
                      key=|task| task.id
                      children=move |task| {
                        let light = computed.with_untracked(|c| c.first_in_group(&task));
                        view! {
                          <th class:light=light>
                            <div><span>{task.name.clone()}</span></div>
                          </th>
                        }
                      }
                    />
                  </tr>
                  <tr>
                    <th>"Rank"</th>
                    <th>"Name"</th>
                    <th>"Score"</th>
                    <th>"Solves"</th>
                    <For
                      each=move || computed.get().sorted_tasks
                      key=|task| task.id
                      children=move |task| {
                        let light = computed.with_untracked(|c| c.first_in_group(&task));
                        view! { <th class:light=light>{task.points}</th> }
                      }
                    />
                  </tr>
                </thead>

                <tbody>
                  <For
                    each=move || {
                      store
                        .scoreboard
                        .get()
                        .into_iter()
                        .take(ranking_offset.get())
                        .enumerate()
                        .collect::<Vec<_>>()
                    }
                    key=|(_, row)| row.team.id
                    children=move |(position, row)| {
                      let team_id = row.team.id;
                      let cells = computed.with_untracked(|c| {
                        c.sorted_tasks
                          .iter()
                          .map(|task| {
                            let light = c.first_in_group(task);
                            let medal = c
                              .solve_position(task.id, team_id)
                              .map(Medal::for_position);
                            view! {
                              <td class:light=light>
                                {medal.map(|medal| view! { <span class=medal.class()></span> })}
                              </td>
                            }
                          })
                          .collect_view()
                      });
                      view! {
                        <tr>
                          <td>{position + 1}</td>
                          <td class="left">
                            <A href=format!("/team/{team_id}")>{trunc(&row.team.name, 15)}</A>
                          </td>
                          <td>{row.points}</td>
                          <td>{row.team.task_solved.len()}</td>
                          {cells}
                        </tr>
                      }
                    }
                  />
                </tbody>
              </table>
            </div>

            <Show
              when=move || ranking_offset.get() < store.scoreboard.with(Vec::len)
              fallback=|| ()
            >
              <div class="more" on:click=move |_| ranking_offset.update(|v| *v += RANKING_PAGE)>
                "Load more"
              </div>
            </Show>
          </Show>

          <Footer/>
        </div>
      </div>
    }
}
