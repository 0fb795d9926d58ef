use ctf_core::datetime::format_date;
use ctf_core::dto::Team;
use ctf_core::state::LoadState;
use leptos::*;
use leptos_router::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::consts::country_name;
use crate::store::CtfStore;

/// Public team profile. The team itself is page-local state keyed by the
/// route param; ranking and task points come from the shared store.
#[component]
pub fn TeamPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    let params = use_params_map();
    let team_id = create_memo(move |_| {
        params.with(|p| {
            p.get("id")
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(0)
        })
    });

    let team_state = create_rw_signal(LoadState::None);
    let team = create_rw_signal(None::<Team>);

    // Refetches whenever the route param changes.
    create_effect(move |_| {
        let id = team_id.get();
        team_state.set(LoadState::Pending);
        spawn_local(async move {
            match api::get_team(id).await {
                Ok(data) => {
                    team.set(Some(data));
                    team_state.set(LoadState::Done);
                }
                Err(e) => {
                    logging::error!("Failed to fetch team: {e}");
                    team_state.set(LoadState::Error);
                }
            }
        });
    });

    spawn_local(async move {
        store.fetch_scoreboard().await;
        store.fetch_tasks().await;
    });

    let ranking = move || {
        let id = team.with(|t| t.as_ref().map(|t| t.id));
        id.and_then(|id| {
            store
                .scoreboard
                .with(|rows| rows.iter().position(|row| row.team.id == id))
        })
        .map(|position| position + 1)
    };
    let score = move || {
        let id = team.with(|t| t.as_ref().map(|t| t.id));
        id.and_then(|id| {
            store.scoreboard.with(|rows| {
                rows.iter()
                    .find(|row| row.team.id == id)
                    .map(|row| row.points)
            })
        })
    };

    view! {
      <div class="page team">
        <div class="inner">
          {move || match team_state.get() {
              LoadState::Pending => view! { <Loader text="Loading team"/> }.into_view(),
              LoadState::Error => view! { <Loader text="Error during loading team"/> }.into_view(),
              LoadState::Done => team.get().map(|data| {
                  let country = country_name(&data.country)
                      .unwrap_or("---")
                      .to_string();
                  let affiliation = if data.affiliation.is_empty() {
                      "---".to_string()
                  } else {
                      data.affiliation.clone()
                  };
                  let website = (!data.website.is_empty()).then(|| data.website.clone());
                  let solved = data.task_solved.clone();
                  let solved_count = solved.len();
                  view! {
                    <div class="mainTitle normal">{data.name.clone()}</div>
                    <header>
                      <ul>
                        <li class="ranking">
                          <h2>"Ranking"</h2>
                          <p class="blue">
                            {move || ranking().map(|r| r.to_string()).unwrap_or_else(|| "-".into())}
                            " / "
                            {move || store.scoreboard.with(Vec::len)}
                          </p>
                        </li>
                        {website.map(|url| view! {
                          <li class="url">
                            <h2>"Url"</h2>
                            <p class="blue"><a href=url.clone()>{url.clone()}</a></p>
                          </li>
                        })}
                        <li class="score">
                          <h2>"Score"</h2>
                          <p class="blue">
                            {move || score().map(|s| s.to_string()).unwrap_or_else(|| "-".into())}
                          </p>
                        </li>
                        <li class="country">
                          <h2>"Country"</h2>
                          <p>{country}</p>
                        </li>
                        <li class="affiliation">
                          <h2>"Affiliation"</h2>
                          <p>{affiliation}</p>
                        </li>
                      </ul>
                    </header>

                    <div class="result">
                      <h2>"Challenges"</h2>
                      <h4>
                        "Solved " <span>{solved_count}</span>
                        " / " <span>{move || store.tasks.with(Vec::len)}</span> " Total"
                      </h4>
                    </div>

                    <div class="table">
                      <table>
                        <thead>
                          <tr><th>"Name"</th><th>"Score"</th><th>"Time"</th></tr>
                        </thead>
                        <tbody>
                          <For
                            each=move || solved.clone()
                            key=|audit| audit.id
                            children=move |audit| {
                              let audit_id = audit.id;
                              let points = move || {
                                store.tasks.with(|tasks| {
                                  tasks
                                    .iter()
                                    .find(|task| task.id == audit_id)
                                    .map(|task| task.points.to_string())
                                    .unwrap_or_else(|| "-".into())
                                })
                              };
                              view! {
                                <tr>
                                  <td>{audit.name.clone()}</td>
                                  <td>{points}</td>
                                  <td>{format_date(&audit.created_at)}</td>
                                </tr>
                              }
                            }
                          />
                        </tbody>
                      </table>
                    </div>
                  }.into_view()
              }).unwrap_or_else(|| ().into_view()),
              LoadState::None => ().into_view(),
          }}

          <Footer/>
        </div>
      </div>
    }
}
