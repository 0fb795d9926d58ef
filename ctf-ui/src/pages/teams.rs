use ctf_core::state::LoadState;
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::consts::AVATAR_URL;
use crate::store::CtfStore;
use crate::text::trunc;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    spawn_local(async move { store.fetch_teams().await });

    view! {
      <div class="page teams">
        <div class="inner">
          <h1 class="mainTitle">"Teams"</h1>

          {move || match store.teams_state.get() {
              LoadState::Pending => view! { <Loader text="Loading teams"/> }.into_view(),
              LoadState::Error => view! { <Loader text="Error during loading teams"/> }.into_view(),
              LoadState::Done => view! {
                <div class="table">
                  <table>
                    <thead>
                      <tr>
                        <th>"#"</th>
                        <th>"Avatar"</th>
                        <th>"Team name"</th>
                        <th>"Link"</th>
                        <th>"Affiliation"</th>
                        <th>"Country"</th>
                      </tr>
                    </thead>
                    <tbody>
                      <For
                        each=move || store.teams.get()
                        key=|team| team.id
                        children=|team| {
                          let avatar = (!team.avatar.is_empty())
                              .then(|| format!("{AVATAR_URL}{}", team.avatar));
                          let website = (!team.website.is_empty()).then(|| team.website.clone());
                          let affiliation = if team.affiliation.is_empty() {
                              "---".to_string()
                          } else {
                              team.affiliation.clone()
                          };
                          view! {
                            <tr>
                              <td>{team.id}</td>
                              <td>
                                {avatar.map(|src| view! { <img src=src class="avatar"/> })}
                              </td>
                              <td>
                                <A href=format!("/team/{}", team.id)>{trunc(&team.name, 15)}</A>
                              </td>
                              <td>
                                {website.map(|url| view! {
                                  <a href=url rel="noreferrer noopener" target="_blank">"link"</a>
                                })}
                              </td>
                              <td>{affiliation}</td>
                              <td>{team.country.to_uppercase()}</td>
                            </tr>
                          }
                        }
                      />
                    </tbody>
                  </table>
                </div>
              }.into_view(),
              LoadState::None => ().into_view(),
          }}

          <Footer/>
        </div>
      </div>
    }
}
