use ctf_core::dto::SettingsRequest;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::components::removable_message::RemovableMessage;
use crate::consts::COUNTRIES;
use crate::store::CtfStore;

const SAVED_MESSAGE: &str = "Settings updated!";

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    spawn_local(async move { store.fetch_my_team().await });

    let country = create_rw_signal(String::new());
    let affiliation = create_rw_signal(String::new());
    let website = create_rw_signal(String::new());
    let avatar = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let saved = create_rw_signal(false);

    // Fill the form once the profile arrives, without clobbering later edits
    // on profile re-fetches.
    let initialized = create_rw_signal(false);
    create_effect(move |_| {
        if initialized.get_untracked() {
            return;
        }
        store.my_team.with(|team| {
            if let Some(team) = team {
                country.set(team.country.clone());
                affiliation.set(team.affiliation.clone());
                website.set(team.website.clone());
                avatar.set(team.avatar.clone());
                initialized.set(true);
            }
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);
        saved.set(false);
        spawn_local(async move {
            let input = SettingsRequest {
                current_password: String::new(),
                new_password: String::new(),
                country: country.get_untracked(),
                avatar: avatar.get_untracked(),
                affiliation: affiliation.get_untracked(),
                website: website.get_untracked(),
            };
            match api::update_settings(&input).await {
                Ok(()) => {
                    saved.set(true);
                    store.fetch_my_team().await;
                }
                Err(e) => error.set(Some(e.message())),
            }
            submitting.set(false);
        });
    };

    view! {
      <div class="page settings">
        <div class="inner">
          <h1 class="mainTitle">"Settings"</h1>

          <Show
            when=move || store.my_team_state.get().is_done()
            fallback=move || view! { <Loader text="Loading profile"/> }
          >
            <form class="settingsForm" on:submit=on_submit>
              <label>"Country"</label>
              <select on:change=move |ev| country.set(event_target_value(&ev))>
                <For
                  each=|| COUNTRIES.iter().copied()
                  key=|(code, _)| *code
                  children=move |(code, label)| view! {
                    <option value=code selected=move || country.get() == code>
                      {label}
                    </option>
                  }
                />
              </select>
              <label>"Affiliation"</label>
              <input
                type="text"
                prop:value=affiliation
                on:input=move |ev| affiliation.set(event_target_value(&ev))
              />
              <label>"Website"</label>
              <input
                type="text"
                prop:value=website
                on:input=move |ev| website.set(event_target_value(&ev))
              />
              <label>"Avatar URL"</label>
              <input
                type="text"
                prop:value=avatar
                on:input=move |ev| avatar.set(event_target_value(&ev))
              />
              <button type="submit" disabled=move || submitting.get()>
                "Save"
              </button>
            </form>
          </Show>

          {move || {
              error
                  .get()
                  .map(|text| view! { <RemovableMessage kind="error" text=text/> })
          }}
          <Show when=move || saved.get() fallback=|| ()>
            <RemovableMessage kind="success" text=SAVED_MESSAGE/>
          </Show>

          <Footer/>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_confirmation_text() {
        assert_eq!(SAVED_MESSAGE, "Settings updated!");
    }
}
