use ctf_core::dto::RegisterRequest;
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::captcha;
use crate::components::footer::Footer;
use crate::components::removable_message::RemovableMessage;
use crate::consts::COUNTRIES;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let country = create_rw_signal(COUNTRIES[0].0.to_string());
    let submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            let input = RegisterRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                country: country.get_untracked(),
                avatar: String::new(),
                captcha: captcha::token().await,
            };
            match api::register(&input).await {
                Ok(()) => navigate("/login", Default::default()),
                Err(e) => {
                    submitting.set(false);
                    error.set(Some(e.message()));
                }
            }
        });
    };

    view! {
      <div class="page register">
        <div class="inner">
          <h1 class="mainTitle">"Register"</h1>

          <form class="authForm" on:submit=on_submit>
            <label>"Team name"</label>
            <input
              type="text"
              prop:value=name
              on:input=move |ev| name.set(event_target_value(&ev))
            />
            <label>"Email"</label>
            <input
              type="email"
              prop:value=email
              on:input=move |ev| email.set(event_target_value(&ev))
            />
            <label>"Password"</label>
            <input
              type="password"
              prop:value=password
              on:input=move |ev| password.set(event_target_value(&ev))
            />
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
            <button type="submit" disabled=move || submitting.get()>
              "Register"
            </button>
          </form>

          {move || {
              error
                  .get()
                  .map(|text| view! { <RemovableMessage kind="error" text=text/> })
          }}

          <p class="switchAuth">
            "Already registered? " <A href="/login">"Login"</A>
          </p>

          <Footer/>
        </div>
      </div>
    }
}
