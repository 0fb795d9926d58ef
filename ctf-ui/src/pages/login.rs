use ctf_core::dto::LoginRequest;
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

use crate::captcha;
use crate::components::footer::Footer;
use crate::components::removable_message::RemovableMessage;
use crate::api;
use crate::store::CtfStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
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
            let input = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
                captcha: captcha::token().await,
            };
            match api::login(&input).await {
                Ok(team) => {
                    store.set_user_session(&team);
                    navigate("/challenges", Default::default());
                }
                Err(e) => {
                    submitting.set(false);
                    error.set(Some(e.message()));
                }
            }
        });
    };

    view! {
      <div class="page login">
        <div class="inner">
          <h1 class="mainTitle">"Login"</h1>

          <form class="authForm" on:submit=on_submit>
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
            <button type="submit" disabled=move || submitting.get()>
              "Login"
            </button>
          </form>

          {move || {
              error
                  .get()
                  .map(|text| view! { <RemovableMessage kind="error" text=text/> })
          }}

          <p class="switchAuth">
            "No team yet? " <A href="/register">"Register"</A>
          </p>

          <Footer/>
        </div>
      </div>
    }
}
