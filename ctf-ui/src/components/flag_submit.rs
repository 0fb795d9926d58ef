use ctf_core::dto::FlagRequest;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::removable_message::RemovableMessage;

#[component]
pub fn FlagSubmit() -> impl IntoView {
    let flag = create_rw_signal(String::new());
    let message_ok = create_rw_signal(None::<String>);
    let message_error = create_rw_signal(None::<String>);

    let send = move || {
        let value = flag.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        message_ok.set(None);
        message_error.set(None);
        spawn_local(async move {
            match api::submit_flag(&FlagRequest { flag: value }).await {
                Ok(()) => {
                    message_ok.set(Some("Congratulation! You solved the task.".to_string()));
                }
                Err(e) => {
                    message_error.set(Some(e.message()));
                }
            }
        });
    };

    view! {
      <div class="submitFlag">
        {move || message_error.get().map(|text| view! { <RemovableMessage kind="error" text/> })}
        {move || message_ok.get().map(|text| view! { <RemovableMessage kind="success" text/> })}

        <div class="form">
          <input
            type="text"
            placeholder="Flag"
            prop:value=move || flag.get()
            on:input=move |ev| flag.set(event_target_value(&ev))
            on:keydown=move |ev: ev::KeyboardEvent| {
              if ev.key() == "Enter" {
                send();
              }
            }
          />
          <button type="submit" on:click=move |_| send()></button>
        </div>
      </div>
    }
}
