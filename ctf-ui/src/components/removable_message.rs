use std::time::Duration;

use leptos::*;

/// Inline message that dismisses itself after a few seconds.
#[component]
pub fn RemovableMessage(kind: &'static str, #[prop(into)] text: String) -> impl IntoView {
    let visible = create_rw_signal(true);
    set_timeout(move || visible.set(false), Duration::from_millis(3000));

    let class = if kind == "error" {
        "errorMessage"
    } else {
        "successMessage"
    };

    view! {
      <Show when=move || visible.get() fallback=|| ()>
        <div class=class>{text.clone()}</div>
      </Show>
    }
}
