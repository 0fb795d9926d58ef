use leptos::*;

/// Spinner with a caption, also used for inline error text.
#[component]
pub fn Loader(#[prop(into)] text: String) -> impl IntoView {
    view! {
      <div class="loader center">
        <p>{text}</p>
      </div>
    }
}
