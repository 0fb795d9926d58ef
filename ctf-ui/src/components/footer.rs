use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
      <footer class="mainFooter sticky">
        "Capture The Flag platform"
      </footer>
    }
}
