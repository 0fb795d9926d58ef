use leptos::*;
use leptos_router::A;

use crate::components::footer::Footer;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
      <div class="page notFound">
        <div class="inner">
          <h1 class="mainTitle">"404"</h1>
          <p>"This page does not exist."</p>
          <A href="/">"Back to home"</A>
          <Footer/>
        </div>
      </div>
    }
}
