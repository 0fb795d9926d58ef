use leptos::*;
use leptos_router::{use_location, use_navigate, A};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::store::CtfStore;

#[component]
fn NavItem(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    view! {
      <li class:active=move || location.pathname.get() == href>
        <A href=href>{label}</A>
      </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    let navigate = use_navigate();
    let location = use_location();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                logging::error!("logout failed: {e}");
            }
            store.remove_user_session();
            navigate("/", Default::default());
        });
    };

    let news_badge = move || {
        let count = store.new_announcements_count();
        (count > 0).then(|| view! { <span class="badge">{count}</span> })
    };

    view! {
      <nav class="mainNavbar">
        <div class="inner">
          <ul class="main">
            <li class="logo"><A href="/">"ctf"</A></li>
            <NavItem href="/" label="home"/>
            <NavItem href="/challenges" label="challenges"/>
            <NavItem href="/scoreboard" label="scoreboard"/>
            <NavItem href="/rules" label="rules"/>
            <NavItem href="/teams" label="teams"/>
            <li class:active=move || location.pathname.get() == "/news">
              <A href="/news">"news"</A>
              {news_badge}
            </li>
          </ul>

          <Show
            when=move || store.is_logged_in.get()
            fallback=|| view! {
              <ul>
                <NavItem href="/login" label="login"/>
                <NavItem href="/register" label="register"/>
              </ul>
            }
          >
            <ul>
              <NavItem href="/settings" label="settings"/>
              <li><a href="#" on:click=on_logout.clone()>"logout"</a></li>
            </ul>
          </Show>
        </div>
      </nav>
    }
}
