use chrono::Utc;
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::components::footer::Footer;
use crate::components::timer::Timer;
use crate::store::CtfStore;

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Before,
    Running,
    Over,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<CtfStore>();
    spawn_local(async move { store.fetch_info().await });

    let phase = create_memo(move |_| {
        let info = store.info.get();
        let now = Utc::now();
        if info.start > now {
            Phase::Before
        } else if now <= info.end {
            Phase::Running
        } else {
            Phase::Over
        }
    });

    let start = Signal::derive(move || store.info.with(|info| info.start));
    let end = Signal::derive(move || store.info.with(|info| info.end));

    view! {
      <div class="page homepage">
        <div class="inner">
          <section class="sec1">
            <div class="logo">"capture" <span>"the"</span> "flag"</div>
            <div class="text">"Capture The Flag Competition"</div>

            <div class="stats">
              {move || match phase.get() {
                  Phase::Before => view! {
                    <div class="stat">
                      <div>{move || store.info.with(|info| info.teams_count)}</div>
                      <p>"Teams"</p>
                    </div>
                    <div class="stat">
                      <div>{move || store.info.with(|info| info.countries_count)}</div>
                      <p>"Countries"</p>
                    </div>
                  }.into_view(),
                  _ => view! {
                    <div class="stat">
                      <div>{move || store.info.with(|info| info.flags_count)}</div>
                      <p>"Flags submitted"</p>
                    </div>
                    <div class="stat">
                      <div>{move || store.info.with(|info| info.teams_count)}</div>
                      <p>"Teams registered"</p>
                    </div>
                    <div class="stat">
                      <div>{move || store.info.with(|info| info.tasks_unsolved_count)}</div>
                      <p>"Unsolved challenges"</p>
                    </div>
                  }.into_view(),
              }}
            </div>

            <div class="timer">
              {move || match phase.get() {
                  Phase::Before => view! {
                    <h4>"Starts in"</h4>
                    <Timer date=start/>
                  }.into_view(),
                  Phase::Running => view! {
                    <h4>"Ends in"</h4>
                    <Timer date=end/>
                  }.into_view(),
                  Phase::Over => view! {
                    <h4>"CTF is over!"</h4>
                    <Timer date=end/>
                  }.into_view(),
              }}
            </div>

            <Show when=move || !store.is_logged_in.get() fallback=|| ()>
              <A href="/register" class="register">"Register"</A>
            </Show>
          </section>

          <section class="sec3">
            <h1 class="mainTitle">"Info"</h1>

            <ul>
              <li>
                <h4>"Format:"</h4>
                <p>"jeopardy on-line"</p>
              </li>
              <li>
                <h4>"Scoring:"</h4>
                <p>"dynamic, points drop with solves"</p>
              </li>
              <li>
                <h4>"News:"</h4>
                <p><A href="/news">"announcements"</A></p>
              </li>
            </ul>
          </section>

          <Footer/>
        </div>
      </div>
    }
}
