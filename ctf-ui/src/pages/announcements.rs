use ctf_core::state::LoadState;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::announcement::AnnouncementElement;
use crate::components::footer::Footer;
use crate::components::loader::Loader;
use crate::store::CtfStore;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let store = expect_context::<CtfStore>();

    // Snapshot what was already read before this visit marks everything
    // seen, so the "new" labels survive the visit itself.
    let previously_seen = create_rw_signal(store.seen_announcements.get_untracked());

    if !store.announcements_state.get_untracked().is_pending() {
        spawn_local(async move { store.fetch_announcements().await });
    }
    // Marks everything seen as soon as a load completes, including loads
    // kicked off by the background poller while the page is open.
    create_effect(move |_| {
        if store.announcements_state.get().is_done() {
            store.mark_announcements_seen();
        }
    });

    view! {
      <div class="page announcements">
        <div class="inner">
          <h1 class="mainTitle">"News"</h1>

          {move || match store.announcements_state.get() {
              LoadState::None | LoadState::Pending => {
                  view! { <Loader text="Loading news"/> }.into_view()
              }
              LoadState::Error => {
                  view! { <Loader text="Error during loading news"/> }.into_view()
              }
              LoadState::Done => view! {
                <div class="list">
                  <Show
                    when=move || store.announcements.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"No news yet."</p> }
                  >
                    <For
                      each=move || store.announcements.get()
                      key=|info| info.id
                      children=move |info| {
                          let id = info.id;
                          let is_new = Signal::derive(move || {
                              !previously_seen.with(|seen| seen.contains(&id))
                          });
                          view! { <AnnouncementElement info=info is_new=is_new/> }
                      }
                    />
                  </Show>
                </div>
              }
              .into_view(),
          }}

          <Footer/>
        </div>
      </div>
    }
}
