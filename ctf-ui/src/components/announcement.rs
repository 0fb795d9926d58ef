use ctf_core::datetime::format_date;
use ctf_core::dto::Announcement;
use leptos::*;

#[component]
pub fn AnnouncementElement(
    info: Announcement,
    #[prop(into)] is_new: Signal<bool>,
) -> impl IntoView {
    view! {
      <div class="announcement">
        <header>
          <h2>{info.title.clone()}</h2>
          <Show when=move || is_new.get() fallback=|| ()>
            <span class="label">"New"</span>
          </Show>
          <div class="date">{format_date(&info.created_at)}</div>
        </header>

        <p class="description">{info.description.clone()}</p>
      </div>
    }
}
