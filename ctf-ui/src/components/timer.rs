use std::time::Duration;

use chrono::{DateTime, Utc};
use ctf_core::datetime::countdown_parts;
use leptos::*;

/// Countdown to a deadline, re-rendered once per second.
#[component]
pub fn Timer(#[prop(into)] date: Signal<DateTime<Utc>>) -> impl IntoView {
    let now = create_rw_signal(Utc::now());
    if let Ok(handle) = set_interval_with_handle(
        move || now.set(Utc::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || handle.clear());
    }

    let parts = move || countdown_parts((date.get() - now.get()).num_seconds());

    view! {
      <div class="time">
        <div data-type="days">{move || format!("{:02}", parts().0)}</div>
        <div class="spacer"></div>
        <div data-type="hours">{move || format!("{:02}", parts().1)}</div>
        <div class="spacer"></div>
        <div data-type="minutes">{move || format!("{:02}", parts().2)}</div>
        <div class="spacer"></div>
        <div data-type="seconds">{move || format!("{:02}", parts().3)}</div>
      </div>
    }
}
