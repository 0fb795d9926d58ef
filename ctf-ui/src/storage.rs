//! localStorage-backed persistence for the session team id and the seen
//! announcement ids. On non-wasm targets (native tests) there is no storage
//! handle and every operation is a no-op.

use crate::consts::{SEEN_ANNOUNCEMENTS_KEY, TEAM_ID_KEY};

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

pub fn load_team_id() -> Option<u32> {
    local_storage()?
        .get_item(TEAM_ID_KEY)
        .ok()
        .flatten()?
        .parse()
        .ok()
}

pub fn store_team_id(team_id: u32) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TEAM_ID_KEY, &team_id.to_string());
    }
}

pub fn clear_team_id() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TEAM_ID_KEY);
    }
}

/// Seen ids persist as a comma-joined list; unparsable entries are dropped.
pub fn load_seen_announcements() -> Vec<u32> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let Ok(Some(raw)) = storage.get_item(SEEN_ANNOUNCEMENTS_KEY) else {
        return Vec::new();
    };
    raw.split(',')
        .filter_map(|id| id.trim().parse().ok())
        .collect()
}

pub fn store_seen_announcements(ids: &[u32]) {
    if let Some(storage) = local_storage() {
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = storage.set_item(SEEN_ANNOUNCEMENTS_KEY, &joined);
    }
}
