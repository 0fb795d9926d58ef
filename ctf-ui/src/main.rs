mod api;
mod app;
mod captcha;
mod consts;
mod http;
mod storage;
mod store;
mod text;

mod components {
    pub mod announcement;
    pub mod challenge;
    pub mod challenge_modal;
    pub mod flag_submit;
    pub mod footer;
    pub mod loader;
    pub mod modal;
    pub mod navbar;
    pub mod removable_message;
    pub mod timer;
}

mod pages {
    pub mod announcements;
    pub mod challenges;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod register;
    pub mod rules;
    pub mod scoreboard;
    pub mod settings;
    pub mod team;
    pub mod teams;
}

use app::App;

fn main() {
    leptos::mount_to_body(App);
}
