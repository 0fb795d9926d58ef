use leptos::*;
use leptos_router::{Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::pages::announcements::AnnouncementsPage;
use crate::pages::challenges::ChallengesPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::rules::RulesPage;
use crate::pages::scoreboard::ScoreboardPage;
use crate::pages::settings::SettingsPage;
use crate::pages::team::TeamPage;
use crate::pages::teams::TeamsPage;
use crate::store::CtfStore;

#[component]
pub fn App() -> impl IntoView {
    let store = CtfStore::new();
    store.load_session();
    provide_context(store);
    store.start_announcement_polling();

    view! {
      <Router>
        <Navbar/>
        <main>
          <Routes>
            <Route path="/" view=HomePage/>
            <Route path="/challenges" view=ChallengesPage/>
            <Route path="/scoreboard" view=ScoreboardPage/>
            <Route path="/rules" view=RulesPage/>
            <Route path="/teams" view=TeamsPage/>
            <Route path="/team/:id" view=TeamPage/>
            <Route path="/news" view=AnnouncementsPage/>
            <Route path="/settings" view=SettingsPage/>
            <Route path="/login" view=LoginPage/>
            <Route path="/register" view=RegisterPage/>
            <Route path="/*any" view=NotFoundPage/>
          </Routes>
        </main>
      </Router>
    }
}
