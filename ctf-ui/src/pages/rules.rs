use leptos::*;

use crate::components::footer::Footer;

#[component]
pub fn RulesPage() -> impl IntoView {
    view! {
      <div class="page rules">
        <div class="inner">
          <h1 class="mainTitle">"Rules"</h1>

          <ol>
            <li>"Each team participates under one account and each member belongs to exactly one team. Teams may consist of any number of members."</li>
            <li>"During the contest, sharing flags, solutions or hints outside the team is prohibited."</li>
            <li>"If you believe you found a correct flag but the system is not accepting it, contact the organizers on chat. Do not brute-force the flag validation endpoint."</li>
            <li>"Attacking the infrastructure or any attempt to disrupt the competition is prohibited."</li>
            <li>"Please report any bugs you find in the infrastructure or tasks directly to the organizers."</li>
            <li><b>"Breaking any of the above rules may result in team disqualification."</b></li>
            <li>"The scoring system is dynamic: a challenge's points depend on the number of its solves."</li>
            <li>"All flags fall into the format " <code>"ctf{something_h3re!}"</code> ", unless the challenge description states otherwise."</li>
            <li>"Challenges might be released at different times, but all of them will be released no later than 10 hours before the end of the competition."</li>
            <li>"All crucial information about challenges and the competition will be announced in the news section."</li>
            <li>"Registration is open before and throughout the competition."</li>
            <li><b>"During the last hour the scoreboard is frozen until the end. Points for tasks keep updating at all times."</b></li>
            <li>"Resolving any unregulated cases remains at the organizers' discretion."</li>
          </ol>

          <Footer/>
        </div>
      </div>
    }
}
