use ctf_core::dto::Task;
use ctf_core::views::category_color;
use leptos::*;

/// Card on the challenges grid. Solved tasks render dimmed.
#[component]
pub fn Challenge(
    task: Task,
    #[prop(into)] solved: Signal<bool>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let task_id = task.id;
    let color_bars = task
        .categories
        .iter()
        .map(|name| {
            view! { <span style=format!("background-color: #{}", category_color(name))></span> }
        })
        .collect_view();

    view! {
      <div
        class="challenge"
        class:inactive=move || solved.get()
        on:click=move |_| on_select.call(task_id)
      >
        <div class="body">
          <div class="top">{color_bars}</div>

          <div class="info">
            <h2>{task.name.clone()}</h2>

            <ul>
              <li class="points">{format!("Points: {}", task.points)}</li>
              <li class="solved">{format!("Solved: {}", task.solvers)}</li>
            </ul>

            <div class="more">
              <div class="categories">{task.categories.join(", ").to_uppercase()}</div>
              <div class="difficult">{task.difficult.to_uppercase()}</div>
            </div>
          </div>
        </div>
      </div>
    }
}
