use leptos::*;
use wasm_bindgen::JsCast;

/// Modal with a close button; clicking the backdrop itself also closes.
#[component]
pub fn Modal(#[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_background_click = move |ev: ev::MouseEvent| {
        let Some(target) = ev.target() else {
            return;
        };
        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
            if element.class_name() == "modalBackground" {
                ev.stop_propagation();
                on_close.call(());
            }
        }
    };

    view! {
      <div class="modalBackground" on:click=on_background_click>
        <div class="modal">
          <div class="close" on:click=move |_| on_close.call(())></div>
          <div class="body">{children()}</div>
        </div>
      </div>
    }
}
