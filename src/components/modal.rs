/// Overlay dialog rendered only while `is_open` holds.
/// The header close button, a backdrop click and Escape all call `on_toggle`.
use leptos::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let backdrop_ref = create_node_ref::<html::Div>();

    // Clicks inside the dialog bubble up here too; only the backdrop itself closes.
    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let on_backdrop = match (ev.target(), backdrop_ref.get_untracked()) {
            (Some(target), Some(backdrop)) => {
                let backdrop: &web_sys::HtmlDivElement = &backdrop;
                target == *backdrop.unchecked_ref::<web_sys::EventTarget>()
            }
            _ => false,
        };
        if on_backdrop {
            on_toggle.call(());
        }
    };

    // Escape closes the dialog wherever focus is, so listen on the window.
    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if is_open.get_untracked() && ev.key() == "Escape" {
            on_toggle.call(());
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal fade show d-block"
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                node_ref=backdrop_ref
                on:click=on_backdrop_click
            >
                <div class="modal-dialog" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{ title.get_value() }</h5>
                            <button
                                type="button"
                                class="close"
                                aria-label="Close"
                                on:click=move |_| on_toggle.call(())
                            >
                                <span aria-hidden="true">"×"</span>
                            </button>
                        </div>
                        <div class="modal-body">{ children() }</div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
