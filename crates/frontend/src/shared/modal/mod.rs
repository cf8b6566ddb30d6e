use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the close icon and a click on the backdrop all
/// call `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional buttons rendered in the footer (Cancel, Confirm, ...)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Extra class for the dialog box, e.g. `modal--danger`
    #[prop(optional)]
    class: &'static str,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let modal_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {class}")
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=move |ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}
