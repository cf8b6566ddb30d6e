use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// "Delete X?" confirmation. Confirming and cancelling both close it.
#[component]
pub fn ConfirmDeleteDialog(
    /// Entity kind for the title, e.g. "client"
    entity: &'static str,
    /// Display name of the record being deleted
    #[prop(into)]
    name: String,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                "Delete"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=format!("Delete {entity}") on_close=on_close footer=footer class="modal--danger">
            <p>
                "Delete "<strong>{name}</strong>"? This cannot be undone."
            </p>
        </Modal>
    }
}
