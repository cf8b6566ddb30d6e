use contracts::domain::a002_consultant::{ConsultantDraft, ConsultantRole};
use contracts::shared::list_view::RecordDraft;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::modal::Modal;

#[component]
pub fn AddConsultantDialog(
    on_confirm: Callback<ConsultantDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let affiliation = RwSignal::new(String::new());

    let draft = move || ConsultantDraft {
        name: name.get(),
        email: email.get(),
        role: ConsultantRole::from_label(&role.get()),
        affiliation: affiliation.get(),
    };
    let invalid = Signal::derive(move || draft().validate().is_err());

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=invalid
                on_click=move |_| on_confirm.run(draft())
            >
                "Add consultant"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add consultant" on_close=on_close footer=footer>
            <div class="form__group">
                <Label>"Full name *"</Label>
                <Input value=name />
            </div>
            <div class="form__group">
                <Label>"Email *"</Label>
                <Input value=email placeholder="name@university.example" />
            </div>
            <div class="form__group">
                <Label>"Role *"</Label>
                <select
                    class="form__select"
                    on:change=move |ev| role.set(event_target_value(&ev))
                    prop:value=move || role.get()
                >
                    <option value="">"Select a role"</option>
                    {ConsultantRole::labels().into_iter().map(|r| view! { <option value=r>{r}</option> }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <Label>"Affiliation"</Label>
                <Input value=affiliation placeholder="Department or program" />
            </div>
        </Modal>
    }
}
