use contracts::domain::a001_client::{ClientDraft, BUSINESS_TYPES};
use contracts::shared::list_view::RecordDraft;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::modal::Modal;

#[component]
pub fn AddClientDialog(on_confirm: Callback<ClientDraft>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let business_type = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let contact_person = RwSignal::new(String::new());

    let draft = move || ClientDraft {
        name: name.get(),
        business_type: business_type.get(),
        email: email.get(),
        phone: phone.get(),
        address: address.get(),
        contact_person: contact_person.get(),
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
                "Add client"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add client" on_close=on_close footer=footer>
            <div class="form__group">
                <Label>"Business name *"</Label>
                <Input value=name placeholder="Acme Dental" />
            </div>
            <div class="form__group">
                <Label>"Business type *"</Label>
                <select
                    class="form__select"
                    on:change=move |ev| business_type.set(event_target_value(&ev))
                    prop:value=move || business_type.get()
                >
                    <option value="">"Select a type"</option>
                    {BUSINESS_TYPES.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <Label>"Email *"</Label>
                <Input value=email placeholder="office@example.com" />
            </div>
            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=phone />
            </div>
            <div class="form__group">
                <Label>"Address"</Label>
                <Input value=address />
            </div>
            <div class="form__group">
                <Label>"Contact person"</Label>
                <Input value=contact_person />
            </div>
        </Modal>
    }
}
