use contracts::shared::list_view::RecordDraft;
use contracts::system::users::{AccountType, UserAccountDraft};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::modal::Modal;

#[component]
pub fn AddUserDialog(on_confirm: Callback<UserAccountDraft>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let account_type = RwSignal::new(String::new());

    let draft = move || UserAccountDraft {
        name: name.get(),
        email: email.get(),
        role: role.get(),
        account_type: AccountType::from_label(&account_type.get()),
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
                "Add account"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title="Add account" on_close=on_close footer=footer>
            <div class="form__group">
                <Label>"Full name *"</Label>
                <Input value=name />
            </div>
            <div class="form__group">
                <Label>"Email *"</Label>
                <Input value=email />
            </div>
            <div class="form__group">
                <Label>"Account type *"</Label>
                <select
                    class="form__select"
                    on:change=move |ev| account_type.set(event_target_value(&ev))
                    prop:value=move || account_type.get()
                >
                    <option value="">"Select a type"</option>
                    {AccountType::labels().into_iter().map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <Label>"Role"</Label>
                <Input value=role placeholder="Defaults to the account type" />
            </div>
            <p class="form__hint">
                "New accounts start active with the default permissions of their type."
            </p>
        </Modal>
    }
}
