use contracts::system::users::{PermissionSet, UserAccount, PERMISSION_TAGS};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use crate::shared::modal::Modal;

/// Edits a copy of the account's permission set; nothing reaches the list
/// until "Save". Unchecking a tag while "all" is on drops the sentinel and
/// keeps the remaining tags.
#[component]
pub fn PermissionsDialog(
    user: UserAccount,
    on_save: Callback<UserAccount>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Permissions: {}", user.name);
    let permissions = RwSignal::new(user.permissions.clone());
    let user = StoredValue::new(user);

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    let mut updated = user.get_value();
                    updated.permissions = permissions.get_untracked();
                    on_save.run(updated);
                }
            >
                "Save"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="form__group">
                <label class="settings-toggle">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || permissions.with(PermissionSet::is_all)
                        on:change=move |ev| {
                            let granted = event_target_checked(&ev);
                            permissions.update(|p| p.set_all(granted));
                        }
                    />
                    "Full access (all)"
                </label>
            </div>
            <div class="permissions-grid" class:permissions-grid--all=move || permissions.with(PermissionSet::is_all)>
                {PERMISSION_TAGS.iter().copied().map(|tag| {
                    view! {
                        <label class="settings-toggle">
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || permissions.with(|p| p.contains(tag))
                                on:change=move |ev| {
                                    let granted = event_target_checked(&ev);
                                    permissions.update(|p| p.set(tag, granted));
                                }
                            />
                            {tag}
                        </label>
                    }
                }).collect_view()}
            </div>
        </Modal>
    }
}
