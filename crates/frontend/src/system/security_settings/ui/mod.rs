mod fields;

use contracts::system::security_settings::{
    SecuritySettings, SettingsForm, LOG_RETENTION_OPTIONS, SESSION_TIMEOUT_OPTIONS,
};
use fields::{SettingNumber, SettingSelect, SettingToggle};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn SecuritySettingsPage() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::new(SecuritySettings::default()));

    // Field accessors over `form.edited`
    let get = move |f: fn(&SecuritySettings) -> u32| Signal::derive(move || form.with(|s| f(&s.edited)));
    let get_flag = move |f: fn(&SecuritySettings) -> bool| Signal::derive(move || form.with(|s| f(&s.edited)));
    let set = move |f: fn(&mut SecuritySettings, u32)| {
        Callback::new(move |value: u32| form.update(|s| f(&mut s.edited, value)))
    };
    let set_flag = move |f: fn(&mut SecuritySettings, bool)| {
        Callback::new(move |value: bool| form.update(|s| f(&mut s.edited, value)))
    };

    let allowlist_text = move || form.with(|s| s.edited.ip_allowlist.join("\n"));
    let allowlist_enabled = get_flag(|s| s.ip_allowlist_enabled);

    view! {
        <PageFrame page_id="sys_security_settings--detail" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Security Settings"</h1>
                    <Show when=move || form.with(|s| s.is_dirty())>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                            "Unsaved changes"
                        </Badge>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || !form.with(|s| s.is_dirty()))
                        on_click=move |_| form.update(|s| s.discard_changes())
                    >
                        "Discard"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            form.update(|s| s.save());
                            log::info!("security settings saved");
                        }
                    >
                        "Save settings"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || form.with(|s| s.notice.clone()).map(|notice| view! {
                    <div class="alert alert--success">
                        {icon("check-circle")}
                        <span>{notice.message}</span>
                        <button
                            class="button button--icon alert__close"
                            on:click=move |_| form.update(|s| s.dismiss_notice())
                        >
                            {icon("x")}
                        </button>
                    </div>
                })}

                <div class="settings-grid">
                    <section class="settings-section">
                        <h2 class="settings-section__title">"Authentication"</h2>
                        <SettingToggle
                            label="Require two-factor authentication"
                            value=get_flag(|s| s.two_factor_required)
                            on_change=set_flag(|s, v| s.two_factor_required = v)
                        />
                        <SettingSelect
                            label="Session timeout"
                            options=SESSION_TIMEOUT_OPTIONS
                            unit="minutes"
                            value=get(|s| s.session_timeout_minutes)
                            on_change=set(|s, v| s.session_timeout_minutes = v)
                        />
                        <SettingNumber
                            label="Max login attempts"
                            min=1
                            max=20
                            value=get(|s| s.max_login_attempts)
                            on_change=set(|s, v| s.max_login_attempts = v)
                        />
                        <SettingNumber
                            label="Lockout duration (minutes)"
                            min=1
                            max=1440
                            value=get(|s| s.lockout_minutes)
                            on_change=set(|s, v| s.lockout_minutes = v)
                        />
                    </section>

                    <section class="settings-section">
                        <h2 class="settings-section__title">"Password policy"</h2>
                        <SettingNumber
                            label="Minimum length"
                            min=6
                            max=64
                            value=get(|s| s.password_min_length)
                            on_change=set(|s, v| s.password_min_length = v)
                        />
                        <SettingNumber
                            label="Expires after (days)"
                            min=0
                            max=365
                            value=get(|s| s.password_expiry_days)
                            on_change=set(|s, v| s.password_expiry_days = v)
                        />
                    </section>

                    <section class="settings-section">
                        <h2 class="settings-section__title">"Network access"</h2>
                        <SettingToggle
                            label="Restrict access to an IP allowlist"
                            value=allowlist_enabled
                            on_change=set_flag(|s, v| s.ip_allowlist_enabled = v)
                        />
                        <div class="form__group">
                            <label class="form__label">"Allowed addresses (one per line)"</label>
                            <textarea
                                class="form__textarea"
                                rows=4
                                prop:value=allowlist_text
                                disabled=move || !allowlist_enabled.get()
                                on:change=move |ev| {
                                    let parsed = SecuritySettings::parse_allowlist(&event_target_value(&ev));
                                    form.update(|s| s.edited.ip_allowlist = parsed);
                                }
                            />
                        </div>
                    </section>

                    <section class="settings-section">
                        <h2 class="settings-section__title">"Alerts and retention"</h2>
                        <SettingToggle
                            label="Email security alerts"
                            value=get_flag(|s| s.email_alerts)
                            on_change=set_flag(|s, v| s.email_alerts = v)
                        />
                        <SettingToggle
                            label="Alert on repeated failed logins"
                            value=get_flag(|s| s.alert_on_failed_logins)
                            on_change=set_flag(|s, v| s.alert_on_failed_logins = v)
                        />
                        <SettingSelect
                            label="Keep activity logs for"
                            options=LOG_RETENTION_OPTIONS
                            unit="days"
                            value=get(|s| s.log_retention_days)
                            on_change=set(|s, v| s.log_retention_days = v)
                        />
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}
