//! Sidebar with collapsible menu groups. Clicking an item opens its tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn menu_item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "layout-dashboard",
            items: vec![
                menu_item("d400_overview", "layout-dashboard"),
                menu_item("d401_reports", "bar-chart"),
                menu_item("d402_client_portal", "shield"),
            ],
        },
        MenuGroup {
            id: "consulting",
            label: "Consulting",
            icon: "briefcase",
            items: vec![
                menu_item("a001_client", "briefcase"),
                menu_item("a002_consultant", "users"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "settings",
            items: vec![
                menu_item("sys_users", "user-cog"),
                menu_item("sys_activity_log", "activity"),
                menu_item("sys_security_settings", "shield"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.get().contains(&group_id);

                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|(key, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--child"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, label, _) in group.items {
                assert!(!label.is_empty(), "missing tab label for {key}");
            }
        }
    }
}
