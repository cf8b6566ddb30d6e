use contracts::shared::list_view::{DialogState, ListEvent, ListRecord};
use contracts::system::activity_log::mock::seed_activity_log;
use contracts::system::activity_log::{list_config, ActivityLogEntry, Severity};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::confirm_delete::ConfirmDeleteDialog;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_filters::{ActiveFilterTags, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

pub fn severity_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Info => BadgeColor::Informative,
        Severity::Warning => BadgeColor::Warning,
        Severity::Error => BadgeColor::Danger,
    }
}

/// Audit trail, newest first. Entries can be deleted but not added.
#[component]
pub fn ActivityLogList() -> impl IntoView {
    let model = ListViewModel::new("activity_log", list_config(), seed_activity_log());
    let page = model.page();
    let query = model.query();
    let dialog = model.dialog();
    let filters_expanded = RwSignal::new(true);

    view! {
        <PageFrame page_id="sys_activity_log--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Activity Log"</h1>
                    <Badge>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=model.active_filters_count()
                    pagination_controls=view! {
                        <PaginationControls
                            current_page=Signal::derive(move || page.with(|p| p.page_index))
                            total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                            total_count=Signal::derive(move || page.with(|p| p.total_count))
                            page_size=Signal::derive(move || page.with(|p| p.page_size))
                            on_page_change=model.on_page_change()
                            on_page_size_change=model.on_page_size_change()
                            page_size_options=model.page_size_options()
                        />
                    }.into_any()
                    filter_tags=view! { <ActiveFilterTags model=model /> }.into_any()
                >
                    <ListFilters model=model search_placeholder="User, action, details or IP..." />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=130.0>"Time"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Severity"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"User"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Action"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"IP address"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Details"</TableHeaderCell>
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let q = query.get();
                                page.get().items.into_iter().map(move |entry: ActivityLogEntry| {
                                    let id = entry.id;
                                    let user_view = highlight_matches(&entry.user, &q);
                                    let action_view = highlight_matches(&entry.action, &q);
                                    let ip_address_view = highlight_matches(&entry.ip_address, &q);
                                    let details_view = highlight_matches(&entry.details, &q);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(entry.timestamp)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=severity_color(entry.severity)>
                                                        {entry.severity.label()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {user_view}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {action_view}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{entry.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{ip_address_view}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {details_view}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Transparent
                                                    size=ButtonSize::Small
                                                    on_click=move |_| {
                                                        model.dispatch(ListEvent::OpenDelete(id));
                                                    }
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty())>
                        <div class="table-empty">"No log entries match the current filters"</div>
                    </Show>
                </div>
            </div>

            {move || match dialog.get() {
                DialogState::DeleteOpen(entry) => Some(view! {
                    <ConfirmDeleteDialog
                        entity="log entry"
                        name=entry.display_name()
                        on_confirm=Callback::new(move |_| {
                            model.dispatch(ListEvent::ConfirmDelete);
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                _ => None,
            }}
        </PageFrame>
    }
}
