mod add_dialog;

use add_dialog::AddConsultantDialog;
use contracts::domain::a002_consultant::mock::seed_consultants;
use contracts::domain::a002_consultant::{list_config, Consultant, ConsultantDraft, ConsultantStatus};
use contracts::shared::list_view::{DialogState, ListEvent};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::confirm_delete::ConfirmDeleteDialog;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_filters::{ActiveFilterTags, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_color(status: ConsultantStatus) -> BadgeColor {
    match status {
        ConsultantStatus::Active => BadgeColor::Success,
        ConsultantStatus::OnLeave => BadgeColor::Warning,
        ConsultantStatus::Inactive => BadgeColor::Subtle,
    }
}

#[component]
pub fn ConsultantList() -> impl IntoView {
    let model = ListViewModel::new("consultants", list_config(), seed_consultants());
    let page = model.page();
    let query = model.query();
    let dialog = model.dialog();
    let filters_expanded = RwSignal::new(true);

    view! {
        <PageFrame page_id="a002_consultant--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consultants"</h1>
                    <Badge>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            model.dispatch(ListEvent::OpenAdd);
                        }
                    >
                        {icon("plus")}
                        " Add consultant"
                    </Button>
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
                    <ListFilters model=model search_placeholder="Name, email or affiliation..." />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=170.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Affiliation"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Clients"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let q = query.get();
                                page.get().items.into_iter().map(move |consultant: Consultant| {
                                    let id = consultant.id;
                                    let name_view = highlight_matches(&consultant.name, &q);
                                    let email_view = highlight_matches(&consultant.email, &q);
                                    let affiliation_view = highlight_matches(&consultant.affiliation, &q);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {name_view}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email_view}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{consultant.role.as_str()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {affiliation_view}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{consultant.client_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=status_color(consultant.status)>
                                                        {consultant.status.as_str()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(consultant.join_date)}</TableCellLayout>
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
                        <div class="table-empty">"No consultants match the current filters"</div>
                    </Show>
                </div>
            </div>

            {move || match dialog.get() {
                DialogState::AddOpen => Some(view! {
                    <AddConsultantDialog
                        on_confirm=Callback::new(move |draft: ConsultantDraft| {
                            model.dispatch(ListEvent::ConfirmAdd(draft));
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                DialogState::DeleteOpen(consultant) => Some(view! {
                    <ConfirmDeleteDialog
                        entity="consultant"
                        name=consultant.name
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
