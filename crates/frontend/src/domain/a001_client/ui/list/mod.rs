mod add_dialog;

use add_dialog::AddClientDialog;
use contracts::domain::a001_client::mock::seed_clients;
use contracts::domain::a001_client::{list_config, Client, ClientDraft, ClientStatus};
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

fn status_badge(status: ClientStatus) -> impl IntoView {
    let color = match status {
        ClientStatus::Active => BadgeColor::Success,
        ClientStatus::PendingReview => BadgeColor::Warning,
        ClientStatus::PendingApproval => BadgeColor::Informative,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.as_str()}
        </Badge>
    }
}

fn score_class(client: &Client) -> &'static str {
    match client.security_score.value() {
        None => "score score--unassessed",
        Some(85..) => "score score--low",
        Some(70..=84) => "score score--moderate",
        Some(50..=69) => "score score--high",
        Some(_) => "score score--critical",
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    let model = ListViewModel::new("clients", list_config(), seed_clients());
    let page = model.page();
    let query = model.query();
    let dialog = model.dialog();
    let filters_expanded = RwSignal::new(true);

    let open_add = move |_| {
        model.dispatch(ListEvent::OpenAdd);
    };

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clients"</h1>
                    <Badge>
                        {move || page.with(|p| p.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_add>
                        {icon("plus")}
                        " Add client"
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
                    <ListFilters model=model search_placeholder="Name, email, contact or business type..." />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Business type"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Consultants"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Score"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let q = query.get();
                                page.get().items.into_iter().map(move |client: Client| {
                                    let id = client.id;
                                    let name_view = highlight_matches(&client.name, &q);
                                    let contact_view = highlight_matches(&client.contact_person, &q);
                                    let email_view = highlight_matches(&client.email, &q);
                                    let score_cls = score_class(&client);
                                    let score_label = client.security_score.label();
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
                                                <TableCellLayout>{client.business_type.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <div>{contact_view}</div>
                                                    <div class="text-secondary">{email_view}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{client.consultant_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=score_cls>{score_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{status_badge(client.status)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(client.join_date)}</TableCellLayout>
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
                        <div class="table-empty">"No clients match the current filters"</div>
                    </Show>
                </div>
            </div>

            {move || match dialog.get() {
                DialogState::AddOpen => Some(view! {
                    <AddClientDialog
                        on_confirm=Callback::new(move |draft: ClientDraft| {
                            model.dispatch(ListEvent::ConfirmAdd(draft));
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                DialogState::DeleteOpen(client) => Some(view! {
                    <ConfirmDeleteDialog
                        entity="client"
                        name=client.name
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
