mod add_dialog;
mod permissions_dialog;

use add_dialog::AddUserDialog;
use contracts::shared::list_view::{DialogState, ListEvent};
use contracts::system::users::mock::seed_users;
use contracts::system::users::{list_config, AccountStatus, UserAccount, UserAccountDraft};
use leptos::prelude::*;
use permissions_dialog::PermissionsDialog;
use thaw::*;

use crate::shared::components::confirm_delete::ConfirmDeleteDialog;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_filters::{ActiveFilterTags, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::list_view::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn UsersList() -> impl IntoView {
    let model = ListViewModel::new("users", list_config(), seed_users());
    let page = model.page();
    let query = model.query();
    let dialog = model.dialog();
    let filters_expanded = RwSignal::new(true);

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Accounts"</h1>
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
                        " Add account"
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
                    <ListFilters model=model search_placeholder="Name, email or role..." />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Last login"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Permissions"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || {
                                let q = query.get();
                                page.get().items.into_iter().map(move |user: UserAccount| {
                                    let id = user.id;
                                    let name_view = highlight_matches(&user.name, &q);
                                    let email_view = highlight_matches(&user.email, &q);
                                    let role_view = highlight_matches(&user.role, &q);
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
                                                <TableCellLayout truncate=true>
                                                    {role_view}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{user.account_type.as_str()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {match user.status {
                                                        AccountStatus::Active => view! {
                                                            <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Success>
                                                                "Active"
                                                            </Badge>
                                                        }.into_any(),
                                                        AccountStatus::Inactive => view! {
                                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>
                                                                "Inactive"
                                                            </Badge>
                                                        }.into_any(),
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime_opt(user.last_login)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="text-secondary">{user.permissions.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Transparent
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            model.dispatch(ListEvent::OpenPermissions(id));
                                                        }
                                                    >
                                                        {icon("key")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Transparent
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            model.dispatch(ListEvent::OpenDelete(id));
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || page.with(|p| p.items.is_empty())>
                        <div class="table-empty">"No accounts match the current filters"</div>
                    </Show>
                </div>
            </div>

            {move || match dialog.get() {
                DialogState::AddOpen => Some(view! {
                    <AddUserDialog
                        on_confirm=Callback::new(move |draft: UserAccountDraft| {
                            model.dispatch(ListEvent::ConfirmAdd(draft));
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                DialogState::DeleteOpen(user) => Some(view! {
                    <ConfirmDeleteDialog
                        entity="account"
                        name=user.name
                        on_confirm=Callback::new(move |_| {
                            model.dispatch(ListEvent::ConfirmDelete);
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                DialogState::PermissionsOpen(user) => Some(view! {
                    <PermissionsDialog
                        user=user
                        on_save=Callback::new(move |updated: UserAccount| {
                            model.dispatch(ListEvent::ConfirmUpdate(updated));
                        })
                        on_close=Callback::new(move |_| model.dismiss())
                    />
                }.into_any()),
                DialogState::Closed => None,
            }}
        </PageFrame>
    }
}
