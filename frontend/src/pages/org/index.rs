use super::{
    utils::SelectionState,
    view_model::{use_org_index, OrgIndexViewModel},
    OrgPage,
};
use crate::components::{
    common::{DANGER_ACTION, PRIMARY_ACTION, SECONDARY_ACTION},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::InlineErrorMessage,
    forms::{SearchInput, INPUT_CLASS},
    layout::{ErrorMessage, LoadingSpinner, PageHeader},
};
use crate::state::toast::use_toasts;
use leptos::*;

/// Extra select narrowing an index, e.g. positions by department.
pub struct IndexFilter<E: 'static> {
    pub label: &'static str,
    pub options: Signal<Vec<(String, String)>>,
    pub matches: fn(&E, &str) -> bool,
}

/// Index screen: search, optional filter, CSV export and bulk delete.
pub fn org_index<E: OrgPage>(filter: Option<IndexFilter<E>>) -> impl IntoView {
    let toasts = use_toasts();
    let vm = use_org_index::<E>(filter.as_ref().map(|filter| filter.matches));
    let fetch = vm.fetch;
    let confirm_open = create_rw_signal(false);
    let deleting = vm.bulk_delete.pending();

    let on_export = move |_| match vm.export() {
        Ok(count) => {
            toasts.info(format!("{} ligne(s) exportée(s).", count));
        }
        Err(err) => {
            log::error!("CSV export failed: {}", err);
            toasts.error("L'export CSV a échoué.");
        }
    };

    let selected_count = move || vm.selection.with(|selection| selection.len());
    let confirm_message = Signal::derive(move || {
        format!(
            "{} élément(s) sélectionné(s) seront supprimé(s). Cette action est définitive.",
            selected_count()
        )
    });

    let filter_select = filter.map(|filter| {
        let value = vm.filter_value;
        let options = filter.options;
        view! {
            <select
                aria-label=filter.label
                class=format!("{} sm:w-60 mt-0", INPUT_CLASS)
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">{filter.label}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, label)| {
                            let selected = value.get() == option_value;
                            view! { <option value=option_value selected=selected>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        }
    });

    view! {
        <PageHeader
            title=E::PLURAL_LABEL
            subtitle=E::INDEX_SUBTITLE
            actions=view! {
                <div class="flex flex-wrap gap-2">
                    <button type="button" class=SECONDARY_ACTION on:click=on_export>
                        <i class="fas fa-file-csv mr-2"></i>
                        "Exporter CSV"
                    </button>
                    <a href=E::new_path() class=PRIMARY_ACTION>
                        <i class="fas fa-plus mr-2"></i>
                        {E::NEW_TITLE}
                    </a>
                </div>
            }
            .into_view()
        />
        <div class="mb-4 flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
            <div class="flex flex-col gap-3 sm:flex-row">
                <SearchInput value=vm.query />
                {filter_select}
            </div>
            <Show when=move || (selected_count() > 0)>
                <button
                    type="button"
                    class=DANGER_ACTION
                    disabled=move || deleting.get()
                    on:click=move |_| confirm_open.set(true)
                >
                    <i class="fas fa-trash mr-2"></i>
                    {move || format!("Supprimer la sélection ({})", selected_count())}
                </button>
            </Show>
        </div>
        <InlineErrorMessage error=Signal::derive(move || fetch.error()) />
        {move || vm.bulk_error.get().map(|message| view! { <ErrorMessage message=message /> })}
        {move || {
            if fetch.loading() && fetch.data().is_none() {
                view! { <LoadingSpinner /> }.into_view()
            } else if fetch.data().is_some() && vm.visible.with(Vec::is_empty) {
                view! { <EmptyState title=E::EMPTY_MESSAGE description="Modifiez la recherche ou créez un nouvel élément." /> }
                    .into_view()
            } else {
                org_table::<E>(vm).into_view()
            }
        }}
        <ConfirmDialog
            is_open=confirm_open.into()
            title="Supprimer la sélection"
            message=confirm_message
            confirm_label="Supprimer"
            confirm_disabled=deleting
            on_confirm=Callback::new(move |_| {
                confirm_open.set(false);
                vm.delete_selected();
            })
            on_cancel=Callback::new(move |_| confirm_open.set(false))
            destructive=true
        />
    }
}

fn org_table<E: OrgPage>(vm: OrgIndexViewModel<E>) -> impl IntoView {
    let selection = vm.selection;
    let all_selected = move || {
        let visible = vm.visible_ids();
        selection.with(|selection| selection.all_selected(&visible))
    };

    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated shadow-sm">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="w-10 px-4 py-3">
                            <input
                                type="checkbox"
                                aria-label="Tout sélectionner"
                                prop:checked=all_selected
                                on:change=move |_| vm.toggle_all()
                            />
                        </th>
                        {E::TABLE_HEADERS
                            .iter()
                            .map(|header| view! { <th class="px-4 py-3 text-left font-medium text-fg-muted">{*header}</th> })
                            .collect_view()}
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || vm.visible.get()
                        key=|item| item.id()
                        children=move |item: E| org_row(item, selection)
                    />
                </tbody>
            </table>
        </div>
    }
}

fn org_row<E: OrgPage>(item: E, selection: RwSignal<SelectionState>) -> impl IntoView {
    let id = item.id();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3">
                <input
                    type="checkbox"
                    aria-label=format!("Sélectionner {}", item.label())
                    prop:checked=move || selection.with(|s| s.is_selected(id))
                    on:change=move |_| selection.update(|s| s.toggle(id))
                />
            </td>
            {item
                .table_cells()
                .into_iter()
                .map(|cell| view! { <td class="px-4 py-3 text-fg">{cell}</td> })
                .collect_view()}
            <td class="px-4 py-3 text-right whitespace-nowrap space-x-3">
                <a href=E::detail_path(id) class="text-action-primary-bg hover:underline">"Voir"</a>
                <a href=E::edit_path(id) class="text-fg-muted hover:text-fg">"Modifier"</a>
            </td>
        </tr>
    }
}
