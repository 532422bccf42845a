use super::{
    repository::{BulkDeleteOutcome, CrudRepository},
    utils::{export_csv, export_filename, filter_by_query, SelectionState},
    OrgPage,
};
use crate::state::{
    fetch::{use_fetch, Fetch},
    toast::use_toasts,
};
use crate::utils::{dates::today, trigger_csv_download};
use leptos::*;

pub struct OrgIndexViewModel<E: 'static> {
    pub fetch: Fetch<Vec<E>>,
    pub query: RwSignal<String>,
    pub filter_value: RwSignal<String>,
    pub visible: Signal<Vec<E>>,
    pub selection: RwSignal<SelectionState>,
    pub bulk_delete: Action<Vec<i64>, BulkDeleteOutcome>,
    pub bulk_error: RwSignal<Option<String>>,
}

impl<E: 'static> Clone for OrgIndexViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static> Copy for OrgIndexViewModel<E> {}

impl<E: OrgPage> OrgIndexViewModel<E> {
    pub fn visible_ids(&self) -> Vec<i64> {
        self.visible
            .with(|items| items.iter().map(|item| item.id()).collect())
    }

    pub fn toggle_all(&self) {
        let visible = self.visible_ids();
        self.selection.update(|selection| selection.toggle_all(&visible));
    }

    pub fn delete_selected(&self) {
        let ids = self.selection.with_untracked(SelectionState::ids);
        if !ids.is_empty() {
            self.bulk_error.set(None);
            self.bulk_delete.dispatch(ids);
        }
    }

    /// Downloads the rows currently on screen.
    pub fn export(&self) -> Result<usize, String> {
        let items = self.visible.get_untracked();
        let csv = export_csv(&items);
        trigger_csv_download(&export_filename::<E>(today()), &csv)?;
        Ok(items.len())
    }
}

/// `matches` narrows the list by the extra filter select, if the page has one.
pub fn use_org_index<E: OrgPage>(matches: Option<fn(&E, &str) -> bool>) -> OrgIndexViewModel<E> {
    let repo = CrudRepository::<E>::from_context();
    let toasts = use_toasts();

    let list_repo = repo.clone();
    let fetch = use_fetch(move || {
        let repo = list_repo.clone();
        async move { repo.list().await }
    });
    let query = create_rw_signal(String::new());
    let filter_value = create_rw_signal(String::new());
    let selection = create_rw_signal(SelectionState::default());
    let bulk_error = create_rw_signal(None::<String>);

    let visible = Signal::derive(move || {
        let query = query.get();
        let filter = filter_value.get();
        fetch
            .state
            .with(|state| {
                state.data.as_deref().map(|items| {
                    let mut found = filter_by_query(items, &query);
                    if let Some(matches) = matches {
                        if !filter.is_empty() {
                            found.retain(|item| matches(item, &filter));
                        }
                    }
                    found
                })
            })
            .unwrap_or_default()
    });

    create_effect(move |_| {
        let ids: Vec<i64> = visible.with(|items| items.iter().map(|item| item.id()).collect());
        selection.update(|selection| selection.retain_visible(&ids));
    });

    let bulk_delete = create_action(move |ids: &Vec<i64>| {
        let repo = repo.clone();
        let ids = ids.clone();
        async move { repo.bulk_delete(&ids).await }
    });

    create_effect(move |_| {
        if let Some(outcome) = bulk_delete.value().get() {
            if let Some(message) = outcome.success_message() {
                toasts.success(message);
            }
            bulk_error.set(outcome.failure_message());
            selection.update(|selection| selection.remove_all(&outcome.deleted));
            fetch.refetch();
        }
    });

    OrgIndexViewModel {
        fetch,
        query,
        filter_value,
        visible,
        selection,
        bulk_delete,
        bulk_error,
    }
}
