//! Generic request lifecycle shared by list and detail pages.
//!
//! A [`Fetch`] owns a resource keyed on a reload counter (and optionally on a
//! caller-supplied key) and exposes a single [`FetchState`] snapshot.

use crate::api::ApiError;
use leptos::*;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub status: FetchStatus,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T: Clone> FetchState<T> {
    /// Combines the last settled value with the in-flight flag. Data from the
    /// previous load stays visible while a refetch runs.
    pub fn from_parts(settled: Option<Result<T, ApiError>>, loading: bool) -> Self {
        let (data, error) = match settled {
            Some(Ok(data)) => (Some(data), None),
            Some(Err(error)) => (None, Some(error)),
            None => (None, None),
        };
        let status = if loading {
            FetchStatus::Loading
        } else if error.is_some() {
            FetchStatus::Error
        } else if data.is_some() {
            FetchStatus::Success
        } else {
            FetchStatus::Idle
        };
        Self {
            status,
            data,
            error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

pub struct Fetch<T: 'static> {
    pub state: Signal<FetchState<T>>,
    reload: RwSignal<u32>,
}

impl<T: 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetch<T> {}

impl<T: Clone + 'static> Fetch<T> {
    pub fn refetch(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|state| state.data.clone())
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|state| state.error.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(FetchState::is_loading)
    }
}

pub fn use_fetch<T, F, Fut>(fetcher: F) -> Fetch<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_keyed_fetch(|| (), move |_| fetcher())
}

/// Like [`use_fetch`], re-running whenever `key` changes (e.g. a route id).
pub fn use_keyed_fetch<K, T, KF, F, Fut>(key: KF, fetcher: F) -> Fetch<T>
where
    K: Clone + PartialEq + 'static,
    T: Clone + Serialize + DeserializeOwned + 'static,
    KF: Fn() -> K + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let reload = create_rw_signal(0u32);
    let resource = create_resource(move || (key(), reload.get()), move |(key, _)| fetcher(key));
    let settled = create_rw_signal(None::<Result<T, ApiError>>);

    create_effect(move |_| {
        if let Some(result) = resource.get() {
            settled.set(Some(result));
        }
    });

    let loading = resource.loading();
    let state = Signal::derive(move || FetchState::from_parts(settled.get(), loading.get()));

    Fetch { state, reload }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_over_settled_value() {
        let state = FetchState::from_parts(Some(Ok(vec![1, 2])), true);
        assert_eq!(state.status, FetchStatus::Loading);
        assert_eq!(state.data, Some(vec![1, 2]));
    }

    #[test]
    fn settled_results_map_to_success_or_error() {
        let ok: FetchState<u8> = FetchState::from_parts(Some(Ok(3)), false);
        assert_eq!(ok.status, FetchStatus::Success);

        let failed: FetchState<u8> =
            FetchState::from_parts(Some(Err(ApiError::validation("boom"))), false);
        assert_eq!(failed.status, FetchStatus::Error);
        assert!(failed.data.is_none());
        assert_eq!(failed.error, Some(ApiError::validation("boom")));
    }

    #[test]
    fn nothing_settled_is_idle() {
        let state: FetchState<u8> = FetchState::from_parts(None, false);
        assert_eq!(state, FetchState::default());
    }
}
