use super::{repository::CrudRepository, OrgPage};
use crate::api::{ApiError, OrgEntity};
use crate::components::{
    common::{Button, SECONDARY_ACTION},
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageHeader},
};
use crate::state::{fetch::use_keyed_fetch, toast::use_toasts};
use crate::utils::browser;
use leptos::{ev::SubmitEvent, *};

#[derive(Clone, Copy)]
pub enum FormMode {
    Create,
    Edit(Signal<Option<i64>>),
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

/// Signals behind one record's create/edit form.
pub trait EntityForm: Copy + 'static {
    type Entity: OrgPage;

    fn new() -> Self;
    fn load(&self, entity: &Self::Entity);
    /// Client-side checks, then the request body.
    fn payload(&self, creating: bool) -> Result<<Self::Entity as OrgEntity>::Payload, ApiError>;
    fn fields(self, error: Signal<Option<ApiError>>, creating: bool) -> View;
}

/// `POST` for a new record, `PUT` for an existing one.
pub async fn save_entity<E: OrgEntity>(
    repo: &CrudRepository<E>,
    id: Option<i64>,
    payload: E::Payload,
) -> Result<E, ApiError> {
    match id {
        Some(id) => repo.update(id, payload).await,
        None => repo.create(payload).await,
    }
}

/// Required text input: trimmed, or a field error.
pub fn required_text(value: &str, field: &str, message: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::field(field, message))
    } else {
        Ok(value.to_string())
    }
}

/// Optional id select: empty means none.
pub fn optional_id(value: &str, field: &str) -> Result<Option<i64>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ApiError::field(field, "Sélection invalide."))
}

pub fn org_form<F: EntityForm>(mode: FormMode) -> impl IntoView {
    let repo = CrudRepository::<F::Entity>::from_context();
    let toasts = use_toasts();
    let navigate = browser::use_navigator();
    let form = F::new();
    let error = create_rw_signal(None::<ApiError>);
    let creating = mode.is_create();
    let loaded = create_rw_signal(creating);

    let fetch = match mode {
        FormMode::Create => None,
        FormMode::Edit(id) => {
            let repo = repo.clone();
            Some(use_keyed_fetch(
                move || id.get(),
                move |id| {
                    let repo = repo.clone();
                    async move {
                        match id {
                            Some(id) => repo.get(id).await,
                            None => Err(ApiError::validation("Identifiant invalide.")),
                        }
                    }
                },
            ))
        }
    };

    if let Some(fetch) = fetch {
        create_effect(move |_| {
            if let Some(entity) = fetch.data() {
                form.load(&entity);
                loaded.set(true);
            }
        });
    }

    let save_action = create_action(
        move |(id, payload): &(Option<i64>, <F::Entity as OrgEntity>::Payload)| {
            let repo = repo.clone();
            let (id, payload) = (*id, payload.clone());
            async move { save_entity(&repo, id, payload).await }
        },
    );
    let pending = save_action.pending();

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    error.set(None);
                    toasts.success(if creating {
                        "Enregistrement créé."
                    } else {
                        "Modifications enregistrées."
                    });
                    navigate.call(F::Entity::detail_path(saved.id()));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let current_id = move || match mode {
        FormMode::Create => None,
        FormMode::Edit(id) => id.get_untracked(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.payload(creating) {
            Ok(payload) => {
                error.set(None);
                save_action.dispatch((current_id(), payload));
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let cancel_href = match mode {
        FormMode::Create => F::Entity::BASE_PATH.to_string(),
        FormMode::Edit(id) => id
            .get_untracked()
            .map(F::Entity::detail_path)
            .unwrap_or_else(|| F::Entity::BASE_PATH.to_string()),
    };
    let cancel_href = store_value(cancel_href);
    let title = if creating {
        F::Entity::NEW_TITLE
    } else {
        F::Entity::EDIT_TITLE
    };
    let fetch_error = Signal::derive(move || fetch.and_then(|fetch| fetch.error()));

    view! {
        <PageHeader title=title />
        <InlineErrorMessage error=fetch_error />
        <Show
            when=move || loaded.get()
            fallback=move || {
                if fetch_error.get().is_none() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            <form
                class="space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-sm"
                on:submit=on_submit
            >
                <InlineErrorMessage error=error />
                {form.fields(error.into(), creating)}
                <div class="flex justify-end gap-2">
                    <a href=cancel_href.get_value() class=SECONDARY_ACTION>"Annuler"</a>
                    <Button attr:type="submit" loading=Signal::derive(move || pending.get())>
                        "Enregistrer"
                    </Button>
                </div>
            </form>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_or_flags_the_field() {
        assert_eq!(required_text("  RH ", "nom", "Requis").unwrap(), "RH");
        let err = required_text("   ", "nom", "Le nom est obligatoire.").unwrap_err();
        assert_eq!(err.field_message("nom").as_deref(), Some("Le nom est obligatoire."));
    }

    #[test]
    fn optional_id_accepts_empty_and_numbers() {
        assert_eq!(optional_id("", "poste").unwrap(), None);
        assert_eq!(optional_id("12", "poste").unwrap(), Some(12));
        assert!(optional_id("abc", "poste").is_err());
    }
}
