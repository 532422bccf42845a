use super::repository::ProfileRepository;
use crate::api::{ApiError, ChangePasswordRequest, MessageResponse, ProfileUpdateRequest, User};
use crate::pages::forgot_password::utils::validate_new_password;
use crate::pages::org::form::required_text;
use crate::state::{
    auth::{set_current_user, use_auth},
    toast::use_toasts,
};
use leptos::*;

pub fn validate_names(first_name: &str, last_name: &str) -> Result<ProfileUpdateRequest, ApiError> {
    Ok(ProfileUpdateRequest {
        first_name: required_text(first_name, "first_name", "Le prénom est obligatoire.")?,
        last_name: required_text(last_name, "last_name", "Le nom est obligatoire.")?,
    })
}

pub fn validate_password_change(
    current: &str,
    new_password: &str,
    confirmation: &str,
) -> Result<ChangePasswordRequest, ApiError> {
    if current.is_empty() {
        return Err(ApiError::field(
            "old_password",
            "Veuillez saisir votre mot de passe actuel.",
        ));
    }
    let new_password = validate_new_password(new_password, confirmation)?;
    Ok(ChangePasswordRequest {
        old_password: current.to_string(),
        new_password,
    })
}

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub names_error: RwSignal<Option<ApiError>>,
    pub names_action: Action<ProfileUpdateRequest, Result<User, ApiError>>,
    pub current_password: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub password_error: RwSignal<Option<ApiError>>,
    pub password_action: Action<ChangePasswordRequest, Result<MessageResponse, ApiError>>,
}

impl ProfileViewModel {
    pub fn submit_names(&self) {
        if self.names_action.pending().get_untracked() {
            return;
        }
        match validate_names(&self.first_name.get_untracked(), &self.last_name.get_untracked()) {
            Ok(request) => {
                self.names_error.set(None);
                self.names_action.dispatch(request);
            }
            Err(err) => self.names_error.set(Some(err)),
        }
    }

    pub fn submit_password(&self) {
        if self.password_action.pending().get_untracked() {
            return;
        }
        match validate_password_change(
            &self.current_password.get_untracked(),
            &self.new_password.get_untracked(),
            &self.confirm_password.get_untracked(),
        ) {
            Ok(request) => {
                self.password_error.set(None);
                self.password_action.dispatch(request);
            }
            Err(err) => self.password_error.set(Some(err)),
        }
    }

    fn clear_passwords(&self) {
        self.current_password.set(String::new());
        self.new_password.set(String::new());
        self.confirm_password.set(String::new());
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let repository = ProfileRepository::from_context();
    let (auth, set_auth) = use_auth();
    let toasts = use_toasts();

    let user = auth.get_untracked().user;
    let first_name = create_rw_signal(
        user.as_ref()
            .map(|user| user.first_name.clone())
            .unwrap_or_default(),
    );
    let last_name = create_rw_signal(
        user.as_ref()
            .map(|user| user.last_name.clone())
            .unwrap_or_default(),
    );

    let names_repo = repository.clone();
    let names_action = create_action(move |request: &ProfileUpdateRequest| {
        let repo = names_repo.clone();
        let request = request.clone();
        async move { repo.update_names(&request).await }
    });
    let password_action = create_action(move |request: &ChangePasswordRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.change_password(&request).await }
    });

    let vm = ProfileViewModel {
        first_name,
        last_name,
        names_error: create_rw_signal(None),
        names_action,
        current_password: create_rw_signal(String::new()),
        new_password: create_rw_signal(String::new()),
        confirm_password: create_rw_signal(String::new()),
        password_error: create_rw_signal(None),
        password_action,
    };

    create_effect(move |_| {
        if let Some(result) = names_action.value().get() {
            match result {
                Ok(user) => {
                    set_current_user(set_auth, user);
                    toasts.success("Profil mis à jour.");
                }
                Err(err) => vm.names_error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = password_action.value().get() {
            match result {
                Ok(_) => {
                    vm.clear_passwords();
                    toasts.success("Mot de passe modifié.");
                }
                Err(err) => vm.password_error.set(Some(err)),
            }
        }
    });

    vm
}
