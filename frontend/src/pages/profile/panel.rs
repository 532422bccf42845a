use super::view_model::use_profile_view_model;
use crate::components::{
    common::{Button, DetailRow},
    error::InlineErrorMessage,
    forms::TextField,
    layout::PageHeader,
};
use crate::state::auth::use_auth;
use crate::utils::dates::format_datetime_fr;
use leptos::{ev::SubmitEvent, *};

const CARD_CLASS: &str = "space-y-4 rounded-lg border border-border bg-surface-elevated p-6 shadow-sm";

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let vm = use_profile_view_model();
    let saving_names = vm.names_action.pending();
    let saving_password = vm.password_action.pending();

    let user = move || auth.with(|state| state.user.clone());

    let on_names = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_names();
    };
    let on_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_password();
    };

    view! {
        <PageHeader title="Mon profil" subtitle="Informations personnelles et sécurité du compte." />
        <div class="grid gap-6 lg:grid-cols-2">
            <section class=CARD_CLASS>
                <h2 class="text-lg font-semibold text-fg">"Compte"</h2>
                <dl class="divide-y divide-border">
                    <DetailRow label="Email">{move || user().map(|u| u.email).unwrap_or_default()}</DetailRow>
                    <DetailRow label="Rôle">
                        {move || user().map(|u| u.role.label()).unwrap_or_default()}
                    </DetailRow>
                    <DetailRow label="Membre depuis">
                        {move || {
                            user()
                                .and_then(|u| u.created_at)
                                .map(format_datetime_fr)
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </DetailRow>
                </dl>
                <form class="space-y-4" on:submit=on_names>
                    <InlineErrorMessage error=vm.names_error />
                    <TextField label="Prénom" value=vm.first_name field="first_name" required=true error=vm.names_error />
                    <TextField label="Nom" value=vm.last_name field="last_name" required=true error=vm.names_error />
                    <div class="flex justify-end">
                        <Button attr:type="submit" loading=Signal::derive(move || saving_names.get())>
                            "Enregistrer"
                        </Button>
                    </div>
                </form>
            </section>
            <section class=CARD_CLASS>
                <h2 class="text-lg font-semibold text-fg">"Changer le mot de passe"</h2>
                <form class="space-y-4" on:submit=on_password>
                    <InlineErrorMessage error=vm.password_error />
                    <TextField
                        label="Mot de passe actuel"
                        value=vm.current_password
                        field="old_password"
                        input_type="password"
                        required=true
                        error=vm.password_error
                    />
                    <TextField
                        label="Nouveau mot de passe"
                        value=vm.new_password
                        field="new_password"
                        input_type="password"
                        required=true
                        error=vm.password_error
                    />
                    <TextField
                        label="Confirmation"
                        value=vm.confirm_password
                        field="confirm_password"
                        input_type="password"
                        required=true
                        error=vm.password_error
                    />
                    <div class="flex justify-end">
                        <Button attr:type="submit" loading=Signal::derive(move || saving_password.get())>
                            "Modifier"
                        </Button>
                    </div>
                </form>
            </section>
        </div>
    }
}
