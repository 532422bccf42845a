use super::view_model::use_login_view_model;
use crate::components::{common::PRIMARY_ACTION, error::InlineErrorMessage, forms::TextField};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <i class="fas fa-users-cog text-4xl text-action-primary-bg"></i>
                    <h1 class="mt-4 text-3xl font-extrabold text-fg">"Gestion RH"</h1>
                    <p class="mt-2 text-sm text-fg-muted">"Connectez-vous à votre espace"</p>
                </div>
                <form
                    class="space-y-5 rounded-lg border border-border bg-surface-elevated p-6 shadow-sm"
                    on:submit=on_submit
                >
                    <InlineErrorMessage error=vm.error />
                    <TextField
                        label="Email"
                        value=vm.form.email
                        field="email"
                        input_type="email"
                        required=true
                        error=vm.error
                    />
                    <TextField
                        label="Mot de passe"
                        value=vm.form.password
                        field="password"
                        input_type="password"
                        required=true
                        error=vm.error
                    />
                    <div class="flex items-center justify-between text-sm">
                        <a href="/forgot-password" class="text-action-primary-bg hover:underline">
                            "Mot de passe oublié ?"
                        </a>
                    </div>
                    <button
                        type="submit"
                        class=format!("{} w-full", PRIMARY_ACTION)
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Connexion…" } else { "Se connecter" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
