use super::{
    utils::ResetStep,
    view_model::{use_forgot_password_view_model, ForgotPasswordViewModel},
};
use crate::api::ApiError;
use crate::components::{
    common::{PRIMARY_ACTION, SECONDARY_ACTION},
    error::InlineErrorMessage,
    forms::TextField,
    layout::SuccessMessage,
};
use leptos::{ev::SubmitEvent, *};

const STEPS: [ResetStep; 3] = [ResetStep::Email, ResetStep::OtpVerify, ResetStep::NewPassword];

#[component]
fn StepIndicator(step: RwSignal<ResetStep>) -> impl IntoView {
    view! {
        <ol class="flex justify-between text-xs font-medium">
            {STEPS
                .into_iter()
                .map(|item| {
                    let class = move || {
                        if step.get().number() >= item.number() {
                            "text-action-primary-bg"
                        } else {
                            "text-fg-muted"
                        }
                    };
                    view! { <li class=class>{format!("{}. {}", item.number(), item.title())}</li> }
                })
                .collect_view()}
        </ol>
    }
}

fn step_fields(vm: ForgotPasswordViewModel, step: ResetStep) -> View {
    let error: Signal<Option<ApiError>> = vm.error.into();
    match step {
        ResetStep::Email => view! {
            <TextField label="Email" value=vm.email field="email" input_type="email" required=true error=error />
        }
        .into_view(),
        ResetStep::OtpVerify => {
            let resending = vm.resend_action.pending();
            view! {
                <p class="text-sm text-fg-muted">{move || format!("Code envoyé à {}", vm.email.get())}</p>
                <TextField label="Code de vérification" value=vm.otp field="otp" required=true error=error />
                <div class="flex justify-between text-sm">
                    <button type="button" class="text-fg-muted hover:text-fg" on:click=move |_| vm.back()>
                        "Modifier l'email"
                    </button>
                    <button
                        type="button"
                        class="text-action-primary-bg hover:underline disabled:opacity-50"
                        disabled=move || resending.get()
                        on:click=move |_| vm.resend()
                    >
                        {move || if resending.get() { "Envoi…" } else { "Renvoyer le code" }}
                    </button>
                </div>
            }
            .into_view()
        }
        ResetStep::NewPassword => view! {
            <TextField
                label="Nouveau mot de passe"
                value=vm.new_password
                field="new_password"
                input_type="password"
                required=true
                error=error
            />
            <TextField
                label="Confirmation"
                value=vm.confirm_password
                field="confirm_password"
                input_type="password"
                required=true
                error=error
            />
        }
        .into_view(),
    }
}

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let pending = vm.submit_action.pending();
    let step = vm.step;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let submit_label = move || match (pending.get(), step.get()) {
        (true, _) => "Envoi…",
        (false, ResetStep::Email) => "Recevoir un code",
        (false, ResetStep::OtpVerify) => "Vérifier le code",
        (false, ResetStep::NewPassword) => "Réinitialiser",
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-fg">"Mot de passe oublié"</h1>
                    <p class="mt-2 text-sm text-fg-muted">{move || step.get().hint()}</p>
                </div>
                <StepIndicator step=step />
                <form
                    class="space-y-5 rounded-lg border border-border bg-surface-elevated p-6 shadow-sm"
                    on:submit=on_submit
                >
                    {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
                    <InlineErrorMessage error=vm.error />
                    {move || step_fields(vm, step.get())}
                    <button
                        type="submit"
                        class=format!("{} w-full", PRIMARY_ACTION)
                        disabled=move || pending.get()
                    >
                        {submit_label}
                    </button>
                    <a href="/" class=format!("{} w-full", SECONDARY_ACTION)>"Retour à la connexion"</a>
                </form>
            </div>
        </div>
    }
}
