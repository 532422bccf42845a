use super::{utils::ReviewDecision, view_model::submit_review};
use crate::api::{ApiError, LeaveRequest};
use crate::components::{
    common::{DANGER_ACTION, PRIMARY_ACTION, SECONDARY_ACTION},
    confirm_dialog::Modal,
    error::InlineErrorMessage,
    forms::TextAreaField,
};
use crate::pages::leaves::repository::LeaveRepository;
use leptos::{ev::SubmitEvent, *};

/// Approve/reject dialog. Open while `decision` holds a value.
#[component]
pub fn ReviewDialog(
    decision: RwSignal<Option<ReviewDecision>>,
    #[prop(into)] leave: Signal<Option<LeaveRequest>>,
    on_reviewed: Callback<ReviewDecision>,
) -> impl IntoView {
    let repo = LeaveRepository::from_context();
    let raison = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let review_action = create_action(
        move |(leave, decision, raison): &(LeaveRequest, ReviewDecision, String)| {
            let repo = repo.clone();
            let (leave, decision, raison) = (leave.clone(), *decision, raison.clone());
            async move {
                submit_review(&repo, &leave, decision, &raison)
                    .await
                    .map(|_| decision)
            }
        },
    );
    let pending = review_action.pending();

    create_effect(move |_| {
        if let Some(result) = review_action.value().get() {
            match result {
                Ok(done) => {
                    error.set(None);
                    raison.set(String::new());
                    decision.set(None);
                    on_reviewed.call(done);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let close = Callback::new(move |_| {
        error.set(None);
        raison.set(String::new());
        decision.set(None);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if let (Some(current), Some(leave)) = (decision.get_untracked(), leave.get_untracked()) {
            review_action.dispatch((leave, current, raison.get_untracked()));
        }
    };

    let title = Signal::derive(move || {
        decision
            .get()
            .map(|d| d.title().to_string())
            .unwrap_or_default()
    });
    let reason_label = move || decision.get().map(|d| d.reason_label()).unwrap_or_default();
    let confirm_class = move || match decision.get() {
        Some(ReviewDecision::Reject) => DANGER_ACTION,
        _ => PRIMARY_ACTION,
    };
    let confirm_label = move || decision.get().map(|d| d.confirm_label()).unwrap_or_default();
    let required = move || decision.get().map(|d| d.requires_reason()).unwrap_or(false);

    view! {
        <Modal
            is_open=Signal::derive(move || decision.get().is_some())
            title=title
            on_close=close
        >
            <form class="space-y-4" on:submit=on_submit>
                <InlineErrorMessage error=error />
                {move || {
                    view! {
                        <TextAreaField
                            label=reason_label()
                            value=raison
                            field="raison"
                            rows=3
                            required=required()
                            error=error
                        />
                    }
                }}
                <div class="flex justify-end gap-2">
                    <button type="button" class=SECONDARY_ACTION on:click=move |_| close.call(())>
                        "Annuler"
                    </button>
                    <button type="submit" class=confirm_class disabled=move || pending.get()>
                        {confirm_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::pages::leaves::utils::fixtures::leave;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn reject_dialog_marks_reason_required() {
        let html = render_to_string(|| {
            let decision = create_rw_signal(Some(ReviewDecision::Reject));
            let source = leave(5, LeaveStatus::EnAttente, "Emma Leroy");
            view! {
                <ReviewDialog
                    decision=decision
                    leave=Signal::derive(move || Some(source.clone()))
                    on_reviewed=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Rejeter la demande"));
        assert!(html.contains("Raison du rejet"));
        assert!(html.contains("bg-action-danger-bg"));
    }

    #[test]
    fn closed_dialog_is_not_rendered() {
        let html = render_to_string(|| {
            let decision = create_rw_signal(None::<ReviewDecision>);
            view! {
                <ReviewDialog
                    decision=decision
                    leave=Signal::derive(|| None)
                    on_reviewed=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}
