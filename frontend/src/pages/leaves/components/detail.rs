use super::status::StatusBadge;
use crate::api::LeaveRequest;
use crate::components::common::DetailRow;
use crate::utils::dates::{format_date_fr, format_datetime_fr, format_duration_fr};
use leptos::*;

/// Read-only fields of one request, shared by the employee and reviewer views.
#[component]
pub fn LeaveSummary(leave: LeaveRequest, #[prop(optional)] show_employee: bool) -> impl IntoView {
    let raison = leave
        .raison
        .clone()
        .filter(|text| !text.trim().is_empty());
    let description = if leave.description.trim().is_empty() {
        "—".to_string()
    } else {
        leave.description.clone()
    };

    let employee = show_employee.then(|| leave.employee_display());
    let type_label = leave.type_conge.label();
    let start = format_date_fr(leave.date_debut);
    let end = format_date_fr(leave.date_fin);
    let duration = format_duration_fr(leave.duration_days());
    let status = leave.statut;
    let created = leave.created_at.map(format_datetime_fr);

    view! {
        <dl class="divide-y divide-border rounded-lg border border-border bg-surface-elevated px-4 shadow-sm">
            {employee.map(|name| view! { <DetailRow label="Employé">{name}</DetailRow> })}
            <DetailRow label="Type de congé">{type_label}</DetailRow>
            <DetailRow label="Date de début">{start}</DetailRow>
            <DetailRow label="Date de fin">{end}</DetailRow>
            <DetailRow label="Durée">{duration}</DetailRow>
            <DetailRow label="Statut"><StatusBadge status=status /></DetailRow>
            <DetailRow label="Description">{description}</DetailRow>
            {raison.map(|text| view! { <DetailRow label="Commentaire du validateur">{text}</DetailRow> })}
            {created.map(|at| view! { <DetailRow label="Créée le">{at}</DetailRow> })}
        </dl>
    }
}
