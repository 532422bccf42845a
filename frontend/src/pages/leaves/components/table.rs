use super::status::StatusBadge;
use crate::api::LeaveRequest;
use crate::utils::dates::{format_date_fr, format_duration_fr};
use leptos::*;

/// Leave list; each row links to `{detail_base}/{id}`.
#[component]
pub fn LeaveTable(
    #[prop(into)] leaves: Signal<Vec<LeaveRequest>>,
    detail_base: &'static str,
    #[prop(optional)] show_employee: bool,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border bg-surface-elevated shadow-sm">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        {show_employee.then(|| view! {
                            <th class="px-4 py-3 text-left font-medium text-fg-muted">"Employé"</th>
                        })}
                        <th class="px-4 py-3 text-left font-medium text-fg-muted">"Type"</th>
                        <th class="px-4 py-3 text-left font-medium text-fg-muted">"Du"</th>
                        <th class="px-4 py-3 text-left font-medium text-fg-muted">"Au"</th>
                        <th class="px-4 py-3 text-left font-medium text-fg-muted">"Durée"</th>
                        <th class="px-4 py-3 text-left font-medium text-fg-muted">"Statut"</th>
                        <th class="px-4 py-3"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For each=move || leaves.get() key=|leave| (leave.id, leave.statut) let:leave>
                        <tr class="hover:bg-surface-muted">
                            {show_employee.then(|| {
                                let name = leave.employee_display();
                                view! { <td class="px-4 py-3 text-fg">{name}</td> }
                            })}
                            <td class="px-4 py-3 text-fg">{leave.type_conge.label()}</td>
                            <td class="px-4 py-3 text-fg">{format_date_fr(leave.date_debut)}</td>
                            <td class="px-4 py-3 text-fg">{format_date_fr(leave.date_fin)}</td>
                            <td class="px-4 py-3 text-fg-muted">{format_duration_fr(leave.duration_days())}</td>
                            <td class="px-4 py-3"><StatusBadge status=leave.statut /></td>
                            <td class="px-4 py-3 text-right">
                                <a
                                    href=format!("{}/{}", detail_base, leave.id)
                                    class="text-action-primary-bg hover:underline"
                                >
                                    "Voir"
                                </a>
                            </td>
                        </tr>
                    </For>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::pages::leaves::utils::fixtures::leave;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_link_to_detail_pages() {
        let html = render_to_string(|| {
            let rows = vec![leave(3, LeaveStatus::EnAttente, "Emma Leroy")];
            view! {
                <LeaveTable
                    leaves=Signal::derive(move || rows.clone())
                    detail_base="/superadmin/leaves"
                    show_employee=true
                />
            }
        });
        assert!(html.contains("/superadmin/leaves/3"));
        assert!(html.contains("Emma Leroy"));
        assert!(html.contains("03&#x2F;03&#x2F;2024"));
        assert!(html.contains("3 jours"));
    }
}
