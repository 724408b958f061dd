use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    state::config::use_app_config,
    utils::time::{format_short_date, format_timestamp},
};
use leptos::*;

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "rounded-full px-2 py-0.5 text-xs font-semibold bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "rounded-full px-2 py-0.5 text-xs font-semibold bg-status-error-bg text-status-error-text"
        }
    }
}

#[component]
pub fn RecordsTable(
    #[prop(into)] employee_name: String,
    records: Vec<AttendanceRecord>,
) -> impl IntoView {
    let tz = use_app_config().time_zone;
    let count = format!("{} records", records.len());

    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="flex items-center justify-between px-6 py-4 border-b border-border">
                <h3 class="text-base font-semibold text-fg">{format!("Attendance for {employee_name}")}</h3>
                <span class="rounded-full bg-surface-muted px-3 py-1 text-xs font-medium text-fg-muted">{count}</span>
            </div>
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Date"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Status"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Recorded At"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {records
                        .into_iter()
                        .map(|record| view! {
                            <tr>
                                <td class="px-6 py-4 text-sm font-medium text-fg">{format_short_date(record.date)}</td>
                                <td class="px-6 py-4">
                                    <span class=status_badge_class(record.status)>
                                        {format!("{} {}", record.status.icon(), record.status)}
                                    </span>
                                </td>
                                <td class="px-6 py-4 text-sm text-fg-muted">{format_timestamp(&record.created_at, tz)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
