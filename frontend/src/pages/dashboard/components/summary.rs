use crate::{
    api::DashboardSummary,
    components::cards::{CardTone, SummaryCard},
    pages::dashboard::utils::format_rate,
};
use leptos::*;

#[component]
pub fn SummaryCards(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <SummaryCard icon="👥" label="Total Employees" value={summary.total_employees.to_string()} tone=CardTone::Accent />
            <SummaryCard icon="✅" label="Present Today" value={summary.present_today.to_string()} tone=CardTone::Success />
            <SummaryCard icon="❌" label="Absent Today" value={summary.absent_today.to_string()} tone=CardTone::Danger />
            <SummaryCard icon="📈" label="Attendance Rate" value={format_rate(summary.attendance_rate)} tone=CardTone::Info />
        </div>
    }
}
