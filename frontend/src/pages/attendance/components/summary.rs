use crate::{
    components::cards::{CardTone, SummaryCard},
    pages::attendance::utils::AttendanceStats,
};
use leptos::*;

#[component]
pub fn AttendanceStatsCards(#[prop(into)] stats: Signal<AttendanceStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <SummaryCard
                icon="✅"
                label="Present Days"
                value={Signal::derive(move || stats.get().present.to_string())}
                tone=CardTone::Success
            />
            <SummaryCard
                icon="❌"
                label="Absent Days"
                value={Signal::derive(move || stats.get().absent.to_string())}
                tone=CardTone::Danger
            />
            <SummaryCard
                icon="📈"
                label="Attendance Rate"
                value={Signal::derive(move || format!("{}%", stats.get().rate))}
                tone=CardTone::Info
            />
        </div>
    }
}
