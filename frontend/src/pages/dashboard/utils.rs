use crate::api::DashboardSummary;

/// Whole percentages drop the fraction: `80` -> "80%", `66.7` -> "66.7%".
pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.0}%", rate)
    } else {
        format!("{:.1}%", rate)
    }
}

pub fn overview_hint(summary: &DashboardSummary) -> Option<&'static str> {
    if summary.total_employees == 0 {
        Some("Get started by adding your first employee from the Employees page.")
    } else if summary.present_today + summary.absent_today == 0 {
        Some("No attendance has been recorded for today yet. Head to the Attendance page to mark attendance.")
    } else {
        None
    }
}
