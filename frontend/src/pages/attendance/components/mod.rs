pub mod filters;
pub mod mark_form;
pub mod records;
pub mod selector;
pub mod summary;

pub use filters::DateFilters;
pub use mark_form::MarkAttendanceModal;
pub use records::RecordsTable;
pub use selector::EmployeeSelector;
pub use summary::AttendanceStatsCards;
