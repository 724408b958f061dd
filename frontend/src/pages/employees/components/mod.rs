pub mod add_form;
pub mod delete_dialog;
pub mod table;

pub use add_form::AddEmployeeModal;
pub use delete_dialog::DeleteEmployeeDialog;
pub use table::EmployeeTable;
