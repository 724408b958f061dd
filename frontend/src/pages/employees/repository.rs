use crate::api::{ApiClient, ApiError, DeleteEmployeeResponse, Employee, NewEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let list = self.client.list_employees().await?;
        log::debug!("loaded {} employees", list.employees.len());
        Ok(list.employees)
    }

    pub async fn create_employee(&self, payload: NewEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn delete_employee(
        &self,
        employee_id: String,
    ) -> Result<DeleteEmployeeResponse, ApiError> {
        self.client.delete_employee(&employee_id).await
    }
}
