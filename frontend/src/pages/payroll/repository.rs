use crate::api::{ApiClient, ApiError, CreatePayroll, PayrollRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct PayrollRepository {
    client: Rc<ApiClient>,
}

impl PayrollRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        self.client.list_payrolls().await
    }

    pub async fn create(&self, payload: &CreatePayroll) -> Result<(), ApiError> {
        self.client.create_payroll(payload).await
    }
}
