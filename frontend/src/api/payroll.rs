use super::{
    client::ApiClient,
    types::{ApiError, CreatePayroll, PayrollListResponse, PayrollRecord},
};

impl ApiClient {
    pub async fn list_payrolls(&self) -> Result<Vec<PayrollRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/payrolls", base_url)))
            .await?;
        let body: PayrollListResponse = Self::parse_json(response).await?;
        Ok(body.into_records())
    }

    pub async fn create_payroll(&self, payload: &CreatePayroll) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/payrolls", base_url))
                    .json(payload),
            )
            .await?;
        Self::expect_success(response).await
    }
}
