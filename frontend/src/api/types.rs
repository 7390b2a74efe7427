use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The signed-in user as persisted by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NurseName {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// `nurseId` on a record: populated by the service when it joins the nurse, a bare id otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NurseRef {
    Expanded(NurseName),
    Id(String),
}

impl NurseRef {
    pub fn display_name(&self) -> Option<String> {
        match self {
            NurseRef::Expanded(name) => Some(format!("{} {}", name.first_name, name.last_name)),
            NurseRef::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub nurse_id: Option<NurseRef>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub overtime: Option<f64>,
    #[serde(default)]
    pub deductions: Option<f64>,
}

/// `GET /payrolls` body; the service may wrap the list in `data` or return it bare.
/// Entries are decoded one by one so a malformed record does not hide the rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PayrollListResponse {
    Wrapped { data: Vec<Value> },
    Bare(Vec<Value>),
}

impl PayrollListResponse {
    pub fn into_records(self) -> Vec<PayrollRecord> {
        let entries = match self {
            PayrollListResponse::Wrapped { data } => data,
            PayrollListResponse::Bare(entries) => entries,
        };
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<PayrollRecord>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping malformed payroll record: {}", err);
                    None
                }
            })
            .collect()
    }
}

/// `POST /payrolls` body. Numbers that did not parse are sent as `null`,
/// a month without a calendar name is left out entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayroll {
    pub nurse_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    pub year: Option<i32>,
    pub salary: Option<f64>,
    pub overtime: Option<f64>,
    pub deductions: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    #[serde(alias = "message")]
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn from_status(status: u16) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_accepts_mongo_style_id() {
        let identity: Identity =
            serde_json::from_value(json!({ "_id": "u1", "firstName": "Jane", "lastName": "Doe" }))
                .unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.display_name(), "Jane Doe");
    }

    #[test]
    fn payroll_record_reads_expanded_and_bare_nurse() {
        let expanded: PayrollRecord = serde_json::from_value(json!({
            "_id": "p1",
            "nurseId": { "_id": "u1", "firstName": "Jane", "lastName": "Doe" },
            "month": "March",
            "year": 2025,
            "salary": 5000
        }))
        .unwrap();
        assert_eq!(expanded.id, "p1");
        assert_eq!(
            expanded.nurse_id.and_then(|n| n.display_name()).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(expanded.salary, Some(5000.0));
        assert!(expanded.overtime.is_none());

        let bare: PayrollRecord = serde_json::from_value(json!({
            "id": "p2",
            "nurseId": "u1",
            "month": "April",
            "year": 2025,
            "salary": 4200.5,
            "overtime": 120,
            "deductions": null
        }))
        .unwrap();
        assert_eq!(bare.nurse_id, Some(NurseRef::Id("u1".into())));
        assert_eq!(bare.overtime, Some(120.0));
        assert!(bare.deductions.is_none());
    }

    #[test]
    fn list_response_accepts_wrapped_and_bare_arrays() {
        let wrapped: PayrollListResponse =
            serde_json::from_value(json!({ "data": [{ "id": "p1" }] })).unwrap();
        assert_eq!(wrapped.into_records().len(), 1);

        let bare: PayrollListResponse =
            serde_json::from_value(json!([{ "id": "p1" }, { "id": "p2" }])).unwrap();
        assert_eq!(bare.into_records().len(), 2);
    }

    #[test]
    fn list_response_skips_malformed_entries_and_keeps_records_without_id() {
        let response: PayrollListResponse = serde_json::from_value(json!({
            "data": [
                { "_id": "p1", "month": "March", "salary": 5000 },
                { "_id": "p2", "salary": "lots" },
                { "month": "April", "year": 2025 },
                "not a record"
            ]
        }))
        .unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "p1");
        assert!(records[1].id.is_empty());
        assert_eq!(records[1].month.as_deref(), Some("April"));
    }

    #[test]
    fn create_payroll_omits_missing_month_and_nulls_bad_numbers() {
        let payload = CreatePayroll {
            nurse_id: "u1".into(),
            month: None,
            year: Some(2025),
            salary: Some(5000.0),
            overtime: None,
            deductions: Some(12.5),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("month").is_none());
        assert_eq!(value["nurseId"], json!("u1"));
        assert_eq!(value["year"], json!(2025));
        assert!(value["overtime"].is_null());
        assert_eq!(value["deductions"], json!(12.5));
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");
        assert_eq!(unknown.error, "something failed");
        assert!(unknown.details.is_none());
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");

        let status = ApiError::from_status(502);
        assert_eq!(status.code, "HTTP_502");
        assert_eq!(status.to_string(), "Request failed with status 502");
    }

    #[test]
    fn api_error_reads_message_bodies() {
        let error: ApiError =
            serde_json::from_value(json!({ "message": "Nurse not found" })).unwrap();
        assert_eq!(error.error, "Nurse not found");
        assert!(error.code.is_empty());
    }
}
