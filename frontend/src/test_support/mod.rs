#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Identity, NurseName, NurseRef, PayrollRecord};
    use crate::state::session::{SessionContext, StaticSession};
    use leptos::*;

    pub fn nurse_jane() -> Identity {
        Identity {
            id: "u1".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        }
    }

    pub fn provide_session(identity: Option<Identity>) {
        provide_context(SessionContext::new(StaticSession::new(identity)));
    }

    pub fn payroll_record(id: &str, month: &str) -> PayrollRecord {
        PayrollRecord {
            id: id.into(),
            nurse_id: Some(NurseRef::Expanded(NurseName {
                id: Some("u1".into()),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
            })),
            month: Some(month.into()),
            year: Some(2025),
            salary: Some(5000.0),
            overtime: None,
            deductions: None,
        }
    }
}
