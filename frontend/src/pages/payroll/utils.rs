use crate::api::{ApiError, CreatePayroll, Identity};
use leptos::*;

pub const IDENTITY_PLACEHOLDER: &str = "Loading...";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English calendar name for a 1-based month. Anything outside 1..=12 has no name.
pub fn month_name(month: i64) -> Option<&'static str> {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
}

pub fn identity_label(identity: Option<&Identity>) -> String {
    identity
        .map(Identity::display_name)
        .unwrap_or_else(|| IDENTITY_PLACEHOLDER.to_string())
}

// Number inputs hand over either "" or a decimal literal; leading digits are kept
// the way a lenient integer parse would ("3.0" is month 3).
fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

fn parse_float(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Amount worth rendering: zero and missing amounts are both hidden.
pub fn visible_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

pub fn format_amount(value: f64) -> String {
    format!("${}", value)
}

/// Snapshot of the form inputs at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayrollDraft {
    pub nurse_id: String,
    pub month: String,
    pub year: String,
    pub salary: String,
    pub overtime: String,
    pub deductions: String,
}

impl PayrollDraft {
    pub fn to_payload(&self) -> CreatePayroll {
        CreatePayroll {
            nurse_id: self.nurse_id.clone(),
            month: parse_int(&self.month)
                .and_then(month_name)
                .map(str::to_string),
            year: parse_int(&self.year).and_then(|y| i32::try_from(y).ok()),
            salary: parse_float(&self.salary),
            overtime: parse_float(&self.overtime),
            deductions: parse_float(&self.deductions),
        }
    }
}

#[derive(Clone, Copy)]
pub struct PayrollFormState {
    nurse_id: RwSignal<String>,
    month: RwSignal<String>,
    year: RwSignal<String>,
    salary: RwSignal<String>,
    overtime: RwSignal<String>,
    deductions: RwSignal<String>,
}

impl Default for PayrollFormState {
    fn default() -> Self {
        Self {
            nurse_id: create_rw_signal(String::new()),
            month: create_rw_signal(String::new()),
            year: create_rw_signal(String::new()),
            salary: create_rw_signal(String::new()),
            overtime: create_rw_signal(String::new()),
            deductions: create_rw_signal(String::new()),
        }
    }
}

impl PayrollFormState {
    pub fn month_signal(&self) -> RwSignal<String> {
        self.month
    }

    pub fn year_signal(&self) -> RwSignal<String> {
        self.year
    }

    pub fn salary_signal(&self) -> RwSignal<String> {
        self.salary
    }

    pub fn overtime_signal(&self) -> RwSignal<String> {
        self.overtime
    }

    pub fn deductions_signal(&self) -> RwSignal<String> {
        self.deductions
    }

    pub fn seed(&self, identity: Option<&Identity>, (month, year): (u32, i32)) {
        if let Some(identity) = identity {
            self.nurse_id.set(identity.id.clone());
        }
        self.month.set(month.to_string());
        self.year.set(year.to_string());
    }

    /// Clears everything except the nurse id, which belongs to the signed-in user.
    pub fn reset(&self) {
        self.month.set(String::new());
        self.year.set(String::new());
        self.salary.set(String::new());
        self.overtime.set(String::new());
        self.deductions.set(String::new());
    }

    pub fn draft(&self) -> PayrollDraft {
        PayrollDraft {
            nurse_id: self.nurse_id.get_untracked(),
            month: self.month.get_untracked(),
            year: self.year.get_untracked(),
            salary: self.salary.get_untracked(),
            overtime: self.overtime.get_untracked(),
            deductions: self.deductions.get_untracked(),
        }
    }
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}
