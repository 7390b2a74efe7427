use crate::api::{ApiError, PayrollRecord};
use leptos::*;

/// Identifies one list fetch. Only the most recently issued ticket may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct PayrollListState {
    pub records: Vec<PayrollRecord>,
    pub loading: bool,
    pub last_error: Option<ApiError>,
    latest: u64,
}

impl PayrollListState {
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest = self.latest.wrapping_add(1);
        self.loading = true;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a finished fetch. Returns `false` when a newer fetch has been issued since,
    /// in which case the state is left untouched.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<PayrollRecord>, ApiError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
        true
    }
}

pub fn use_payroll_list() -> RwSignal<PayrollListState> {
    match use_context::<RwSignal<PayrollListState>>() {
        Some(list) => list,
        None => {
            let list = create_rw_signal(PayrollListState::default());
            provide_context(list);
            list
        }
    }
}
