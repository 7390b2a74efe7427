use crate::api::{ApiClient, ApiError, CreatePayroll, Identity};
use crate::pages::payroll::{
    repository::PayrollRepository,
    utils::{identity_label, MessageState, PayrollDraft, PayrollFormState},
};
use crate::state::{
    payroll::{use_payroll_list, LoadTicket, PayrollListState},
    session::use_session,
};
use crate::utils::time::current_period;
use leptos::*;

pub const SUBMIT_SUCCESS_TEXT: &str = "Payroll record added.";

/// Fetches the full list for `ticket`. The result is applied only if no newer fetch was
/// issued meanwhile; failures are logged and the list keeps what it had.
async fn fetch_payrolls(
    repo: &PayrollRepository,
    list: RwSignal<PayrollListState>,
    ticket: LoadTicket,
) {
    let result = repo.list().await;
    if let Err(err) = &result {
        log::error!("Error fetching payrolls: {}", err);
    }
    list.update(|state| {
        if !state.finish_load(ticket, result) {
            log::debug!("Discarding stale payroll list response");
        }
    });
}

pub async fn load_payrolls(repo: &PayrollRepository, list: RwSignal<PayrollListState>) {
    if let Some(ticket) = list.try_update(PayrollListState::begin_load) {
        fetch_payrolls(repo, list, ticket).await;
    }
}

/// Creates the record, then clears the form and reloads the list. On failure the form is left as typed.
pub async fn submit_payroll(
    repo: &PayrollRepository,
    payload: CreatePayroll,
    form_state: PayrollFormState,
    list: RwSignal<PayrollListState>,
    message: RwSignal<MessageState>,
) -> Result<(), ApiError> {
    match repo.create(&payload).await {
        Ok(()) => {
            form_state.reset();
            message.update(|msg| msg.set_success(SUBMIT_SUCCESS_TEXT));
            load_payrolls(repo, list).await;
            Ok(())
        }
        Err(err) => {
            log::error!("Error creating payroll: {}", err);
            message.update(|msg| msg.set_error(err.clone()));
            Err(err)
        }
    }
}

#[derive(Clone, Copy)]
pub struct PayrollViewModel {
    pub identity: StoredValue<Option<Identity>>,
    pub form_state: PayrollFormState,
    pub list: RwSignal<PayrollListState>,
    pub message: RwSignal<MessageState>,
    pub create_action: Action<PayrollDraft, Result<(), ApiError>>,
    repository: StoredValue<PayrollRepository>,
}

impl PayrollViewModel {
    pub fn new() -> Self {
        Self::with_period(current_period())
    }

    /// Builds the view model with the form seeded to `(month, year)`.
    pub fn with_period(period: (u32, i32)) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(PayrollRepository::new(api));

        let identity = use_session().identity();
        if identity.is_none() {
            log::debug!("No signed-in user found; nurse id stays empty");
        }
        let form_state = PayrollFormState::default();
        form_state.seed(identity.as_ref(), period);

        let list = use_payroll_list();
        let message = create_rw_signal(MessageState::default());

        let create_action = create_action(move |draft: &PayrollDraft| {
            let repo = repository.get_value();
            let payload = draft.to_payload();
            async move { submit_payroll(&repo, payload, form_state, list, message).await }
        });

        Self {
            identity: store_value(identity),
            form_state,
            list,
            message,
            create_action,
            repository,
        }
    }

    pub fn identity_label(&self) -> String {
        self.identity.with_value(|identity| identity_label(identity.as_ref()))
    }

    /// Marks the list as loading right away and fetches in the background.
    pub fn reload(&self) {
        let list = self.list;
        let Some(ticket) = list.try_update(PayrollListState::begin_load) else {
            return;
        };
        let repo = self.repository.get_value();
        spawn_local(async move {
            fetch_payrolls(&repo, list, ticket).await;
        });
    }

    pub fn on_submit(&self) -> impl Fn(ev::SubmitEvent) + Clone + 'static {
        let form_state = self.form_state;
        let message = self.message;
        let create_action = self.create_action;
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            message.update(|msg| msg.clear());
            create_action.dispatch(form_state.draft());
        }
    }

    pub fn records(&self) -> Signal<Vec<crate::api::PayrollRecord>> {
        let list = self.list;
        Signal::derive(move || list.with(|state| state.records.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let list = self.list;
        Signal::derive(move || list.with(|state| state.loading))
    }

    pub fn list_error(&self) -> Signal<Option<ApiError>> {
        let list = self.list;
        Signal::derive(move || list.with(|state| state.last_error.clone()))
    }
}

impl Default for PayrollViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_payroll_view_model() -> PayrollViewModel {
    match use_context::<PayrollViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PayrollViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
