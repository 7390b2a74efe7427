use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::PayrollPage,
    state::session::{LocalStorageSession, SessionContext},
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(SessionContext::new(LocalStorageSession));
    view! {
        <Router>
            <Routes>
                <Route path="/" view=PayrollPage/>
                <Route path="/payroll" view=PayrollPage/>
            </Routes>
        </Router>
    }
}
