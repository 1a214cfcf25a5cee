mod api;
mod components;
mod quiz;
mod session;

use std::rc::Rc;

use dioxus::prelude::*;
use tokio::sync::mpsc;

use api::moderation::{Moderation, StubModeration};
use api::{ApiClient, ApiCmd, ApiConfig, ApiEvent};
use components::admins_page::AdminsComponent;
use components::contacts_page::ContactsComponent;
use components::courses_page::CoursesComponent;
use components::dashboard_page::DashboardComponent;
use components::exam_page::ExamComponent;
use components::nav_bar::NavComponent;
use components::paid_users_page::PaidUsersComponent;
use components::policy_page::PolicyComponent;
use components::users_page::UsersComponent;
use components::{AppState, ToastLevel};
use session::SessionCache;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    DashboardComponent {},
    #[route("/admins")]
    AdminsComponent {},
    #[route("/users")]
    UsersComponent {},
    #[route("/courses")]
    CoursesComponent {},
    #[route("/paid")]
    PaidUsersComponent {},
    #[route("/contacts")]
    ContactsComponent {},
    #[route("/policies")]
    PolicyComponent {},
    #[route("/exam")]
    ExamComponent {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    let session = SessionCache::new();
    use_context_provider(|| session);

    use_context_provider(|| Rc::new(StubModeration) as Rc<dyn Moderation>);

    // Command channel into the API client, event pump back into signals.
    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ApiCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<ApiEvent>();

        let mut client = ApiClient::new(ApiConfig::from_env(), cmd_rx, event_tx);
        spawn(async move {
            client.run().await;
        });

        let pump_tx = cmd_tx.clone();
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                apply_event(event, app_state, session, &pump_tx);
            }
        });

        cmd_tx
    });
    use_context_provider(move || cmd_tx.clone());

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

/// Translate API events into signal writes and toasts. Late events after a
/// navigation just overwrite the current snapshot.
fn apply_event(
    event: ApiEvent,
    state: AppState,
    session: SessionCache,
    cmd_tx: &mpsc::UnboundedSender<ApiCmd>,
) {
    match event {
        ApiEvent::DashboardFetched(stats) => {
            let mut dashboard = state.dashboard;
            dashboard.set(Some(stats));
        }
        ApiEvent::AdminsFetched(admins) => {
            let mut signal = state.admins;
            signal.set(Some(admins));
        }
        ApiEvent::AdminSaved { email } => {
            state.push_toast(
                ToastLevel::Success,
                format!("{email} can now manage the platform"),
            );
            let _ = cmd_tx.send(ApiCmd::FetchAdmins);
        }
        ApiEvent::AdminDropped { email } => {
            state.push_toast(ToastLevel::Success, format!("{email} is no longer an admin"));
            let _ = cmd_tx.send(ApiCmd::FetchAdmins);
        }
        ApiEvent::UsersFetched(users) => {
            let mut signal = state.users;
            signal.set(Some(users));
        }
        ApiEvent::CoursesFetched(courses) => {
            let mut signal = state.courses;
            signal.set(Some(courses));
        }
        ApiEvent::PaidUsersFetched(users) => {
            let mut signal = state.paid_users;
            signal.set(Some(users));
        }
        ApiEvent::ContactsFetched(messages) => {
            let mut signal = state.contacts;
            signal.set(Some(messages));
        }
        ApiEvent::PoliciesFetched(docs) => {
            let mut policies = session.policies;
            policies.set(Some(docs));
        }
        ApiEvent::ShareLinkFetched { url, .. } => {
            state.push_toast(ToastLevel::Info, format!("Share link ready: {url}"));
        }
        ApiEvent::ResultRecorded { course_id } => {
            tracing::info!(%course_id, "quiz result recorded");
        }
        ApiEvent::MailSent { email } => {
            tracing::info!(%email, "result mail sent");
        }
        ApiEvent::RequestFailed { context, message } => {
            state.push_toast(ToastLevel::Error, format!("{context}: {message}"));
        }
    }
}
