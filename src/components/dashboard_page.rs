use dioxus::prelude::*;

use crate::api::ApiCmd;
use crate::components::common::LoadingState;
use crate::components::AppState;
use crate::session::SessionCache;

#[component]
pub fn DashboardComponent() -> Element {
    let app_state = use_context::<AppState>();
    let session = use_context::<SessionCache>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    // Fetch on mount
    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let user_id = session.user_id.read().clone().unwrap_or_default();
        let _ = cmd_tx_mount.send(ApiCmd::FetchDashboard { user_id });
    });

    // Periodic refresh so the counts stay current while the tab is open
    let cmd_tx_refresh = cmd_tx.clone();
    use_future(move || {
        let cmd_tx = cmd_tx_refresh.clone();
        async move {
            #[cfg(not(target_arch = "wasm32"))]
            {
                let mut interval = tokio::time::interval(std::time::Duration::from_secs(30));
                interval.tick().await;
                loop {
                    interval.tick().await;
                    let user_id = session.user_id.read().clone().unwrap_or_default();
                    let _ = cmd_tx.send(ApiCmd::FetchDashboard { user_id });
                }
            }
            #[cfg(target_arch = "wasm32")]
            {
                use futures::StreamExt;
                let mut interval = gloo_timers::future::IntervalStream::new(30_000);
                while interval.next().await.is_some() {
                    let user_id = session.user_id.read().clone().unwrap_or_default();
                    let _ = cmd_tx.send(ApiCmd::FetchDashboard { user_id });
                }
            }
        }
    });

    let stats = *app_state.dashboard.read();

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-8",
                h1 { class: "page-title", "Dashboard" }
                p { class: "text-secondary", "A live overview of the platform." }
            }

            if let Some(stats) = stats {
                div { class: "stats-grid",
                    StatCard { label: "Registered users".to_string(), value: stats.users, icon: "👥".to_string() }
                    StatCard { label: "Courses".to_string(), value: stats.courses, icon: "📚".to_string() }
                    StatCard { label: "Paid subscribers".to_string(), value: stats.paid, icon: "💳".to_string() }
                    StatCard { label: "Contact messages".to_string(), value: stats.messages, icon: "✉️".to_string() }
                }
            } else {
                LoadingState { label: "Loading dashboard...".to_string() }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u64, icon: String) -> Element {
    rsx! {
        div { class: "card flex items-center justify-between p-6",
            div {
                p { class: "label mb-1", "{label}" }
                p { class: "stat-value", "{value}" }
            }
            div { class: "stat-icon", "{icon}" }
        }
    }
}
