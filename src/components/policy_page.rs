use dioxus::prelude::*;

use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState};
use crate::session::SessionCache;

/// Static policy documents. Fetched once and kept in the session cache;
/// invalidating the cache is the only way to refetch, and the mount
/// effect reacts to the emptied cache by fetching again.
#[component]
pub fn PolicyComponent() -> Element {
    let session = use_context::<SessionCache>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let cmd_tx_fetch = cmd_tx.clone();
    use_effect(move || {
        if session.policies.read().is_none() {
            let _ = cmd_tx_fetch.send(ApiCmd::FetchPolicies);
        }
    });

    let policies = session.policies.read().clone();

    let body = match policies {
        None => rsx! {
            LoadingState { label: "Loading policies...".to_string() }
        },
        Some(docs) if docs.is_empty() => rsx! {
            EmptyState {
                icon: "📄".to_string(),
                title: "No policy documents".to_string(),
                hint: "The backend returned an empty set.".to_string(),
            }
        },
        Some(docs) => rsx! {
            div { class: "card-list",
                for (idx, doc) in docs.iter().enumerate() {
                    div { key: "{idx}", class: "panel",
                        div { class: "panel-header",
                            h2 { class: "panel-title", "{doc.title}" }
                        }
                        p { class: "policy-body", "{doc.content}" }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-6 flex justify-between items-center",
                div {
                    h1 { class: "page-title", "Policies" }
                    p { class: "text-secondary", "Platform terms and legal documents." }
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| session.invalidate_policies(),
                    "Refresh"
                }
            }

            {body}
        }
    }
}
