use dioxus::prelude::*;

use crate::api::models::User;
use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState, SearchInput};
use crate::components::users_page::PlanBadge;
use crate::components::AppState;

#[component]
pub fn PaidUsersComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let search = use_signal(String::new);

    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let _ = cmd_tx_mount.send(ApiCmd::FetchPaidUsers);
    });

    let paid_users = app_state.paid_users.read().clone();

    let body = match paid_users {
        None => rsx! {
            LoadingState { label: "Loading paid subscribers...".to_string() }
        },
        Some(users) => {
            let needle = search().to_lowercase();
            let visible: Vec<User> = users
                .iter()
                .filter(|u| {
                    needle.is_empty()
                        || u.name.to_lowercase().contains(&needle)
                        || u.email.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "💳".to_string(),
                        title: "No paid subscribers found".to_string(),
                        hint: "Nobody matches this search.".to_string(),
                    }
                }
            } else {
                rsx! {
                    div { class: "panel desktop-only",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Plan" }
                                }
                            }
                            tbody {
                                for user in visible.iter() {
                                    tr { key: "{user.id}",
                                        td { class: "font-semibold", "{user.name}" }
                                        td { class: "text-secondary", "{user.email}" }
                                        td { PlanBadge { plan: user.plan } }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card-list mobile-only",
                        for user in visible.iter() {
                            div { key: "{user.id}", class: "card",
                                div { class: "flex justify-between items-center",
                                    div {
                                        p { class: "font-semibold", "{user.name}" }
                                        p { class: "text-secondary text-sm", "{user.email}" }
                                    }
                                    PlanBadge { plan: user.plan }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-6",
                h1 { class: "page-title", "Paid Subscribers" }
                p { class: "text-secondary", "Users on a paying plan." }
            }

            div { class: "mb-4",
                SearchInput { value: search, placeholder: "Search by name or email...".to_string() }
            }

            {body}
        }
    }
}
