use dioxus::prelude::*;

use crate::api::models::{PlanKind, User};
use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState, SearchInput};
use crate::components::AppState;

#[component]
pub fn UsersComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let search = use_signal(String::new);
    let mut plan_filter = use_signal(|| None::<PlanKind>);

    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let _ = cmd_tx_mount.send(ApiCmd::FetchUsers);
    });

    let users = app_state.users.read().clone();

    let body = match users {
        None => rsx! {
            LoadingState { label: "Loading users...".to_string() }
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
                .filter(|u| plan_filter().map_or(true, |p| u.plan == p))
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "👥".to_string(),
                        title: "No users found".to_string(),
                        hint: "Try a different search or plan filter.".to_string(),
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
                h1 { class: "page-title", "Users" }
                p { class: "text-secondary", "Everyone registered on the platform." }
            }

            div { class: "flex gap-2 mb-4 flex-wrap items-center",
                SearchInput { value: search, placeholder: "Search by name or email...".to_string() }

                button {
                    class: if plan_filter().is_none() { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                    onclick: move |_| plan_filter.set(None),
                    "All plans"
                }
                for plan in PlanKind::ALL {
                    button {
                        class: if plan_filter() == Some(plan) { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                        onclick: move |_| plan_filter.set(Some(plan)),
                        "{plan.label()}"
                    }
                }
            }

            {body}
        }
    }
}

#[component]
pub fn PlanBadge(plan: PlanKind) -> Element {
    let class = match plan {
        PlanKind::Free => "badge",
        PlanKind::Monthly => "badge badge-primary",
        PlanKind::Yearly => "badge badge-accent",
        PlanKind::Forever => "badge badge-main",
    };

    rsx! {
        span { class: "{class}", "{plan.label()}" }
    }
}
