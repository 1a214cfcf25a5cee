use dioxus::prelude::*;

use crate::api::models::Admin;
use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState, SearchInput};
use crate::components::AppState;

#[component]
pub fn AdminsComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let search = use_signal(String::new);
    let mut new_email = use_signal(String::new);

    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let _ = cmd_tx_mount.send(ApiCmd::FetchAdmins);
    });

    let cmd_tx_add = cmd_tx.clone();
    let on_add = move |_| {
        let email = new_email().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return;
        }
        let _ = cmd_tx_add.send(ApiCmd::AddAdmin { email });
        new_email.set(String::new());
    };

    let admins = app_state.admins.read().clone();

    let body = match admins {
        None => rsx! {
            LoadingState { label: "Loading admins...".to_string() }
        },
        Some(admins) => {
            let needle = search().to_lowercase();
            let visible: Vec<Admin> = admins
                .iter()
                .filter(|a| {
                    needle.is_empty()
                        || a.name.to_lowercase().contains(&needle)
                        || a.email.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "🛡️".to_string(),
                        title: "No admins found".to_string(),
                        hint: "Try a different search term.".to_string(),
                    }
                }
            } else {
                rsx! {
                    // Desktop table
                    div { class: "panel desktop-only",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for admin in visible.iter() {
                                    AdminRow { key: "{admin.id}", admin: admin.clone() }
                                }
                            }
                        }
                    }

                    // Mobile cards
                    div { class: "card-list mobile-only",
                        for admin in visible.iter() {
                            AdminCard { key: "{admin.id}", admin: admin.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-6",
                h1 { class: "page-title", "Admins" }
                p { class: "text-secondary", "Accounts with access to this console." }
            }

            div { class: "panel mb-6",
                div { class: "flex gap-2 items-center",
                    input {
                        class: "input flex-1",
                        "type": "email",
                        placeholder: "new.admin@example.com",
                        value: "{new_email}",
                        oninput: move |e| new_email.set(e.value()),
                    }
                    button { class: "btn btn-primary", onclick: on_add, "+ Add Admin" }
                }
            }

            div { class: "mb-4",
                SearchInput { value: search, placeholder: "Search by name or email...".to_string() }
            }

            {body}
        }
    }
}

#[component]
fn AdminRow(admin: Admin) -> Element {
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();
    let email = admin.email.clone();

    rsx! {
        tr {
            td { class: "font-semibold", "{admin.name}" }
            td { class: "text-secondary", "{admin.email}" }
            td {
                if admin.role.is_main() {
                    span { class: "badge badge-main", "Main admin" }
                } else {
                    span { class: "badge", "Admin" }
                }
            }
            td { class: "text-right",
                if !admin.role.is_main() {
                    button {
                        class: "btn btn-danger btn-sm",
                        onclick: move |_| {
                            let _ = cmd_tx.send(ApiCmd::RemoveAdmin { email: email.clone() });
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}

#[component]
fn AdminCard(admin: Admin) -> Element {
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();
    let email = admin.email.clone();

    rsx! {
        div { class: "card",
            div { class: "flex justify-between items-center",
                div {
                    p { class: "font-semibold", "{admin.name}" }
                    p { class: "text-secondary text-sm", "{admin.email}" }
                }
                if admin.role.is_main() {
                    span { class: "badge badge-main", "Main" }
                } else {
                    button {
                        class: "btn btn-danger btn-sm",
                        onclick: move |_| {
                            let _ = cmd_tx.send(ApiCmd::RemoveAdmin { email: email.clone() });
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}
