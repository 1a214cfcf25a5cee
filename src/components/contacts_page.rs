use dioxus::prelude::*;

use crate::api::models::ContactMessage;
use crate::api::ApiCmd;
use crate::components::common::{EmptyState, LoadingState, SearchInput};
use crate::components::AppState;

#[component]
pub fn ContactsComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<tokio::sync::mpsc::UnboundedSender<ApiCmd>>();

    let search = use_signal(String::new);

    let cmd_tx_mount = cmd_tx.clone();
    use_effect(move || {
        let _ = cmd_tx_mount.send(ApiCmd::FetchContacts);
    });

    let contacts = app_state.contacts.read().clone();

    let body = match contacts {
        None => rsx! {
            LoadingState { label: "Loading contact messages...".to_string() }
        },
        Some(messages) => {
            let needle = search().to_lowercase();
            let visible: Vec<ContactMessage> = messages
                .iter()
                .filter(|m| {
                    needle.is_empty()
                        || m.full_name().to_lowercase().contains(&needle)
                        || m.email.to_lowercase().contains(&needle)
                        || m.message.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            if visible.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "✉️".to_string(),
                        title: "No messages found".to_string(),
                        hint: "The inbox is clear.".to_string(),
                    }
                }
            } else {
                rsx! {
                    div { class: "card-list",
                        for msg in visible.iter() {
                            div { key: "{msg.id}", class: "card",
                                div { class: "flex justify-between items-center mb-2",
                                    div {
                                        p { class: "font-semibold", "{msg.full_name()}" }
                                        p { class: "text-secondary text-sm", "{msg.email}" }
                                    }
                                    if let Some(phone) = msg.phone.as_ref() {
                                        span { class: "badge", "📞 {phone}" }
                                    }
                                }
                                p { class: "message-body", "{msg.message}" }
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
                h1 { class: "page-title", "Contact Messages" }
                p { class: "text-secondary", "Messages sent through the contact form." }
            }

            div { class: "mb-4",
                SearchInput { value: search, placeholder: "Search by name, email or message...".to_string() }
            }

            {body}
        }
    }
}
