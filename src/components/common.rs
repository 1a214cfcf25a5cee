use dioxus::prelude::*;

use crate::components::{AppState, ToastLevel};

#[component]
pub fn LoadingState(label: String) -> Element {
    rsx! {
        div { class: "empty-state py-12 animate-fade-in",
            div { class: "spinner mb-4" }
            p { class: "empty-state-text", "{label}" }
        }
    }
}

#[component]
pub fn EmptyState(icon: String, title: String, hint: String) -> Element {
    rsx! {
        div { class: "empty-state py-12",
            div { class: "empty-state-icon", "{icon}" }
            p { class: "empty-state-title", "{title}" }
            p { class: "empty-state-text", "{hint}" }
        }
    }
}

#[component]
pub fn SearchInput(value: Signal<String>, placeholder: String) -> Element {
    rsx! {
        input {
            class: "input search-input",
            "type": "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |e| value.set(e.value()),
        }
    }
}

/// Circular percentage indicator for the quiz result view.
#[component]
pub fn ScoreRing(percentage: u32, passed: bool) -> Element {
    let sweep = percentage.min(100) * 36 / 10;
    let color = if passed {
        "var(--success)"
    } else {
        "var(--warning)"
    };

    rsx! {
        div {
            class: "score-ring",
            style: "background: conic-gradient({color} {sweep}deg, var(--bg-secondary) {sweep}deg);",
            div { class: "score-ring-inner",
                span { class: "score-ring-value", "{percentage}%" }
                span { class: "score-ring-label", "Your Score" }
            }
        }
    }
}

/// Fixed stack of transient notifications. The oldest toast drains every
/// few seconds; each one can also be dismissed by hand.
#[component]
pub fn ToastHost() -> Element {
    let app_state = use_context::<AppState>();

    use_future(move || async move {
        loop {
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(4)).await;
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;

            let mut toasts = app_state.toasts;
            if !toasts.read().is_empty() {
                toasts.write().remove(0);
            }
        }
    });

    let toasts = app_state.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                {
                    let level_class = match toast.level {
                        ToastLevel::Info => "toast toast-info",
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;

                    rsx! {
                        div { key: "{toast.id}", class: "{level_class} animate-fade-in",
                            span { class: "flex-1", "{toast.message}" }
                            button {
                                class: "toast-close",
                                onclick: move |_| app_state.dismiss_toast(id),
                                "✕"
                            }
                        }
                    }
                }
            }
        }
    }
}
