pub mod admins_page;
pub mod common;
pub mod contacts_page;
pub mod courses_page;
pub mod dashboard_page;
pub mod exam_page;
pub mod nav_bar;
pub mod paid_users_page;
pub mod policy_page;
pub mod users_page;

use dioxus::prelude::*;

use crate::api::models::{Admin, ContactMessage, Course, DashboardStats, User};
use crate::quiz::QuizSource;

/// Transient notification shown by the toast host.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Latest fetched snapshots plus cross-page UI state. `None` collections
/// are still loading; `Some(vec![])` renders as an explicit empty state.
#[derive(Clone, Copy)]
pub struct AppState {
    pub dashboard: Signal<Option<DashboardStats>>,
    pub admins: Signal<Option<Vec<Admin>>>,
    pub users: Signal<Option<Vec<User>>>,
    pub courses: Signal<Option<Vec<Course>>>,
    pub paid_users: Signal<Option<Vec<User>>>,
    pub contacts: Signal<Option<Vec<ContactMessage>>>,
    /// Quiz handoff set by the navigating page before pushing `/exam`.
    pub active_quiz: Signal<Option<QuizSource>>,
    pub toasts: Signal<Vec<Toast>>,
    toast_counter: Signal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: use_signal(|| None),
            admins: use_signal(|| None),
            users: use_signal(|| None),
            courses: use_signal(|| None),
            paid_users: use_signal(|| None),
            contacts: use_signal(|| None),
            active_quiz: use_signal(|| None),
            toasts: use_signal(Vec::new),
            toast_counter: use_signal(|| 0),
        }
    }

    pub fn push_toast(&self, level: ToastLevel, message: impl Into<String>) {
        let mut counter = self.toast_counter;
        let id = counter() + 1;
        counter.set(id);

        let mut toasts = self.toasts;
        toasts.write().push(Toast {
            id,
            level,
            message: message.into(),
        });
    }

    pub fn dismiss_toast(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}
