use dioxus::prelude::*;

use crate::api::models::PolicyDoc;

/// Session-scoped values shared across pages for the lifetime of the app.
/// Typed fields instead of ambient string storage; anything cached here is
/// dropped through an explicit invalidation call, never silently.
#[derive(Clone, Copy)]
pub struct SessionCache {
    pub dark_mode: Signal<bool>,
    pub user_id: Signal<Option<String>>,
    pub policies: Signal<Option<Vec<PolicyDoc>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            dark_mode: use_signal(|| false),
            user_id: use_signal(|| None),
            policies: use_signal(|| None),
        }
    }

    pub fn toggle_dark_mode(&self) {
        let mut dark_mode = self.dark_mode;
        let next = !dark_mode();
        dark_mode.set(next);
    }

    /// Forget the cached policy documents; the next visit to the policy
    /// page refetches them.
    pub fn invalidate_policies(&self) {
        let mut policies = self.policies;
        policies.set(None);
    }
}
