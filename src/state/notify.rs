// Notification surface - short-lived messages shown over the page
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    pub created: Instant,
}

pub struct Notifications {
    toasts: VecDeque<Toast>,
    capacity: usize,
}

impl Notifications {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: ToastLevel, text: impl Into<String>) {
        self.push_at(level, text, Instant::now());
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }

    fn push_at(&mut self, level: ToastLevel, text: impl Into<String>, created: Instant) {
        let text = text.into();
        match level {
            ToastLevel::Error => tracing::warn!(%text, "notification"),
            _ => tracing::debug!(%text, "notification"),
        }
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            level,
            text,
            created,
        });
    }

    pub fn active(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn prune(&mut self, timeout: Duration) {
        self.prune_at(timeout, Instant::now());
    }

    fn prune_at(&mut self, timeout: Duration, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < timeout);
    }

    pub fn dismiss(&mut self, index: usize) {
        self.toasts.remove(index);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
