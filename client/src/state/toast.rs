//! Toast notifications.
//!
//! DESIGN
//! ======
//! FIFO queue with at most one visible toast. Pushing while a toast is shown
//! parks the new one until the active toast is dismissed. Ids are assigned on
//! push so a timed dismiss for an old toast cannot close a newer one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::VecDeque;

/// How long a toast stays up before the browser dismisses it.
pub const TOAST_VISIBLE_MS: u32 = 5_000;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Error,
}

/// One notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    /// Preformatted block rendered under the title.
    pub code: Option<String>,
    pub level: ToastLevel,
}

impl Toast {
    pub fn info(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self { title: title.into(), level: ToastLevel::Error, ..Self::default() }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Queue of pending toasts plus the one currently on screen.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pending: VecDeque<Toast>,
    active: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Enqueue a toast and return the id it was given.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        if self.active.is_none() {
            self.active = Some(toast);
        } else {
            self.pending.push_back(toast);
        }
        self.next_id
    }

    /// Dismiss the active toast if it has `id`, promoting the next pending one.
    /// Returns `false` when `id` is not the active toast.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.active.as_ref().is_none_or(|t| t.id != id) {
            return false;
        }
        self.active = self.pending.pop_front();
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref()
    }
}
