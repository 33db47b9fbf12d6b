//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the message form and notification surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod message_form;
pub mod toaster;
