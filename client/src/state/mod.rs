//! Page-scoped state held in Leptos signals.
//!
//! DESIGN
//! ======
//! Each struct is plain data with its transitions as methods, wrapped in an
//! `RwSignal` by the component that owns it. Keeping the rules here lets them
//! be tested without a reactive runtime.

pub mod message_form;
pub mod suggestions;
pub mod toast;
