//! Networking modules for the suggestion endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single REST call the page makes and `types` defines
//! its wire schema and failure taxonomy.

pub mod api;
pub mod types;
