//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`models`, `follow_ups`, `widget`, etc.) so
//! individual components can depend on small focused models. Controllers hold
//! the injected API, cache, and notifier; plain state structs stay synchronous.

pub mod chat_preview;
pub mod follow_up_controller;
pub mod follow_ups;
pub mod model_controller;
pub mod model_form;
pub mod models;
pub mod toast;
pub mod ui;
pub mod widget;
