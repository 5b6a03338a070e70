//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the data-access functions and the traits controllers are
//! written against; `cache` is the query cache those controllers read through
//! and invalidate after mutations.

pub mod api;
pub mod cache;
