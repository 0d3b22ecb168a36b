//! # quotesvc-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound):
//!   - [`ports::QuoteRepository`] — persistence for quotes
//! - Define the **driving/inbound port** as a use-case struct:
//!   - [`services::quote_service::QuoteService`] — create, delete, list with
//!     filter, random pick
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `quotesvc-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
