//! # quotesvc-domain
//!
//! Pure domain model for the quote service.
//!
//! ## Responsibilities
//! - Foundational types: the [`id::QuoteId`] identifier and error conventions
//! - Define the [`quote::Quote`] entity and its invariants
//!   (non-empty author, non-empty quotation body)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod quote;
