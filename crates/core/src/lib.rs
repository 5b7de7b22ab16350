//! Olivo Core - Shared types library.
//!
//! This crate provides the domain types used across all Olivo components:
//! - `storefront` - Catalog filtering and product selection engine
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access, no HTTP clients. Catalog entities arrive fully materialized from
//! the external fetch layer and are read-only everywhere downstream.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - Catalog entities (categories, products, images, variants)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
