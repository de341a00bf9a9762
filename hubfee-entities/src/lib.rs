#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # hubfee-entities
//!
//! Reusable, agnostic domain entities for calculating delivery fees.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod district;
pub mod estimate;
pub mod fee;
pub mod geo;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
