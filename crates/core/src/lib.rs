//! Domain layer for the Titanic passenger API.
//!
//! Holds everything that does not need a database or an HTTP stack:
//! the error taxonomy, the validated filter model, pagination
//! arithmetic, and the survival statistics reductions. Zero internal
//! deps so both the repository layer and any future CLI tooling can
//! use it.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod stats;
