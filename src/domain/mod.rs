//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `interview` - Clarification dialogue, transcript projection, and the
//!   interview script artifact

pub mod foundation;
pub mod interview;
