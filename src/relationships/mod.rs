//! How objects relate to each other, ordered from loosest to tightest:
//!
//! - [`association`]: a person may use a car it does not own
//! - [`aggregation`]: a department groups employees that live elsewhere
//! - [`composition`]: a house creates, owns and drops its rooms

pub mod aggregation;
pub mod association;
pub mod composition;
