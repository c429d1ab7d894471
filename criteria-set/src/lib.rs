//! A set of independent criteria that acts as a single boolean.
//!
//! See [`CriteriaSet`].

mod criteria_set;

pub use criteria_set::{CriteriaError, CriteriaSet};
