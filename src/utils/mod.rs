//! Numeric helpers shared by the great-circle and rhumb-line formulas

pub mod angle;
pub(crate) mod vector;
