#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::sphere::Sphere;
pub use crate::types::*;

mod error;
mod great_circle;
mod rhumb;
mod sphere;
mod types;
pub mod utils;
