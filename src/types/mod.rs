mod crossing;
mod point;

pub use crossing::*;
pub use point::*;
