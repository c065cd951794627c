/*
    Top-level
*/

mod clamped;
mod math;
mod number;
mod numeric;
mod ops;

pub mod bits;
pub mod convert;
pub mod error;
pub mod fixed;
pub mod geometry;
pub mod random;

pub use clamped::*;
pub use number::*;
pub use numeric::*;
pub use ops::*;

pub use fixed::{Fix128, Fix64, Fixed, UFix128, UFix64};
