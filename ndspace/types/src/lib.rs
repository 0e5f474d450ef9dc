//! Index and range vectors for kernel launches
//!
//! This crate provides the fixed-size vector used to describe 1, 2 and 3 dimensional iteration
//! spaces, the conversions between those dimensions and the canonical 3 dimensional form, and the
//! integer helpers used to size grids and allocations.

mod compatible;
mod convert;
mod downcast;
mod error;
mod math;
mod static_array;

pub use compatible::*;
pub use convert::*;
pub use downcast::*;
pub use error::*;
pub use math::*;
pub use static_array::*;
