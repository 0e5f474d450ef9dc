//! Launch geometry for compute kernels
//!
//! This crate turns index spaces described with [`ndspace_types`] into the numbers a kernel
//! launch needs: validated nd-ranges, work group counts, 3 dimensional dispatch sizes and
//! allocation sizes. It does not talk to a device.

mod allocation;
mod error;
mod limits;
mod nd_range;

pub use allocation::*;
pub use error::*;
pub use limits::*;
pub use nd_range::*;

pub use ndspace_types::{Id, Range};
