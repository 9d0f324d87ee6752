//! Data types for the grid model.

mod cell;
mod range;
mod sheet;
mod style;

pub use cell::*;
pub use range::*;
pub use sheet::*;
pub use style::*;
