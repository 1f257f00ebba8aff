//! Static registry of districts and line markers.
//!
//! Both tables are closed enums fixed at compile time; iteration order
//! follows declaration order.

mod marker;
mod region;

pub use marker::LinePrefix;
pub use region::Region;
