//! Report module - rendering and exporting run results

pub mod pricing;
pub mod schedule;
pub mod woe_export;

pub use pricing::*;
pub use schedule::*;
pub use woe_export::*;
