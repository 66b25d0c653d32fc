//! HTTP handlers for portfolio content, seeding, and diagnostics.

pub mod diagnostics;
pub mod portfolio;
pub use diagnostics::*;
pub use portfolio::*;
