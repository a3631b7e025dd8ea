//! Step definitions for board message scenarios.

mod given;
mod then;
mod when;
pub mod world;
