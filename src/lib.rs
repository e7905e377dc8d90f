//! Family tree generation library
//!
//! Re-exports modules for use by the binary and tests.

pub mod genealogy;
pub mod menu;
