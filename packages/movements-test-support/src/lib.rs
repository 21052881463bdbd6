//! Movement test support utilities
//!
//! Shared by the `movements` integration tests: unified logging
//! initialization, proptest configuration and canned movement files.

pub mod fixtures;
pub mod logging;
pub mod proptest_prelude;
