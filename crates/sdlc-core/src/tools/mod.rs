//! Tool adapters for SDLC workflows.
//!
//! The workflows never call `std::fs` directly; they go through the
//! [`fs::FsAdapter`] trait so effectful orchestration stays separate
//! from the pure sequencing logic and can be exercised against any
//! directory in tests.

pub mod fs;
pub mod fs_impl;
