//! Common utilities for the Bramble engine.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Warning System** - de-duplicated warnings and parse error reporting
//!   routed through the [`log`] facade

pub mod warning;
