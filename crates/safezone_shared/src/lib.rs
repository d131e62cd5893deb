//! # SAFEZONE Shared
//!
//! Screen-space geometry used by both the mapper and the host that feeds it.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on a windowing or platform crate. Hosts
//! translate their own rectangle types into [`Rect`] at the boundary.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::{Rect, Resolution, Vec2};
