//! # SAFEZONE UI
//!
//! Keeps UI panels inside the device safe area: the part of the screen not
//! covered by notches, rounded corners, or system bars.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     SAFE-AREA PIPELINE                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ScreenProvider → SafeAreaMapper → LayoutTree → Host events  │
//! │       ↓                 ↓              ↓            ↓        │
//! │  safe rect +      skip if same    anchors →    dimensions    │
//! │  resolution       else normalize  pixel rects  changed ──┐   │
//! │                         ↑                                │   │
//! │                         └────────────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Host contract
//!
//! The host calls [`SafeAreaMapper::on_attach`] once when the owning node
//! activates, and [`SafeAreaMapper::on_target_dimensions_changed`] for every
//! dimensions-changed notification on the target. Everything runs on the
//! host's layout thread.
//!
//! ```rust,ignore
//! use safezone_ui::{LayoutTree, SafeAreaConfig, SafeAreaMapper, SimulatedScreen};
//!
//! let mut mapper = SafeAreaMapper::new(screen, SafeAreaConfig::default(), panel, Some(panel));
//! mapper.on_attach(&mut tree)?;
//! for node in tree.take_dimension_changes() {
//!     if mapper.watches(node) {
//!         mapper.on_target_dimensions_changed(&mut tree)?;
//!     }
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod anchors;
pub mod config;
pub mod error;
pub mod platform;
pub mod safe_area;
pub mod tree;

pub use anchors::{anchors_for, Anchors};
pub use config::{DeviceProfile, SafeAreaConfig};
pub use error::{SafeAreaError, SafeAreaResult};
pub use platform::{Environment, Platform, ScreenProvider, SimulatedScreen};
pub use safe_area::{MapperState, MapperStats, MappingOutcome, SafeAreaMapper};
pub use tree::{LayoutTree, NodeId, RectTransform};

pub use safezone_shared::{Rect, Resolution, Vec2};
