//! Layout module for tracking UI component regions
//!
//! Rendering records where each clickable component was drawn in
//! [`LayoutRegions`]; [`region_at`] maps a mouse position back to a component.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
