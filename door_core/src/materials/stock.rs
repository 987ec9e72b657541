//! Standard Trim Stock
//!
//! Board sizes and casing profiles a lumber yard carries for interior
//! door trim, plus the nominal lengths they are sold in.
//!
//! ## Frame boards
//!
//! Jamb boards are ripped from 1x stock wide enough to span the wall:
//!
//! - 1x6 covers walls up to 5.25"
//! - 1x8 covers walls up to 7.25"
//!
//! ## Nominal lengths
//!
//! Frame boards and casing are stocked in different length runs, so each
//! has its own catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Inches;

/// Nominal frame board lengths (8, 10, 12 ft)
pub const FRAME_NOMINAL_LENGTHS: [Inches; 3] = [Inches(96.0), Inches(120.0), Inches(144.0)];

/// Nominal casing lengths (7, 10, 12 ft)
pub const CASING_NOMINAL_LENGTHS: [Inches; 3] = [Inches(84.0), Inches(120.0), Inches(144.0)];

/// Thickest wall a 1x6 jamb board spans
pub const ONE_BY_SIX_MAX_WALL_IN: f64 = 5.25;

/// Thickest wall any stocked jamb board spans (1x8)
pub const MAX_WALL_THICKNESS_IN: f64 = 7.25;

/// Casing width that selects the wide profile
pub const WIDE_CASING_WIDTH_IN: f64 = 3.25;

/// Smallest catalog length that is at least `required`.
///
/// Catalogs are sorted ascending, so the first match is the shortest
/// board that still yields the cut.
pub fn smallest_nominal(catalog: &[Inches], required: Inches) -> Option<Inches> {
    catalog.iter().copied().find(|nominal| *nominal >= required)
}

/// Longest length in a catalog (0 for an empty catalog)
pub fn longest_nominal(catalog: &[Inches]) -> Inches {
    catalog
        .iter()
        .copied()
        .fold(Inches(0.0), |longest, l| if l > longest { l } else { longest })
}

/// Jamb board size, chosen from wall thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameStock {
    /// 1x6 (walls up to 5.25")
    #[serde(rename = "1x6")]
    OneBySix,
    /// 1x8 (walls over 5.25" up to 7.25")
    #[serde(rename = "1x8")]
    OneByEight,
}

impl FrameStock {
    /// Pick the narrowest board that spans the wall.
    ///
    /// Only the upper bound is checked; a zero or negative wall thickness
    /// falls into the 1x6 band.
    pub fn for_wall_thickness(wall_thickness_in: f64) -> CalcResult<Self> {
        if wall_thickness_in <= ONE_BY_SIX_MAX_WALL_IN {
            Ok(FrameStock::OneBySix)
        } else if wall_thickness_in <= MAX_WALL_THICKNESS_IN {
            Ok(FrameStock::OneByEight)
        } else {
            Err(CalcError::wall_thickness_out_of_range(
                wall_thickness_in,
                MAX_WALL_THICKNESS_IN,
            ))
        }
    }

    /// Get display name (e.g., `1"x6"`)
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameStock::OneBySix => "1\"x6\"",
            FrameStock::OneByEight => "1\"x8\"",
        }
    }
}

impl std::fmt::Display for FrameStock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Casing profile width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CasingProfile {
    /// 2-1/4" colonial/ranch casing
    #[default]
    #[serde(rename = "2-1/4")]
    TwoAndQuarter,
    /// 3-1/4" wide casing
    #[serde(rename = "3-1/4")]
    ThreeAndQuarter,
}

impl CasingProfile {
    /// Only an exact 3.25" width selects the wide profile; everything else
    /// is ordered as 2-1/4".
    pub fn for_casing_width(casing_width_in: f64) -> Self {
        if casing_width_in == WIDE_CASING_WIDTH_IN {
            CasingProfile::ThreeAndQuarter
        } else {
            CasingProfile::TwoAndQuarter
        }
    }

    /// Get display name (e.g., `2-1/4" wide casing`)
    pub fn display_name(&self) -> &'static str {
        match self {
            CasingProfile::TwoAndQuarter => "2-1/4\" wide casing",
            CasingProfile::ThreeAndQuarter => "3-1/4\" wide casing",
        }
    }
}

impl std::fmt::Display for CasingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
