//! # Door Installation
//!
//! Frame and casing lengths for hanging a door in a rough opening.
//! Bi-fold doors get a site-built frame sized from the door; every other
//! door type is cased straight off the rough opening.
//!
//! ## Assumptions
//!
//! - 1" shim clearance on each side and at the head (2" per axis)
//! - 1/4" clearance each side of a bi-fold door inside its frame
//! - 1/4" casing reveal each side of the head and at the foot of each leg
//! - Mitered casing corners, so each piece runs one casing width past the cut
//!
//! ## Example
//!
//! ```rust
//! use door_core::calculations::installation::InstallationSpec;
//! use door_core::units::Feet;
//!
//! let spec = InstallationSpec::new("bi-fold", 34.0, 82.0, 30.0);
//! spec.validate().unwrap();
//!
//! let frame = spec.frame_dimensions().unwrap();
//! assert_eq!(frame.top_frame_length_in, 30.5);
//! assert_eq!(frame.side_frame_length_in, 81.25);
//! assert_eq!(spec.frame_order_lengths(&frame), vec![Feet(8.0); 3]);
//! assert!(spec.fits_in_rough_opening());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    longest_nominal, smallest_nominal, CasingProfile, FrameStock, CASING_NOMINAL_LENGTHS,
    FRAME_NOMINAL_LENGTHS,
};
use crate::units::{Feet, Inches};

/// Door type tag that gets a site-built frame
pub const BI_FOLD_TAG: &str = "bi-fold";

pub const DEFAULT_WALL_THICKNESS_IN: f64 = 4.5;
pub const DEFAULT_FRAME_THICKNESS_IN: f64 = 0.75;
pub const DEFAULT_CASING_WIDTH_IN: f64 = 2.25;
pub const DEFAULT_DOOR_HEIGHT_IN: f64 = 80.0;

/// Rough opening minus this, per axis, is the largest door that can be shimmed in
pub const SHIM_CLEARANCE_IN: f64 = 2.0;

/// Bi-fold frame head: 1/4" each side of the door
const FRAME_HEAD_ALLOWANCE_IN: f64 = 0.5;
/// Bi-fold frame leg: head thickness plus floor clearance
const FRAME_LEG_ALLOWANCE_IN: f64 = 1.25;
/// Casing head: 1/4" reveal each side
const CASING_HEAD_REVEAL_IN: f64 = 0.5;
/// Casing leg: 1/4" reveal at the foot only
const CASING_LEG_REVEAL_IN: f64 = 0.25;

/// Casing legs bought per installation
pub const SIDE_CASING_PIECES: usize = 4;

/// Door style, parsed from the raw type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorType {
    /// Bi-fold door hung in its own frame
    BiFold,
    /// Anything else; cased directly off the rough opening
    Other,
}

impl DoorType {
    /// Only the exact tag `bi-fold` is a bi-fold door
    pub fn from_tag(tag: &str) -> Self {
        if tag == BI_FOLD_TAG {
            DoorType::BiFold
        } else {
            DoorType::Other
        }
    }
}

/// Input parameters for one door installation.
///
/// All lengths are in inches. Derivations borrow the spec immutably, so
/// every operation on the same spec returns the same answer.
///
/// ## JSON Example
///
/// ```json
/// {
///   "door_type": "bi-fold",
///   "rough_opening_width_in": 34.0,
///   "rough_opening_height_in": 82.0,
///   "wall_thickness_in": 4.5,
///   "frame_thickness_in": 0.75,
///   "casing_width_in": 2.25,
///   "door_width_in": 30.0,
///   "door_height_in": 80.0
/// }
/// ```
///
/// Omitted optional fields take their defaults. Omitted required fields
/// read as zero and are rejected by [`InstallationSpec::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationSpec {
    /// Door type tag (e.g., "bi-fold", "prehung")
    #[serde(default)]
    pub door_type: String,

    /// Rough opening width in inches
    #[serde(default)]
    pub rough_opening_width_in: f64,

    /// Rough opening height in inches
    #[serde(default)]
    pub rough_opening_height_in: f64,

    /// Finished wall thickness in inches (drywall face to drywall face)
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness_in: f64,

    /// Jamb board thickness in inches. Carried with the job; no derivation reads it yet.
    #[serde(default = "default_frame_thickness")]
    pub frame_thickness_in: f64,

    /// Casing face width in inches
    #[serde(default = "default_casing_width")]
    pub casing_width_in: f64,

    /// Door width in inches
    #[serde(default)]
    pub door_width_in: f64,

    /// Door height in inches
    #[serde(default = "default_door_height")]
    pub door_height_in: f64,
}

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS_IN
}

fn default_frame_thickness() -> f64 {
    DEFAULT_FRAME_THICKNESS_IN
}

fn default_casing_width() -> f64 {
    DEFAULT_CASING_WIDTH_IN
}

fn default_door_height() -> f64 {
    DEFAULT_DOOR_HEIGHT_IN
}

/// Zero and NaN count as "not provided"
fn is_absent(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

impl InstallationSpec {
    /// Create a spec from the required measurements, with defaults for the rest.
    pub fn new(
        door_type: impl Into<String>,
        rough_opening_width_in: f64,
        rough_opening_height_in: f64,
        door_width_in: f64,
    ) -> Self {
        InstallationSpec {
            door_type: door_type.into(),
            rough_opening_width_in,
            rough_opening_height_in,
            wall_thickness_in: DEFAULT_WALL_THICKNESS_IN,
            frame_thickness_in: DEFAULT_FRAME_THICKNESS_IN,
            casing_width_in: DEFAULT_CASING_WIDTH_IN,
            door_width_in,
            door_height_in: DEFAULT_DOOR_HEIGHT_IN,
        }
    }

    pub fn with_wall_thickness(mut self, wall_thickness_in: f64) -> Self {
        self.wall_thickness_in = wall_thickness_in;
        self
    }

    pub fn with_frame_thickness(mut self, frame_thickness_in: f64) -> Self {
        self.frame_thickness_in = frame_thickness_in;
        self
    }

    pub fn with_casing_width(mut self, casing_width_in: f64) -> Self {
        self.casing_width_in = casing_width_in;
        self
    }

    pub fn with_door_height(mut self, door_height_in: f64) -> Self {
        self.door_height_in = door_height_in;
        self
    }

    /// Parse a spec from JSON, applying defaults for omitted optional fields.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed view of the door type tag
    pub fn door_type(&self) -> DoorType {
        DoorType::from_tag(&self.door_type)
    }

    /// Check that the door type and the required measurements are present.
    ///
    /// Physical plausibility (e.g., negative lengths) is not checked.
    pub fn validate(&self) -> CalcResult<()> {
        if self.door_type.is_empty() {
            return Err(CalcError::missing_field("door_type"));
        }
        let required = [
            ("rough_opening_width_in", self.rough_opening_width_in),
            ("rough_opening_height_in", self.rough_opening_height_in),
            ("door_width_in", self.door_width_in),
        ];
        for (field, value) in required {
            if is_absent(value) {
                return Err(CalcError::missing_field(field));
            }
        }
        Ok(())
    }

    /// Largest door the rough opening accepts after shim clearance
    pub fn max_door_size(&self) -> DoorSize {
        DoorSize {
            width_in: self.rough_opening_width_in - SHIM_CLEARANCE_IN,
            height_in: self.rough_opening_height_in - SHIM_CLEARANCE_IN,
        }
    }

    /// True when the door is no larger than [`Self::max_door_size`] on both axes
    pub fn fits_in_rough_opening(&self) -> bool {
        let max = self.max_door_size();
        self.door_width_in <= max.width_in && self.door_height_in <= max.height_in
    }

    /// Whether a stock door will do, or the opening/door needs rework
    pub fn door_adjustment_advice(&self) -> DoorFit {
        if self.fits_in_rough_opening() {
            DoorFit::Fits
        } else {
            DoorFit::DoesNotFit
        }
    }

    /// Frame member lengths for a bi-fold door; `None` for every other type.
    pub fn frame_dimensions(&self) -> Option<FrameDimensions> {
        match self.door_type() {
            DoorType::BiFold => Some(FrameDimensions {
                top_frame_length_in: self.door_width_in + FRAME_HEAD_ALLOWANCE_IN,
                side_frame_length_in: self.door_height_in + FRAME_LEG_ALLOWANCE_IN,
            }),
            DoorType::Other => None,
        }
    }

    /// Casing cut lengths, with reveals.
    ///
    /// Framed doors are cased off the frame. Unframed doors are cased off
    /// the rough opening, less one casing width.
    pub fn casing_cut_lengths(&self) -> CasingCutLengths {
        match self.frame_dimensions() {
            Some(frame) => CasingCutLengths {
                top_length_in: frame.top_frame_length_in + CASING_HEAD_REVEAL_IN,
                side_length_in: frame.side_frame_length_in + CASING_LEG_REVEAL_IN,
            },
            None => CasingCutLengths {
                top_length_in: self.rough_opening_width_in - self.casing_width_in
                    + CASING_HEAD_REVEAL_IN,
                side_length_in: self.rough_opening_height_in - self.casing_width_in
                    + CASING_LEG_REVEAL_IN,
            },
        }
    }

    /// Jamb board size for this wall
    pub fn frame_material(&self) -> CalcResult<FrameStock> {
        FrameStock::for_wall_thickness(self.wall_thickness_in)
    }

    /// Stock lengths (ft) to buy for one head and two legs.
    ///
    /// A member longer than every stocked length is left off the list
    /// rather than failing.
    pub fn frame_order_lengths(&self, dimensions: &FrameDimensions) -> Vec<Feet> {
        let cuts = [
            dimensions.top_frame_length_in,
            dimensions.side_frame_length_in,
            dimensions.side_frame_length_in,
        ];
        cuts.into_iter()
            .filter_map(|cut| {
                let stock = smallest_nominal(&FRAME_NOMINAL_LENGTHS, Inches(cut));
                if stock.is_none() {
                    tracing::debug!(cut_in = cut, "no frame stock long enough, dropping member");
                }
                stock.map(Feet::from)
            })
            .collect()
    }

    /// Casing profile to order
    pub fn casing_material(&self) -> CasingProfile {
        CasingProfile::for_casing_width(self.casing_width_in)
    }

    /// Stock lengths (ft) to buy for the casing: head piece(s) first, then
    /// four legs.
    ///
    /// Each piece gets one casing width per mitered end. When a single
    /// stocked length holds both head pieces end to end, one board is
    /// bought for the pair. Unlike [`Self::frame_order_lengths`], a piece
    /// longer than every stocked length is an error.
    pub fn casing_order_lengths(&self, cut_lengths: &CasingCutLengths) -> CalcResult<Vec<Feet>> {
        let head = Inches(cut_lengths.top_length_in + 2.0 * self.casing_width_in);
        let leg = Inches(cut_lengths.side_length_in + self.casing_width_in);
        let paired_heads = head * 2.0;

        let paired_stock = smallest_nominal(&CASING_NOMINAL_LENGTHS, paired_heads);
        let mut order = if let Some(stock) = paired_stock {
            vec![Feet::from(stock)]
        } else {
            vec![casing_stock(head)?, casing_stock(head)?]
        };
        for _ in 0..SIDE_CASING_PIECES {
            order.push(casing_stock(leg)?);
        }
        Ok(order)
    }
}

fn casing_stock(required: Inches) -> CalcResult<Feet> {
    smallest_nominal(&CASING_NOMINAL_LENGTHS, required)
        .map(Feet::from)
        .ok_or_else(|| {
            CalcError::nominal_length_exhausted(
                required.value(),
                longest_nominal(&CASING_NOMINAL_LENGTHS).value(),
            )
        })
}

/// Largest door dimensions for a rough opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSize {
    pub width_in: f64,
    pub height_in: f64,
}

/// Bi-fold frame member cut lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameDimensions {
    /// Head member length in inches
    pub top_frame_length_in: f64,
    /// Each leg (jamb) member length in inches
    pub side_frame_length_in: f64,
}

/// Casing cut lengths, reveals included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CasingCutLengths {
    /// Head casing length in inches
    pub top_length_in: f64,
    /// Each leg casing length in inches
    pub side_length_in: f64,
}

/// Outcome of the rough-opening fit check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorFit {
    Fits,
    DoesNotFit,
}

impl DoorFit {
    /// Advice shown to the installer
    pub fn message(&self) -> &'static str {
        match self {
            DoorFit::Fits => "Door fits in the rough opening, no special-sized door is needed.",
            DoorFit::DoesNotFit => {
                "Consider ordering a special-sized door or adjust the rough opening."
            }
        }
    }
}

impl std::fmt::Display for DoorFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
