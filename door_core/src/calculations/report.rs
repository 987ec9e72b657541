//! # Installation Report
//!
//! Runs every derivation for one installation and collects the results
//! into a single serializable cut sheet.
//!
//! ## Example
//!
//! ```rust
//! use door_core::calculations::installation::InstallationSpec;
//! use door_core::calculations::report::calculate;
//!
//! let spec = InstallationSpec::new("bi-fold", 34.0, 82.0, 30.0);
//! let report = calculate(&spec).unwrap();
//!
//! assert!(report.fits_in_rough_opening);
//! assert_eq!(report.frame_order_lengths_ft.len(), 3);
//! assert_eq!(report.casing_order_lengths_ft.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::installation::{
    CasingCutLengths, DoorFit, DoorSize, DoorType, FrameDimensions, InstallationSpec,
};
use crate::errors::CalcResult;
use crate::materials::{CasingProfile, FrameStock};
use crate::units::Feet;

/// Everything derived for one installation.
///
/// `frame_dimensions` is `None` (and `frame_order_lengths_ft` empty) for
/// door types that are cased straight off the rough opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationReport {
    pub door_type: DoorType,
    pub max_door_size: DoorSize,
    pub fits_in_rough_opening: bool,
    pub door_fit: DoorFit,
    /// Advice text for `door_fit`
    pub advice: String,
    pub frame_dimensions: Option<FrameDimensions>,
    pub casing_cut_lengths: CasingCutLengths,
    pub frame_material: FrameStock,
    pub frame_order_lengths_ft: Vec<Feet>,
    pub casing_material: CasingProfile,
    pub casing_order_lengths_ft: Vec<Feet>,
}

/// Which kind of board a purchase line is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockItem {
    Frame(FrameStock),
    Casing(CasingProfile),
}

impl std::fmt::Display for StockItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockItem::Frame(board) => write!(f, "{} frame board", board),
            StockItem::Casing(profile) => write!(f, "{}", profile),
        }
    }
}

/// One line of a shopping list: `count` boards of `length` feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub item: StockItem,
    pub length: Feet,
    pub count: usize,
}

impl InstallationReport {
    /// Group order lengths into shopping-list lines, frame boards first,
    /// shortest length first within each item.
    pub fn purchase_summary(&self) -> Vec<PurchaseLine> {
        let mut lines = group_lengths(
            StockItem::Frame(self.frame_material),
            &self.frame_order_lengths_ft,
        );
        lines.extend(group_lengths(
            StockItem::Casing(self.casing_material),
            &self.casing_order_lengths_ft,
        ));
        lines
    }

    /// Total boards to buy
    pub fn board_count(&self) -> usize {
        self.frame_order_lengths_ft.len() + self.casing_order_lengths_ft.len()
    }
}

fn group_lengths(item: StockItem, lengths: &[Feet]) -> Vec<PurchaseLine> {
    let mut lines: Vec<PurchaseLine> = Vec::new();
    for length in lengths {
        match lines.iter_mut().find(|line| line.length == *length) {
            Some(line) => line.count += 1,
            None => lines.push(PurchaseLine {
                item,
                length: *length,
                count: 1,
            }),
        }
    }
    lines.sort_by(|a, b| a.length.0.total_cmp(&b.length.0));
    lines
}

/// Run the full derivation sequence for one installation.
///
/// # Returns
///
/// * `Ok(InstallationReport)` - All derived lengths and materials
/// * `Err(CalcError)` - Missing input, wall too thick for stocked boards,
///   or casing longer than any stocked length
pub fn calculate(spec: &InstallationSpec) -> CalcResult<InstallationReport> {
    spec.validate()?;

    let frame_dimensions = spec.frame_dimensions();
    let casing_cut_lengths = spec.casing_cut_lengths();
    let frame_material = spec.frame_material()?;
    let frame_order_lengths_ft = frame_dimensions
        .as_ref()
        .map(|frame| spec.frame_order_lengths(frame))
        .unwrap_or_default();
    let casing_material = spec.casing_material();
    let casing_order_lengths_ft = spec.casing_order_lengths(&casing_cut_lengths)?;
    let door_fit = spec.door_adjustment_advice();

    tracing::debug!(
        door_type = %spec.door_type,
        fits = spec.fits_in_rough_opening(),
        boards = frame_order_lengths_ft.len() + casing_order_lengths_ft.len(),
        "installation calculated"
    );

    Ok(InstallationReport {
        door_type: spec.door_type(),
        max_door_size: spec.max_door_size(),
        fits_in_rough_opening: spec.fits_in_rough_opening(),
        door_fit,
        advice: door_fit.message().to_string(),
        frame_dimensions,
        casing_cut_lengths,
        frame_material,
        frame_order_lengths_ft,
        casing_material,
        casing_order_lengths_ft,
    })
}
