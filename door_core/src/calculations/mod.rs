//! # Installation Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `InstallationSpec` - Input parameters (JSON-serializable)
//! - derivation methods on the spec - one answer each (frame, casing, fit)
//! - `calculate(&spec) -> Result<InstallationReport, CalcError>` - everything at once
//!
//! ## Available Calculations
//!
//! - [`installation`] - Door fit, frame and casing lengths, stock selection
//! - [`report`] - Aggregate cut sheet and purchase summary

pub mod installation;
pub mod report;

// Re-export commonly used types
pub use installation::{
    CasingCutLengths, DoorFit, DoorSize, DoorType, FrameDimensions, InstallationSpec,
};
pub use report::{calculate, InstallationReport, PurchaseLine, StockItem};
