//! # door_core - Door Trim Calculation Engine
//!
//! `door_core` works out what to cut and what to buy when framing and
//! casing an interior door. Give it the rough opening, wall thickness and
//! door size; it answers whether the door fits, the frame and casing cut
//! lengths, and the stock lengths to pick up at the lumber yard.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over an immutable input record
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use door_core::{calculate, InstallationSpec};
//!
//! let spec = InstallationSpec::new("bi-fold", 34.0, 82.0, 30.0);
//! let report = calculate(&spec).unwrap();
//!
//! for line in report.purchase_summary() {
//!     println!("{} x {} {}", line.count, line.length, line.item);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Installation spec, derivations and the aggregate report
//! - [`materials`] - Frame boards, casing profiles, nominal stock lengths
//! - [`units`] - Type-safe length wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, InstallationReport, InstallationSpec};
pub use errors::{CalcError, CalcResult};
