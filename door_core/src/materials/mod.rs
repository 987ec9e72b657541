//! # Materials
//!
//! Stock lumber used for door trim: jamb boards, casing profiles and the
//! nominal lengths each is sold in.
//!
//! ## Example
//!
//! ```rust
//! use door_core::materials::{smallest_nominal, FrameStock, FRAME_NOMINAL_LENGTHS};
//! use door_core::units::Inches;
//!
//! let board = FrameStock::for_wall_thickness(4.5).unwrap();
//! assert_eq!(board, FrameStock::OneBySix);
//!
//! let stock = smallest_nominal(&FRAME_NOMINAL_LENGTHS, Inches(81.25));
//! assert_eq!(stock, Some(Inches(96.0)));
//! ```

pub mod stock;

pub use stock::{
    longest_nominal, smallest_nominal, CasingProfile, FrameStock, CASING_NOMINAL_LENGTHS,
    FRAME_NOMINAL_LENGTHS, MAX_WALL_THICKNESS_IN, ONE_BY_SIX_MAX_WALL_IN, WIDE_CASING_WIDTH_IN,
};
