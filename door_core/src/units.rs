//! # Unit Types
//!
//! Type-safe wrappers for trim carpentry lengths. Cuts are measured in
//! inches; lumber is bought by the foot. The wrappers keep the two apart
//! while serializing as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use door_core::units::{Feet, Inches};
//!
//! let stock = Inches(96.0);
//! let stock_ft: Feet = stock.into();
//! assert_eq!(stock_ft.0, 8.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}

impl Mul<f64> for Inches {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Inches(self.0 * rhs)
    }
}

impl Inches {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_feet() {
        let feet: Feet = Inches(84.0).into();
        assert_eq!(feet, Feet(7.0));
        let feet: Feet = Inches(144.0).into();
        assert_eq!(feet, Feet(12.0));
    }

    #[test]
    fn test_scale_and_value() {
        let head = Inches(35.5);
        assert_eq!((head * 2.0).value(), 71.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Feet(8.0).to_string(), "8 ft");
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(10.0);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "10.0");
        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
