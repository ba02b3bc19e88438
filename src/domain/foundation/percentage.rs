//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a part/whole ratio, rounding half up.
    ///
    /// `from_ratio(2, 3)` is 67%, `from_ratio(1, 8)` is 13%. A zero `whole`
    /// yields zero percent; `part` is clamped to `whole`.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole);
        // Integer round-half-up: (200 * part + whole) / (2 * whole)
        let value = (200 * part + whole) / (2 * whole);
        Self(value as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_accepts_valid_values() {
        assert!(Percentage::try_new(0).is_ok());
        assert!(Percentage::try_new(100).is_ok());
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
        assert_eq!(Percentage::from_ratio(1, 2).value(), 50);
    }

    #[test]
    fn from_ratio_handles_boundaries() {
        assert_eq!(Percentage::from_ratio(0, 5), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5, 5), Percentage::HUNDRED);
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_clamps_part_to_whole() {
        assert_eq!(Percentage::from_ratio(7, 5), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(0).as_fraction() - 0.0).abs() < f64::EPSILON);
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Percentage::new(100).as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
        assert_eq!(format!("{}", Percentage::HUNDRED), "100%");
    }

    #[test]
    fn percentage_default_is_zero() {
        assert_eq!(Percentage::default(), Percentage::ZERO);
    }

    #[test]
    fn percentage_serializes_to_json() {
        let pct = Percentage::new(42);
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
    }

    #[test]
    fn percentage_deserializes_from_json() {
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }

    #[test]
    fn percentage_ordering_works() {
        assert!(Percentage::new(25) < Percentage::new(75));
    }
}
