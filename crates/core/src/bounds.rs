use thiserror::Error;

/// A closed interval `[min, max]` for one decision variable.
///
/// Coincident bounds (`min == max`) are allowed and pin the variable to a
/// single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("bounds must be finite, got [{min}, {max}]")]
    NotFinite { min: f64, max: f64 },

    #[error("lower bound {min} exceeds upper bound {max}")]
    Reversed { min: f64, max: f64 },

    #[error("width of [{min}, {max}] overflows")]
    TooWide { min: f64, max: f64 },
}

impl Bounds {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `min > max`, or if
    /// `max - min` overflows.
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BoundsError::NotFinite { min, max });
        }
        if min > max {
            return Err(BoundsError::Reversed { min, max });
        }
        if !(max - min).is_finite() {
            return Err(BoundsError::TooWide { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if `value` lies within the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Projects `value` onto the interval.
    ///
    /// Values above `max` become `max`, values below `min` become `min`, and
    /// everything else is returned unchanged. NaN maps to `min`, so the
    /// result always lies within the interval.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else if value > self.max {
            self.max
        } else if value < self.min {
            self.min
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_reversed_bounds() {
        let err = Bounds::new(1.0, -1.0).unwrap_err();
        assert!(matches!(err, BoundsError::Reversed { .. }));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(Bounds::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_bounds_whose_width_overflows() {
        let err = Bounds::new(-f64::MAX, f64::MAX).unwrap_err();
        assert!(matches!(err, BoundsError::TooWide { .. }));

        assert!(Bounds::new(0.0, f64::MAX).is_ok());
    }

    #[test]
    fn clamp_maps_nan_to_lower_bound() {
        let bounds = Bounds::new(-2.0, 3.0).unwrap();

        assert_eq!(bounds.clamp(f64::NAN), -2.0);
        assert!(bounds.contains(bounds.clamp(f64::NAN)));
    }

    #[test]
    fn clamp_projects_onto_interval() {
        let bounds = Bounds::new(-2.0, 3.0).unwrap();

        assert_relative_eq!(bounds.clamp(5.0), 3.0);
        assert_relative_eq!(bounds.clamp(-7.5), -2.0);
        assert_relative_eq!(bounds.clamp(0.25), 0.25);
        assert_relative_eq!(bounds.width(), 5.0);
    }

    #[test]
    fn coincident_bounds_pin_the_value() {
        let bounds = Bounds::new(4.0, 4.0).unwrap();

        for value in [-100.0, 3.999, 4.0, 4.001, 100.0] {
            assert_relative_eq!(bounds.clamp(value), 4.0);
        }
        assert!(bounds.contains(4.0));
        assert!(!bounds.contains(4.001));
    }
}
