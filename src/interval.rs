//! Closed intervals [min, max] used for ray t-values.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f64) -> Self {
        Self { min: self.min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let interval = Interval::new(0.5, 2.0);
        assert!(interval.contains(0.5));
        assert!(interval.contains(2.0));
        assert!(interval.contains(1.0));
        assert!(!interval.contains(0.4));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn test_with_max() {
        let narrowed = Interval::new(0.001, f64::INFINITY).with_max(3.0);
        assert_eq!(narrowed, Interval::new(0.001, 3.0));
        assert!(!narrowed.contains(3.5));
    }
}
