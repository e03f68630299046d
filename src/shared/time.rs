use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// A span of time measured in minutes.
///
/// Travel times are derived from road distance over bus velocity, so they are
/// fractional. Ordering uses `total_cmp` which keeps the type usable as a
/// search weight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration(f64);

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, duration| acc + duration)
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} min", self.0))
    }
}

impl Duration {
    pub const ZERO: Duration = Duration(0.0);

    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    pub const fn as_minutes(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

#[test]
fn duration_sum_test() {
    let total: Duration = [1.5, 2.0, 0.5]
        .into_iter()
        .map(Duration::from_minutes)
        .sum();
    assert_eq!(total, Duration::from_minutes(4.0));
}

#[test]
fn duration_cmp_test() {
    assert!(Duration::from_minutes(6.0) > Duration::from_minutes(5.0));
    assert!(!Duration::from_minutes(-1.0).is_valid());
    assert!(!Duration::from_minutes(f64::NAN).is_valid());
}

#[test]
fn duration_eq_agrees_with_ordering_test() {
    let values = [-0.0, 0.0, 1.5, f64::NAN, f64::INFINITY];
    for a in values.map(Duration::from_minutes) {
        for b in values.map(Duration::from_minutes) {
            assert_eq!(a == b, a.partial_cmp(&b) == Some(cmp::Ordering::Equal));
        }
        assert_eq!(a, a);
    }
    assert_ne!(Duration::from_minutes(-0.0), Duration::ZERO);
}
