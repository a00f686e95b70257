// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Number of newline-delimited lines in a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineCount(usize);

impl LineCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for LineCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for LineCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Self> for LineCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for LineCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<LineCount> for usize {
    fn from(value: LineCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for LineCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<LineCount> for usize {
    fn eq(&self, other: &LineCount) -> bool {
        *self == other.0
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
