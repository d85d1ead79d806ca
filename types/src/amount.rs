//! VGV token amounts.
//!
//! Amounts are fixed-point integers (u128) in raw units — the smallest
//! denomination. There is no fractional unit below 1 raw, so no rounding
//! can occur inside the core; every division site rounds down explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::params::BPS_SCALE;

/// The absolute supply ceiling: 10 billion raw VGV units.
pub const MAX_SUPPLY_RAW: u128 = 10_000_000_000;

/// A VGV amount in raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    /// The maximum supply as an `Amount`.
    pub const MAX_SUPPLY: Self = Self(MAX_SUPPLY_RAW);

    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// A basis-point fraction of this amount, rounded down.
    ///
    /// Used for the annual mint ceiling (200 bps of supply) and the monthly
    /// bridge cap (500 bps of the month-start balance). Flooring means
    /// fractional raw units are never granted.
    pub fn scale_bps(self, bps: u32) -> Self {
        Self(self.0.saturating_mul(bps as u128) / BPS_SCALE as u128)
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} VGV", self.0)
    }
}
