//! Timestamp type and civil-calendar helpers.
//!
//! Timestamps are Unix epoch seconds (UTC). The core never reads the system
//! clock during block processing — the consensus layer supplies a per-block
//! timestamp, and every deadline or epoch boundary is computed from it, so
//! all validators derive identical calendar boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// Only for tooling and snapshot metadata — never called inside the
    /// state-transition function.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }

    /// The calendar year (UTC) this timestamp falls in.
    ///
    /// Used for the yearly minting ledger.
    pub fn year(&self) -> u16 {
        self.civil_month().year
    }

    /// The civil (year, month) this timestamp falls in.
    ///
    /// Used as the bridge conversion window key.
    pub fn civil_month(&self) -> CivilMonth {
        let days = (self.0 / SECS_PER_DAY) as i64;
        let (year, month, _day) = civil_from_days(days);
        CivilMonth {
            year: year as u16,
            month,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// A civil calendar month (UTC), e.g. `2026-08`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CivilMonth {
    pub year: u16,
    /// 1-based month (1 = January).
    pub month: u8,
}

impl fmt::Display for CivilMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Convert days-since-epoch to (year, month, day) in the proleptic Gregorian
/// calendar. Pure integer arithmetic (Howard Hinnant's `civil_from_days`),
/// identical on every platform.
fn civil_from_days(z: i64) -> (i64, u8, u8) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_january_1970() {
        let m = Timestamp::EPOCH.civil_month();
        assert_eq!(m, CivilMonth { year: 1970, month: 1 });
        assert_eq!(Timestamp::EPOCH.year(), 1970);
    }

    #[test]
    fn known_dates() {
        // 2025-01-01T00:00:00Z
        let t = Timestamp::new(1_735_689_600);
        assert_eq!(t.civil_month(), CivilMonth { year: 2025, month: 1 });

        // 2024-02-29T12:00:00Z (leap day)
        let t = Timestamp::new(1_709_208_000);
        assert_eq!(t.civil_month(), CivilMonth { year: 2024, month: 2 });

        // 2026-08-25T00:00:00Z
        let t = Timestamp::new(1_787_616_000);
        assert_eq!(t.civil_month(), CivilMonth { year: 2026, month: 8 });
    }

    #[test]
    fn month_boundary() {
        // 2025-01-31T23:59:59Z vs 2025-02-01T00:00:00Z
        let last = Timestamp::new(1_738_367_999);
        let first = Timestamp::new(1_738_368_000);
        assert_eq!(last.civil_month(), CivilMonth { year: 2025, month: 1 });
        assert_eq!(first.civil_month(), CivilMonth { year: 2025, month: 2 });
    }

    #[test]
    fn year_boundary() {
        // 2024-12-31T23:59:59Z vs 2025-01-01T00:00:00Z
        assert_eq!(Timestamp::new(1_735_689_599).year(), 2024);
        assert_eq!(Timestamp::new(1_735_689_600).year(), 2025);
    }

    #[test]
    fn civil_month_ordering() {
        let a = CivilMonth { year: 2025, month: 12 };
        let b = CivilMonth { year: 2026, month: 1 };
        assert!(a < b);
    }

    #[test]
    fn usable_as_a_constant() {
        // test suites pin block times as `const`
        const T: Timestamp = Timestamp::new(1_787_616_000);
        assert_eq!(T.as_secs(), 1_787_616_000);
    }
}
