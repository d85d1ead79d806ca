//! Oracle price observations and the 7-day moving average.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use vgv_types::Timestamp;

/// Fixed-point scale for oracle prices: 1 VGV = `price / 1_000_000` citizen
/// units.
pub const PRICE_SCALE: u64 = 1_000_000;

const SECS_PER_DAY: u64 = 86_400;
const WINDOW_DAYS: usize = 7;

/// One oracle observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OraclePrice {
    /// Citizen units per VGV, scaled by [`PRICE_SCALE`].
    pub price: u64,
    pub timestamp: Timestamp,
}

/// Daily price samples from the last seven UTC days; one slot per day,
/// newest observation of a day wins. Samples from days more than six days
/// behind the newest observation drop out, so a gap in the feed cannot keep
/// stale prices in the average.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceWindow {
    /// (day index, price) pairs in ascending day order.
    samples: VecDeque<(u64, u64)>,
    last_updated: Option<Timestamp>,
}

impl PriceWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation. Out-of-order observations older than the
    /// newest recorded day are ignored.
    pub fn record(&mut self, observation: OraclePrice) {
        let day = observation.timestamp.as_secs() / SECS_PER_DAY;
        match self.samples.back_mut() {
            Some((last_day, price)) if *last_day == day => *price = observation.price,
            Some((last_day, _)) if *last_day > day => return,
            _ => {
                self.samples.push_back((day, observation.price));
                let cutoff = day.saturating_sub(WINDOW_DAYS as u64 - 1);
                while matches!(self.samples.front(), Some((d, _)) if *d < cutoff) {
                    self.samples.pop_front();
                }
            }
        }
        self.last_updated = Some(observation.timestamp);
    }

    /// The moving average over the recorded days, rounded down. `None` until
    /// the first observation arrives.
    pub fn average(&self) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: u128 = self.samples.iter().map(|(_, p)| *p as u128).sum();
        Some((sum / self.samples.len() as u128) as u64)
    }

    /// When the newest observation arrived.
    pub fn last_updated(&self) -> Option<Timestamp> {
        self.last_updated
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(day: u64, price: u64) -> OraclePrice {
        OraclePrice {
            price,
            timestamp: Timestamp::new(day * SECS_PER_DAY + 43_200),
        }
    }

    #[test]
    fn average_over_recorded_days() {
        let mut window = PriceWindow::new();
        assert_eq!(window.average(), None);

        window.record(obs(1, 100));
        window.record(obs(2, 200));
        window.record(obs(3, 330));
        assert_eq!(window.average(), Some(210));
    }

    #[test]
    fn same_day_overwrites() {
        let mut window = PriceWindow::new();
        window.record(obs(1, 100));
        window.record(obs(1, 300));
        assert_eq!(window.sample_count(), 1);
        assert_eq!(window.average(), Some(300));
    }

    #[test]
    fn window_caps_at_seven_days() {
        let mut window = PriceWindow::new();
        for day in 0..10 {
            window.record(obs(day, 100 + day));
        }
        assert_eq!(window.sample_count(), 7);
        // days 3..=9 remain: average of 103..=109
        assert_eq!(window.average(), Some(106));
    }

    #[test]
    fn feed_gap_evicts_samples_older_than_the_window() {
        let mut window = PriceWindow::new();
        window.record(obs(0, 100));
        window.record(obs(100, 300));
        assert_eq!(window.sample_count(), 1);
        assert_eq!(window.average(), Some(300));
    }

    #[test]
    fn six_day_old_sample_stays_in_the_window() {
        let mut window = PriceWindow::new();
        window.record(obs(0, 100));
        window.record(obs(6, 300));
        assert_eq!(window.sample_count(), 2);
        assert_eq!(window.average(), Some(200));

        window.record(obs(7, 500));
        // day 0 is now out of range
        assert_eq!(window.sample_count(), 2);
        assert_eq!(window.average(), Some(400));
    }

    #[test]
    fn stale_out_of_order_observation_ignored() {
        let mut window = PriceWindow::new();
        window.record(obs(5, 500));
        window.record(obs(2, 200));
        assert_eq!(window.sample_count(), 1);
        assert_eq!(window.average(), Some(500));
        assert_eq!(window.last_updated(), Some(obs(5, 500).timestamp));
    }
}
