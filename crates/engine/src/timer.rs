//! Fixed-period drop timer.

use std::time::Duration;

/// Accumulates elapsed time and reports how many whole periods passed.
#[derive(Debug, Clone)]
pub struct DropTimer {
    period: Duration,
    elapsed: Duration,
}

impl DropTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `dt` and return the number of ticks now due. The remainder carries
    /// over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_once_per_period() {
        let mut timer = DropTimer::new(Duration::from_millis(500));
        assert_eq!(timer.advance(Duration::from_millis(16)), 0);
        assert_eq!(timer.advance(Duration::from_millis(483)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(499)), 0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut timer = DropTimer::new(Duration::from_millis(100));
        let mut ticks = 0;
        for _ in 0..30 {
            ticks += timer.advance(Duration::from_millis(16));
        }
        // 480ms total.
        assert_eq!(ticks, 4);
        // 80ms carried, so the fifth tick lands 20ms later.
        assert_eq!(timer.advance(Duration::from_millis(19)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_long_stall_yields_several_ticks() {
        let mut timer = DropTimer::new(Duration::from_millis(500));
        assert_eq!(timer.advance(Duration::from_millis(1600)), 3);
        assert_eq!(timer.advance(Duration::from_millis(400)), 1);
    }
}
