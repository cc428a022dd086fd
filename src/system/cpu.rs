use super::snapshot::CpuTicks;

/// Converts cumulative tick counters into a per-interval busy percentage.
///
/// Every call measures the ticks elapsed since the previous call, so the
/// result is an average over the sampling interval rather than since boot.
#[derive(Debug, Default)]
pub struct CpuDeltaCalculator {
    baseline: Option<CpuTicks>,
}

impl CpuDeltaCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.baseline.is_some()
    }

    /// Returns the busy percentage since the last call, in `[0, 100]`.
    ///
    /// The first call only records a baseline and returns 0.
    pub fn sample(&mut self, current: CpuTicks) -> f64 {
        let percent = match self.baseline {
            None => 0.0,
            Some(prev) => busy_percent(&prev, &current),
        };
        self.baseline = Some(current);
        percent
    }
}

fn busy_percent(prev: &CpuTicks, current: &CpuTicks) -> f64 {
    // Signed space: counters can go backwards after a failed read or a reboot.
    let delta_total = current.total() as i128 - prev.total() as i128;
    if delta_total <= 0 {
        return 0.0;
    }
    let delta_active = current.active() as i128 - prev.active() as i128;
    let percent = delta_active as f64 / delta_total as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_bootstrap() {
        let mut calc = CpuDeltaCalculator::new();
        assert!(!calc.is_bootstrapped());
        assert_eq!(calc.sample(CpuTicks::new(900, 900, 10, 0)), 0.0);
        assert!(calc.is_bootstrapped());
    }

    #[test]
    fn delta_over_interval() {
        let mut calc = CpuDeltaCalculator::new();
        calc.sample(CpuTicks::new(100, 50, 850, 0));
        let pct = calc.sample(CpuTicks::new(110, 55, 860, 0));
        assert!((pct - 60.0).abs() < 1e-9);
    }

    #[test]
    fn baseline_moves_every_call() {
        let mut calc = CpuDeltaCalculator::new();
        calc.sample(CpuTicks::new(0, 0, 0, 0));
        // all busy
        assert_eq!(calc.sample(CpuTicks::new(100, 0, 0, 0)), 100.0);
        // all idle since the previous call, not since the first one
        assert_eq!(calc.sample(CpuTicks::new(100, 0, 100, 0)), 0.0);
    }

    #[test]
    fn unchanged_counters_read_zero() {
        let mut calc = CpuDeltaCalculator::new();
        let ticks = CpuTicks::new(10, 10, 10, 10);
        calc.sample(ticks);
        assert_eq!(calc.sample(ticks), 0.0);
    }

    #[test]
    fn regression_reads_zero_and_rebases() {
        let mut calc = CpuDeltaCalculator::new();
        calc.sample(CpuTicks::new(1000, 1000, 1000, 0));
        // zeroed failure reading
        let pct = calc.sample(CpuTicks::default());
        assert_eq!(pct, 0.0);
        assert!(!pct.is_nan());
        // next interval measures from the zeroed reading
        assert_eq!(calc.sample(CpuTicks::new(50, 0, 50, 0)), 50.0);
    }

    #[test]
    fn nice_counts_as_active() {
        let mut calc = CpuDeltaCalculator::new();
        calc.sample(CpuTicks::default());
        assert_eq!(calc.sample(CpuTicks::new(0, 0, 75, 25)), 25.0);
    }

    #[test]
    fn active_backwards_clamps_to_zero() {
        let mut calc = CpuDeltaCalculator::new();
        calc.sample(CpuTicks::new(500, 0, 0, 0));
        assert_eq!(calc.sample(CpuTicks::new(0, 0, 600, 0)), 0.0);
    }
}
