use super::cpu::CpuDeltaCalculator;
use super::history::RollingHistory;
use super::snapshot::{MemoryStats, MetricSnapshot, PressureLevel};
use super::source::MetricsSource;

pub const DEFAULT_TOP_PROCESSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    Idle,
    Sampling,
}

/// Periodic driver: pulls readings, derives CPU, feeds both histories and
/// assembles one [`MetricSnapshot`] per tick.
pub struct Sampler<S> {
    source: S,
    cpu: CpuDeltaCalculator,
    memory_history: RollingHistory,
    cpu_history: RollingHistory,
    top_process_count: usize,
    state: SamplerState,
    ticks: u64,
}

impl<S: MetricsSource> Sampler<S> {
    /// Takes the warm-up CPU sample so the first tick reports a real delta.
    pub fn new(source: S, top_process_count: usize) -> Self {
        let mut sampler = Self {
            source,
            cpu: CpuDeltaCalculator::new(),
            memory_history: RollingHistory::new(),
            cpu_history: RollingHistory::new(),
            top_process_count,
            state: SamplerState::Idle,
            ticks: 0,
        };
        let warmup = sampler.source.cpu_ticks();
        sampler.cpu.sample(warmup);
        sampler
    }

    pub fn tick(&mut self) -> MetricSnapshot {
        let _tick_span = tracing::debug_span!("sampler.tick", tick = self.ticks + 1).entered();
        self.state = SamplerState::Sampling;

        let memory = MemoryStats::from_vm(&self.source.vm_statistics());
        let pressure = PressureLevel::from_raw(self.source.pressure_raw());
        let swap = self.source.swap();
        let ticks = self.source.cpu_ticks();
        let top_processes = self.source.top_processes(self.top_process_count);

        let cpu_percent = self.cpu.sample(ticks);
        let snapshot = MetricSnapshot::new(memory, pressure, cpu_percent, swap, top_processes);

        self.memory_history.push(snapshot.memory.used_percentage());
        self.cpu_history.push(snapshot.cpu_percent);

        tracing::debug!(
            memory_percent = snapshot.memory.used_percentage(),
            cpu_percent = snapshot.cpu_percent,
            pressure = snapshot.pressure.label(),
            processes = snapshot.top_processes.len(),
            "tick sampled"
        );

        self.ticks += 1;
        self.state = SamplerState::Idle;
        snapshot
    }

    pub fn state(&self) -> SamplerState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn memory_history(&self) -> &RollingHistory {
        &self.memory_history
    }

    pub fn cpu_history(&self) -> &RollingHistory {
        &self.cpu_history
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::snapshot::{CpuTicks, ProcessEntry, SwapStats, VmStatistics};
    use crate::system::source::{
        CpuTickSource, MemorySource, PressureSource, ProcessLister, SwapSource,
    };
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Scripted {
        ticks: VecDeque<CpuTicks>,
        vm: VmStatistics,
        pressure: i32,
        process_calls: usize,
    }

    impl MemorySource for Scripted {
        fn vm_statistics(&mut self) -> VmStatistics {
            self.vm
        }
    }

    impl PressureSource for Scripted {
        fn pressure_raw(&mut self) -> i32 {
            self.pressure
        }
    }

    impl CpuTickSource for Scripted {
        fn cpu_ticks(&mut self) -> CpuTicks {
            self.ticks.pop_front().unwrap_or_default()
        }
    }

    impl SwapSource for Scripted {
        fn swap(&mut self) -> SwapStats {
            SwapStats::unavailable()
        }
    }

    impl ProcessLister for Scripted {
        fn top_processes(&mut self, limit: usize) -> Vec<ProcessEntry> {
            self.process_calls += 1;
            (0..limit.min(2))
                .map(|i| ProcessEntry {
                    name: format!("p{i}"),
                    resident_kb: 100 - i as u64,
                })
                .collect()
        }
    }

    #[test]
    fn warmup_makes_first_tick_meaningful() {
        let source = Scripted {
            ticks: VecDeque::from([
                CpuTicks::new(100, 50, 850, 0),
                CpuTicks::new(110, 55, 860, 0),
            ]),
            ..Default::default()
        };
        let mut sampler = Sampler::new(source, 5);
        assert_eq!(sampler.tick_count(), 0);
        let snap = sampler.tick();
        assert!((snap.cpu_percent - 60.0).abs() < 1e-9);
        assert_eq!(sampler.cpu_history().to_vec(), vec![snap.cpu_percent]);
    }

    #[test]
    fn tick_returns_to_idle_and_counts() {
        let mut sampler = Sampler::new(Scripted::default(), 5);
        assert_eq!(sampler.state(), SamplerState::Idle);
        sampler.tick();
        sampler.tick();
        assert_eq!(sampler.state(), SamplerState::Idle);
        assert_eq!(sampler.tick_count(), 2);
        assert_eq!(sampler.memory_history().len(), 2);
        assert_eq!(sampler.source().process_calls, 2);
    }

    #[test]
    fn unknown_pressure_is_normal() {
        let source = Scripted {
            pressure: 17,
            ..Default::default()
        };
        let mut sampler = Sampler::new(source, 5);
        assert_eq!(sampler.tick().pressure, PressureLevel::Normal);
    }

    #[test]
    fn zeroed_collaborators_give_zeroed_snapshot() {
        let mut sampler = Sampler::new(Scripted::default(), 3);
        let snap = sampler.tick();
        assert_eq!(snap.memory, MemoryStats::zeroed());
        assert_eq!(snap.cpu_percent, 0.0);
        assert!(!snap.swap.is_available());
        assert_eq!(snap.top_processes.len(), 2);
        assert_eq!(sampler.memory_history().latest(), Some(&0.0));
    }
}
