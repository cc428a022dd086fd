//! Collaborator contracts for raw host readings.
//!
//! Implementations swallow their own failures and return the documented
//! zero/default value, so the sampler never handles an error type.

use super::snapshot::{CpuTicks, ProcessEntry, SwapStats, VmStatistics};

pub trait MemorySource {
    /// Page-level VM counters; all zeros when the host call fails.
    fn vm_statistics(&mut self) -> VmStatistics;
}

pub trait PressureSource {
    /// Raw host pressure value (1, 2 or 4 on a healthy host).
    fn pressure_raw(&mut self) -> i32;
}

pub trait CpuTickSource {
    /// Cumulative tick counters; all zeros when the host call fails.
    fn cpu_ticks(&mut self) -> CpuTicks;
}

pub trait SwapSource {
    fn swap(&mut self) -> SwapStats;
}

pub trait ProcessLister {
    /// Up to `limit` processes, sorted by descending resident size.
    fn top_processes(&mut self, limit: usize) -> Vec<ProcessEntry>;
}

/// Everything the sampler pulls each tick.
pub trait MetricsSource:
    MemorySource + PressureSource + CpuTickSource + SwapSource + ProcessLister
{
}

impl<T> MetricsSource for T where
    T: MemorySource + PressureSource + CpuTickSource + SwapSource + ProcessLister
{
}
