use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::platform;
use super::process::PsProcessLister;
use super::snapshot::{CpuTicks, ProcessEntry, SwapStats, VmStatistics};
use super::source::{CpuTickSource, MemorySource, PressureSource, ProcessLister, SwapSource};

/// Raw pressure value reported when the host has no pressure signal.
const PRESSURE_NORMAL_RAW: i32 = 1;

/// Host-backed collaborator: `sysinfo` for totals and swap, the platform
/// layer for page counters, tick counters and pressure, `ps` for processes.
pub struct HostCollector {
    sys: System,
    lister: PsProcessLister,
}

impl Default for HostCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCollector {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );
        HostCollector {
            sys,
            lister: PsProcessLister::default(),
        }
    }
}

impl MemorySource for HostCollector {
    fn vm_statistics(&mut self) -> VmStatistics {
        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_ram());
        let Some(mut vm) = platform::vm_statistics() else {
            tracing::warn!("vm statistics unavailable, reporting zeroed memory");
            return VmStatistics::default();
        };
        let total = self.sys.total_memory();
        if total > 0 {
            vm.total_physical = total;
        }
        vm
    }
}

impl PressureSource for HostCollector {
    fn pressure_raw(&mut self) -> i32 {
        platform::pressure_raw().unwrap_or_else(|| {
            tracing::debug!("memory pressure unavailable, assuming normal");
            PRESSURE_NORMAL_RAW
        })
    }
}

impl CpuTickSource for HostCollector {
    fn cpu_ticks(&mut self) -> CpuTicks {
        platform::cpu_ticks().unwrap_or_else(|| {
            tracing::warn!("cpu tick counters unavailable, reporting zero ticks");
            CpuTicks::default()
        })
    }
}

impl SwapSource for HostCollector {
    fn swap(&mut self) -> SwapStats {
        self.sys.refresh_memory_specifics(MemoryRefreshKind::nothing().with_swap());
        SwapStats {
            total: self.sys.total_swap(),
            used: self.sys.used_swap(),
        }
    }
}

impl ProcessLister for HostCollector {
    fn top_processes(&mut self, limit: usize) -> Vec<ProcessEntry> {
        self.lister.top_processes(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_well_shaped() {
        let mut collector = HostCollector::new();
        let vm = collector.vm_statistics();
        let swap = collector.swap();
        assert!(swap.used <= swap.total || swap.total == 0);
        let _ = collector.cpu_ticks();
        let _ = collector.pressure_raw();
        if vm.page_size > 0 {
            assert!(vm.total_physical > 0);
        }
    }
}
