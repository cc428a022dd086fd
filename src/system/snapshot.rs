use serde::Serialize;

/// Raw page-level VM counters as reported by the memory collaborator.
///
/// Page counts are multiplied by `page_size` when converted into
/// [`MemoryStats`]; `total_physical` is already in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VmStatistics {
    pub active: u64,
    pub inactive: u64,
    pub wired: u64,
    pub compressor_pages: u64,
    pub free_pages: u64,
    pub page_size: u64,
    pub total_physical: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub active: u64,
    pub inactive: u64,
    pub wired: u64,
    pub compressed: u64,
}

impl MemoryStats {
    /// Builds the byte-level view; `used` is always `active + wired + compressed`.
    pub fn new(total: u64, free: u64, active: u64, inactive: u64, wired: u64, compressed: u64) -> Self {
        Self {
            total,
            used: active.saturating_add(wired).saturating_add(compressed),
            free,
            active,
            inactive,
            wired,
            compressed,
        }
    }

    pub fn from_vm(vm: &VmStatistics) -> Self {
        let bytes = |pages: u64| pages.saturating_mul(vm.page_size);
        Self::new(
            vm.total_physical,
            bytes(vm.free_pages),
            bytes(vm.active),
            bytes(vm.inactive),
            bytes(vm.wired),
            bytes(vm.compressor_pages),
        )
    }

    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Percentage of physical memory in use. A zero total reads as 0%.
    pub fn used_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f64 / self.total as f64 * 100.0
    }
}

/// Host memory-pressure classification.
///
/// The raw values reported by the host are sparse (1, 2, 4), so the mapping
/// goes through [`PRESSURE_TABLE`] instead of the enum discriminants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PressureLevel {
    #[default]
    Normal,
    Warning,
    Critical,
}

pub const PRESSURE_TABLE: [(i32, PressureLevel); 3] = [
    (1, PressureLevel::Normal),
    (2, PressureLevel::Warning),
    (4, PressureLevel::Critical),
];

impl PressureLevel {
    pub fn from_raw(raw: i32) -> Self {
        PRESSURE_TABLE
            .iter()
            .find(|(value, _)| *value == raw)
            .map(|(_, level)| *level)
            .unwrap_or(PressureLevel::Normal)
    }

    pub fn label(self) -> &'static str {
        match self {
            PressureLevel::Normal => "Normal",
            PressureLevel::Warning => "Warning",
            PressureLevel::Critical => "Critical",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SwapStats {
    pub total: u64,
    pub used: u64,
}

impl SwapStats {
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// `total == 0` is the "no swap configured" sentinel, not an empty swap.
    pub fn is_available(&self) -> bool {
        self.total > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessEntry {
    pub name: String,
    pub resident_kb: u64,
}

/// Cumulative CPU tick counters since boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub system: u64,
    pub idle: u64,
    pub nice: u64,
}

impl CpuTicks {
    pub fn new(user: u64, system: u64, idle: u64, nice: u64) -> Self {
        Self {
            user,
            system,
            idle,
            nice,
        }
    }

    pub fn total(&self) -> u128 {
        self.active() + self.idle as u128
    }

    pub fn active(&self) -> u128 {
        self.user as u128 + self.system as u128 + self.nice as u128
    }
}

/// One tick's worth of readings. Never mutated after the sampler builds it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub memory: MemoryStats,
    pub pressure: PressureLevel,
    pub cpu_percent: f64,
    pub swap: SwapStats,
    pub top_processes: Vec<ProcessEntry>,
}

impl MetricSnapshot {
    pub fn new(
        memory: MemoryStats,
        pressure: PressureLevel,
        cpu_percent: f64,
        swap: SwapStats,
        top_processes: Vec<ProcessEntry>,
    ) -> Self {
        let cpu_percent = if cpu_percent.is_nan() {
            0.0
        } else {
            cpu_percent.clamp(0.0, 100.0)
        };
        Self {
            memory,
            pressure,
            cpu_percent,
            swap,
            top_processes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_is_active_wired_compressed() {
        let mem = MemoryStats::new(
            16_000_000_000,
            1_000_000_000,
            4_000_000_000,
            3_000_000_000,
            2_000_000_000,
            1_000_000_000,
        );
        assert_eq!(mem.used, 7_000_000_000);
        assert!((mem.used_percentage() - 43.75).abs() < 1e-9);
    }

    #[test]
    fn zero_total_reads_as_zero_percent() {
        let mem = MemoryStats::new(0, 0, 10, 0, 10, 10);
        assert_eq!(mem.used_percentage(), 0.0);
        assert_eq!(MemoryStats::zeroed().used_percentage(), 0.0);
    }

    #[test]
    fn from_vm_multiplies_pages() {
        let vm = VmStatistics {
            active: 10,
            inactive: 5,
            wired: 2,
            compressor_pages: 3,
            free_pages: 7,
            page_size: 4096,
            total_physical: 1 << 30,
        };
        let mem = MemoryStats::from_vm(&vm);
        assert_eq!(mem.active, 40_960);
        assert_eq!(mem.compressed, 12_288);
        assert_eq!(mem.used, 15 * 4096);
        assert_eq!(mem.free, 7 * 4096);
        assert_eq!(mem.total, 1 << 30);
    }

    #[test]
    fn pressure_lookup_is_sparse() {
        assert_eq!(PressureLevel::from_raw(1), PressureLevel::Normal);
        assert_eq!(PressureLevel::from_raw(2), PressureLevel::Warning);
        assert_eq!(PressureLevel::from_raw(4), PressureLevel::Critical);
        // 3 sits between two real values but is not one of them
        assert_eq!(PressureLevel::from_raw(3), PressureLevel::Normal);
        assert_eq!(PressureLevel::from_raw(0), PressureLevel::Normal);
        assert_eq!(PressureLevel::from_raw(-1), PressureLevel::Normal);
    }

    #[test]
    fn swap_sentinel() {
        assert!(!SwapStats::unavailable().is_available());
        assert!(SwapStats { total: 1, used: 0 }.is_available());
    }

    #[test]
    fn snapshot_clamps_cpu() {
        let snap = MetricSnapshot::new(
            MemoryStats::zeroed(),
            PressureLevel::Normal,
            140.0,
            SwapStats::unavailable(),
            Vec::new(),
        );
        assert_eq!(snap.cpu_percent, 100.0);
        let snap = MetricSnapshot::new(
            MemoryStats::zeroed(),
            PressureLevel::Normal,
            f64::NAN,
            SwapStats::unavailable(),
            Vec::new(),
        );
        assert_eq!(snap.cpu_percent, 0.0);
    }
}
