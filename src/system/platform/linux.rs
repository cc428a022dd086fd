use super::PlatformReadings;
use crate::system::snapshot::{CpuTicks, VmStatistics};

const FALLBACK_PAGE_SIZE: u64 = 4096;

pub struct Platform;

impl PlatformReadings for Platform {
    fn vm_statistics() -> Option<VmStatistics> {
        let contents = std::fs::read_to_string("/proc/meminfo").ok()?;
        parse_meminfo(&contents, page_size())
    }

    fn cpu_ticks() -> Option<CpuTicks> {
        let contents = std::fs::read_to_string("/proc/stat").ok()?;
        parse_proc_stat(&contents)
    }

    fn pressure_raw() -> Option<i32> {
        // PSI is missing on kernels built without CONFIG_PSI
        let contents = std::fs::read_to_string("/proc/pressure/memory").ok()?;
        parse_psi_memory(&contents)
    }
}

fn page_size() -> u64 {
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 {
        size as u64
    } else {
        FALLBACK_PAGE_SIZE
    }
}

/// Maps `/proc/meminfo` (kB values) onto page counts.
///
/// wired = Unevictable + SUnreclaim + KernelStack + PageTables,
/// compressed = Zswap (absent on older kernels, read as 0).
fn parse_meminfo(contents: &str, page_size: u64) -> Option<VmStatistics> {
    let mut fields = std::collections::HashMap::new();
    for line in contents.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(kb) = rest.split_whitespace().next().and_then(|v| v.parse::<u64>().ok())
        else {
            continue;
        };
        fields.insert(key.trim(), kb);
    }

    let total_kb = *fields.get("MemTotal")?;
    let kb = |key: &str| fields.get(key).copied().unwrap_or(0);
    let pages = |kb: u64| kb.saturating_mul(1024) / page_size.max(1);

    Some(VmStatistics {
        active: pages(kb("Active")),
        inactive: pages(kb("Inactive")),
        wired: pages(
            kb("Unevictable") + kb("SUnreclaim") + kb("KernelStack") + kb("PageTables"),
        ),
        compressor_pages: pages(kb("Zswap")),
        free_pages: pages(kb("MemFree")),
        page_size,
        total_physical: total_kb.saturating_mul(1024),
    })
}

/// Reads the aggregate `cpu` line of `/proc/stat`.
///
/// irq and softirq count as system time, iowait as idle.
fn parse_proc_stat(contents: &str) -> Option<CpuTicks> {
    let line = contents
        .lines()
        .find(|l| l.split_whitespace().next() == Some("cpu"))?;
    let values: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map_while(|v| v.parse().ok())
        .collect();
    // user nice system idle [iowait irq softirq ...]
    if values.len() < 4 {
        return None;
    }
    let field = |i: usize| values.get(i).copied().unwrap_or(0);
    Some(CpuTicks {
        user: field(0),
        nice: field(1),
        system: field(2) + field(5) + field(6),
        idle: field(3) + field(4),
    })
}

/// Maps `some avg10` onto the host pressure scale: 1 normal, 2 warning, 4 critical.
fn parse_psi_memory(contents: &str) -> Option<i32> {
    let line = contents.lines().find(|l| l.starts_with("some"))?;
    let avg10 = line
        .split_whitespace()
        .find_map(|field| field.strip_prefix("avg10="))?
        .parse::<f64>()
        .ok()?;
    let raw = if avg10 < 10.0 {
        1
    } else if avg10 < 40.0 {
        2
    } else {
        4
    };
    Some(raw)
}
