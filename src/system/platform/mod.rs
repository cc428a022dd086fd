use super::snapshot::{CpuTicks, VmStatistics};

/// Raw host readings the collector cannot get from `sysinfo`.
///
/// `None` means the host call failed or the platform has no equivalent.
pub trait PlatformReadings {
    fn vm_statistics() -> Option<VmStatistics>;
    fn cpu_ticks() -> Option<CpuTicks>;
    fn pressure_raw() -> Option<i32>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod unsupported;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use unsupported as platform_impl;

pub fn vm_statistics() -> Option<VmStatistics> {
    platform_impl::Platform::vm_statistics()
}

pub fn cpu_ticks() -> Option<CpuTicks> {
    platform_impl::Platform::cpu_ticks()
}

pub fn pressure_raw() -> Option<i32> {
    platform_impl::Platform::pressure_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_do_not_panic() {
        let _ = vm_statistics();
        let _ = cpu_ticks();
        let _ = pressure_raw();
    }
}
