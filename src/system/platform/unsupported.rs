use super::PlatformReadings;
use crate::system::snapshot::{CpuTicks, VmStatistics};

pub struct Platform;

impl PlatformReadings for Platform {
    fn vm_statistics() -> Option<VmStatistics> {
        None
    }

    fn cpu_ticks() -> Option<CpuTicks> {
        None
    }

    fn pressure_raw() -> Option<i32> {
        None
    }
}
