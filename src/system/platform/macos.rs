#![allow(deprecated)] // libc marks the mach host calls deprecated in favor of mach2

use std::mem;

use super::PlatformReadings;
use crate::system::snapshot::{CpuTicks, VmStatistics};

pub struct Platform;

impl PlatformReadings for Platform {
    fn vm_statistics() -> Option<VmStatistics> {
        let mut info: libc::vm_statistics64 = unsafe { mem::zeroed() };
        let mut count = libc::HOST_VM_INFO64_COUNT;
        let status = unsafe {
            libc::host_statistics64(
                libc::mach_host_self(),
                libc::HOST_VM_INFO64,
                &mut info as *mut libc::vm_statistics64 as libc::host_info64_t,
                &mut count,
            )
        };
        if status != libc::KERN_SUCCESS {
            return None;
        }

        let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        Some(VmStatistics {
            active: info.active_count as u64,
            inactive: info.inactive_count as u64,
            wired: info.wire_count as u64,
            compressor_pages: info.compressor_page_count as u64,
            free_pages: info.free_count as u64,
            page_size: if page_size > 0 { page_size as u64 } else { 16384 },
            // filled in by the collector from hw.memsize
            total_physical: 0,
        })
    }

    fn cpu_ticks() -> Option<CpuTicks> {
        let mut info: libc::host_cpu_load_info = unsafe { mem::zeroed() };
        let mut count = libc::HOST_CPU_LOAD_INFO_COUNT;
        let status = unsafe {
            libc::host_statistics(
                libc::mach_host_self(),
                libc::HOST_CPU_LOAD_INFO,
                &mut info as *mut libc::host_cpu_load_info as libc::host_info_t,
                &mut count,
            )
        };
        if status != libc::KERN_SUCCESS {
            return None;
        }

        let ticks = info.cpu_ticks;
        Some(CpuTicks {
            user: ticks[libc::CPU_STATE_USER as usize] as u64,
            system: ticks[libc::CPU_STATE_SYSTEM as usize] as u64,
            idle: ticks[libc::CPU_STATE_IDLE as usize] as u64,
            nice: ticks[libc::CPU_STATE_NICE as usize] as u64,
        })
    }

    fn pressure_raw() -> Option<i32> {
        let mut level: libc::c_int = 0;
        let mut size = mem::size_of::<libc::c_int>();
        let status = unsafe {
            libc::sysctlbyname(
                c"kern.memorystatus_vm_pressure_level".as_ptr(),
                &mut level as *mut libc::c_int as *mut libc::c_void,
                &mut size,
                std::ptr::null_mut(),
                0,
            )
        };
        (status == 0).then_some(level)
    }
}
