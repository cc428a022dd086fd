pub mod collector;
pub mod cpu;
pub mod history;
pub mod platform;
pub mod process;
pub mod sampler;
pub mod snapshot;
pub mod source;
