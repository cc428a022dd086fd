//! Pure sparkline geometry: no terminal types, no host readings.

pub mod algorithm;
pub mod node;
