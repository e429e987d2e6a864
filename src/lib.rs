//! hostprobe - host CPU and kernel prober for remote build services
//!
//! This library collects the facts a remote compilation service needs to
//! cross-compile for this host: target triple, kernel release, CPU
//! architecture, microarchitecture, brand string, and the supported
//! instruction-set extensions, rendered as one deterministic record.

pub mod arch;
pub mod cli;
pub mod cpu;
pub mod features;
pub mod os;
pub mod render;
pub mod report;
