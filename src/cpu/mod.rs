//! CPU introspection collaborator
//!
//! One backend per supported architecture: CPUID on x86/x86_64, the Linux
//! auxiliary vector (AT_HWCAP/AT_HWCAP2) everywhere else. Feature name tables
//! compile on every host so the enumeration and rendering paths are testable
//! regardless of the build target; only the probing entry points are gated on
//! `target_arch`.

pub mod aarch64;
pub mod arm;
pub mod mips;
pub mod ppc;
pub mod x86;

use crate::arch::Arch;
use crate::features::FeatureSet;

/// Result of probing the host CPU
///
/// `uarch` and `brand` are empty on architectures whose backend cannot
/// resolve them (everything except x86 today, as in the original prober).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuInfo {
    pub features: FeatureSet,
    pub uarch: String,
    pub brand: String,
}

/// Probe the host CPU
///
/// Unrecognized architectures return an empty `CpuInfo`; the assembler
/// reports the condition, not this module.
pub fn detect() -> CpuInfo {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        x86::detect()
    }
    #[cfg(target_arch = "arm")]
    {
        arm::detect()
    }
    #[cfg(target_arch = "aarch64")]
    {
        aarch64::detect()
    }
    #[cfg(any(target_arch = "mips", target_arch = "mips64"))]
    {
        mips::detect()
    }
    #[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
    {
        ppc::detect()
    }
    #[cfg(not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "powerpc",
        target_arch = "powerpc64",
    )))]
    {
        CpuInfo::default()
    }
}

/// Feature name table (index -> name) for an architecture
pub fn feature_names(arch: Arch) -> &'static [&'static str] {
    match arch {
        Arch::X86 => x86::FEATURE_NAMES,
        Arch::Arm => arm::FEATURE_NAMES,
        Arch::Aarch64 => aarch64::FEATURE_NAMES,
        Arch::Mips => mips::FEATURE_NAMES,
        Arch::Ppc => ppc::FEATURE_NAMES,
    }
}

/// Which auxiliary-vector word a feature bit lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwcapWord {
    /// AT_HWCAP
    Hwcap,
    /// AT_HWCAP2
    Hwcap2,
}

/// Translate raw hwcap words into a `FeatureSet`
///
/// `bits` is positionally parallel to the architecture's feature name table.
pub fn features_from_hwcap(bits: &[(HwcapWord, u64)], hwcap: u64, hwcap2: u64) -> FeatureSet {
    let mut set = FeatureSet::empty();
    for (index, (word, mask)) in bits.iter().enumerate() {
        let value = match word {
            HwcapWord::Hwcap => hwcap,
            HwcapWord::Hwcap2 => hwcap2,
        };
        if value & mask != 0 {
            set.set(index);
        }
    }
    set
}

/// Read AT_HWCAP and AT_HWCAP2 from the auxiliary vector
#[cfg(all(
    target_os = "linux",
    any(
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "powerpc",
        target_arch = "powerpc64",
    )
))]
pub(crate) fn read_hwcap() -> (u64, u64) {
    // getauxval returns 0 for keys absent from the aux vector.
    unsafe {
        (
            libc::getauxval(libc::AT_HWCAP) as u64,
            libc::getauxval(libc::AT_HWCAP2) as u64,
        )
    }
}
