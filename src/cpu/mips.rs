//! MIPS backend: feature bits from the Linux auxiliary vector
//!
//! Bit values from arch/mips/include/uapi/asm/hwcap.h.

use super::HwcapWord;

/// Feature name table; positionally parallel to `HWCAP_BITS`
pub const FEATURE_NAMES: &[&str] = &[
    "r6", "msa", "crc32", "mips16", "mdmx", "mips3d", "smartmips", "dsp", "dsp2", "dsp3",
];

/// Auxiliary-vector word and mask for each feature index
pub const HWCAP_BITS: &[(HwcapWord, u64)] = &[
    (HwcapWord::Hwcap, 1 << 0), // r6
    (HwcapWord::Hwcap, 1 << 1), // msa
    (HwcapWord::Hwcap, 1 << 2), // crc32
    (HwcapWord::Hwcap, 1 << 3), // mips16
    (HwcapWord::Hwcap, 1 << 4), // mdmx
    (HwcapWord::Hwcap, 1 << 5), // mips3d
    (HwcapWord::Hwcap, 1 << 6), // smartmips
    (HwcapWord::Hwcap, 1 << 7), // dsp
    (HwcapWord::Hwcap, 1 << 8), // dsp2
    (HwcapWord::Hwcap, 1 << 9), // dsp3
];

/// Probe the host via the auxiliary vector
#[cfg(any(target_arch = "mips", target_arch = "mips64"))]
pub fn detect() -> super::CpuInfo {
    let (hwcap, hwcap2) = super::read_hwcap();
    super::CpuInfo {
        features: super::features_from_hwcap(HWCAP_BITS, hwcap, hwcap2),
        uarch: String::new(),
        brand: String::new(),
    }
}
