//! 32-bit ARM backend: feature bits from the Linux auxiliary vector
//!
//! Bit values from arch/arm/include/uapi/asm/hwcap.h; crypto extensions
//! live in HWCAP2.

use super::HwcapWord;

/// Feature name table; positionally parallel to `HWCAP_BITS`
pub const FEATURE_NAMES: &[&str] = &[
    "swp", "half", "thumb", "fastmult", "vfp", "edsp", "thumbee", "neon", "vfpv3", "vfpv3d16",
    "tls", "vfpv4", "idiva", "idivt", "vfpd32", "lpae", "evtstrm", "aes", "pmull", "sha1", "sha2",
    "crc32",
];

/// Auxiliary-vector word and mask for each feature index
pub const HWCAP_BITS: &[(HwcapWord, u64)] = &[
    (HwcapWord::Hwcap, 1 << 0),  // swp
    (HwcapWord::Hwcap, 1 << 1),  // half
    (HwcapWord::Hwcap, 1 << 2),  // thumb
    (HwcapWord::Hwcap, 1 << 4),  // fastmult
    (HwcapWord::Hwcap, 1 << 6),  // vfp
    (HwcapWord::Hwcap, 1 << 7),  // edsp
    (HwcapWord::Hwcap, 1 << 11), // thumbee
    (HwcapWord::Hwcap, 1 << 12), // neon
    (HwcapWord::Hwcap, 1 << 13), // vfpv3
    (HwcapWord::Hwcap, 1 << 14), // vfpv3d16
    (HwcapWord::Hwcap, 1 << 15), // tls
    (HwcapWord::Hwcap, 1 << 16), // vfpv4
    (HwcapWord::Hwcap, 1 << 17), // idiva
    (HwcapWord::Hwcap, 1 << 18), // idivt
    (HwcapWord::Hwcap, 1 << 19), // vfpd32
    (HwcapWord::Hwcap, 1 << 20), // lpae
    (HwcapWord::Hwcap, 1 << 21), // evtstrm
    (HwcapWord::Hwcap2, 1 << 0), // aes
    (HwcapWord::Hwcap2, 1 << 1), // pmull
    (HwcapWord::Hwcap2, 1 << 2), // sha1
    (HwcapWord::Hwcap2, 1 << 3), // sha2
    (HwcapWord::Hwcap2, 1 << 4), // crc32
];

/// Probe the host via the auxiliary vector
#[cfg(target_arch = "arm")]
pub fn detect() -> super::CpuInfo {
    let (hwcap, hwcap2) = super::read_hwcap();
    super::CpuInfo {
        features: super::features_from_hwcap(HWCAP_BITS, hwcap, hwcap2),
        uarch: String::new(),
        brand: String::new(),
    }
}
