//! PowerPC backend: feature bits from the Linux auxiliary vector
//!
//! Bit values from arch/powerpc/include/uapi/asm/cputable.h
//! (PPC_FEATURE_* and PPC_FEATURE2_*).

use super::HwcapWord;

/// Feature name table; positionally parallel to `HWCAP_BITS`
pub const FEATURE_NAMES: &[&str] = &[
    "altivec", "fpu", "mmu", "spe", "dfp", "arch_2_06", "vsx", "arch_2_07", "htm", "dscr", "ebb",
    "isel", "tar", "vcrypto", "arch_3_00", "ieee128", "darn", "scv", "arch_3_1", "mma",
];

/// Auxiliary-vector word and mask for each feature index
pub const HWCAP_BITS: &[(HwcapWord, u64)] = &[
    (HwcapWord::Hwcap, 0x1000_0000),  // altivec
    (HwcapWord::Hwcap, 0x0800_0000),  // fpu
    (HwcapWord::Hwcap, 0x0400_0000),  // mmu
    (HwcapWord::Hwcap, 0x0080_0000),  // spe
    (HwcapWord::Hwcap, 0x0000_0400),  // dfp
    (HwcapWord::Hwcap, 0x0000_0100),  // arch_2_06
    (HwcapWord::Hwcap, 0x0000_0080),  // vsx
    (HwcapWord::Hwcap2, 0x8000_0000), // arch_2_07
    (HwcapWord::Hwcap2, 0x4000_0000), // htm
    (HwcapWord::Hwcap2, 0x2000_0000), // dscr
    (HwcapWord::Hwcap2, 0x1000_0000), // ebb
    (HwcapWord::Hwcap2, 0x0800_0000), // isel
    (HwcapWord::Hwcap2, 0x0400_0000), // tar
    (HwcapWord::Hwcap2, 0x0200_0000), // vcrypto
    (HwcapWord::Hwcap2, 0x0080_0000), // arch_3_00
    (HwcapWord::Hwcap2, 0x0040_0000), // ieee128
    (HwcapWord::Hwcap2, 0x0020_0000), // darn
    (HwcapWord::Hwcap2, 0x0010_0000), // scv
    (HwcapWord::Hwcap2, 0x0004_0000), // arch_3_1
    (HwcapWord::Hwcap2, 0x0002_0000), // mma
];

/// Probe the host via the auxiliary vector
#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
pub fn detect() -> super::CpuInfo {
    let (hwcap, hwcap2) = super::read_hwcap();
    super::CpuInfo {
        features: super::features_from_hwcap(HWCAP_BITS, hwcap, hwcap2),
        uarch: String::new(),
        brand: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::features_from_hwcap;
    use crate::features::enumerate;

    #[test]
    fn test_tables_are_parallel() {
        assert_eq!(FEATURE_NAMES.len(), HWCAP_BITS.len());
    }

    #[test]
    fn test_power9_style_caps() {
        let set = features_from_hwcap(HWCAP_BITS, 0x1000_0000 | 0x0000_0080, 0x0080_0000);
        let found = enumerate(&set, FEATURE_NAMES);
        assert!(found.contains(&"altivec"));
        assert!(found.contains(&"vsx"));
        assert!(found.contains(&"arch_3_00"));
        assert_eq!(found.len(), 3);
    }
}
