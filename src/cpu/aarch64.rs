//! AArch64 backend: feature bits from the Linux auxiliary vector
//!
//! Names follow the kernel's /proc/cpuinfo "Features" line; bit values come
//! from arch/arm64/include/uapi/asm/hwcap.h.

use super::HwcapWord;

/// Feature name table; positionally parallel to `HWCAP_BITS`
pub const FEATURE_NAMES: &[&str] = &[
    "fp", "asimd", "evtstrm", "aes", "pmull", "sha1", "sha2", "crc32", "atomics", "fphp",
    "asimdhp", "cpuid", "asimdrdm", "jscvt", "fcma", "lrcpc", "dcpop", "sha3", "sm3", "sm4",
    "asimddp", "sha512", "sve", "asimdfhm", "dit", "uscat", "ilrcpc", "flagm", "ssbs", "sb",
    "paca", "pacg", "dcpodp", "sve2", "sveaes", "svepmull", "svebitperm", "svesha3", "svesm4",
    "flagm2", "frint", "i8mm", "bf16", "rng", "bti", "mte",
];

/// Auxiliary-vector word and mask for each feature index
pub const HWCAP_BITS: &[(HwcapWord, u64)] = &[
    (HwcapWord::Hwcap, 1 << 0),   // fp
    (HwcapWord::Hwcap, 1 << 1),   // asimd
    (HwcapWord::Hwcap, 1 << 2),   // evtstrm
    (HwcapWord::Hwcap, 1 << 3),   // aes
    (HwcapWord::Hwcap, 1 << 4),   // pmull
    (HwcapWord::Hwcap, 1 << 5),   // sha1
    (HwcapWord::Hwcap, 1 << 6),   // sha2
    (HwcapWord::Hwcap, 1 << 7),   // crc32
    (HwcapWord::Hwcap, 1 << 8),   // atomics
    (HwcapWord::Hwcap, 1 << 9),   // fphp
    (HwcapWord::Hwcap, 1 << 10),  // asimdhp
    (HwcapWord::Hwcap, 1 << 11),  // cpuid
    (HwcapWord::Hwcap, 1 << 12),  // asimdrdm
    (HwcapWord::Hwcap, 1 << 13),  // jscvt
    (HwcapWord::Hwcap, 1 << 14),  // fcma
    (HwcapWord::Hwcap, 1 << 15),  // lrcpc
    (HwcapWord::Hwcap, 1 << 16),  // dcpop
    (HwcapWord::Hwcap, 1 << 17),  // sha3
    (HwcapWord::Hwcap, 1 << 18),  // sm3
    (HwcapWord::Hwcap, 1 << 19),  // sm4
    (HwcapWord::Hwcap, 1 << 20),  // asimddp
    (HwcapWord::Hwcap, 1 << 21),  // sha512
    (HwcapWord::Hwcap, 1 << 22),  // sve
    (HwcapWord::Hwcap, 1 << 23),  // asimdfhm
    (HwcapWord::Hwcap, 1 << 24),  // dit
    (HwcapWord::Hwcap, 1 << 25),  // uscat
    (HwcapWord::Hwcap, 1 << 26),  // ilrcpc
    (HwcapWord::Hwcap, 1 << 27),  // flagm
    (HwcapWord::Hwcap, 1 << 28),  // ssbs
    (HwcapWord::Hwcap, 1 << 29),  // sb
    (HwcapWord::Hwcap, 1 << 30),  // paca
    (HwcapWord::Hwcap, 1 << 31),  // pacg
    (HwcapWord::Hwcap2, 1 << 0),  // dcpodp
    (HwcapWord::Hwcap2, 1 << 1),  // sve2
    (HwcapWord::Hwcap2, 1 << 2),  // sveaes
    (HwcapWord::Hwcap2, 1 << 3),  // svepmull
    (HwcapWord::Hwcap2, 1 << 4),  // svebitperm
    (HwcapWord::Hwcap2, 1 << 5),  // svesha3
    (HwcapWord::Hwcap2, 1 << 6),  // svesm4
    (HwcapWord::Hwcap2, 1 << 7),  // flagm2
    (HwcapWord::Hwcap2, 1 << 8),  // frint
    (HwcapWord::Hwcap2, 1 << 13), // i8mm
    (HwcapWord::Hwcap2, 1 << 14), // bf16
    (HwcapWord::Hwcap2, 1 << 16), // rng
    (HwcapWord::Hwcap2, 1 << 17), // bti
    (HwcapWord::Hwcap2, 1 << 18), // mte
];

/// Probe the host via the auxiliary vector
#[cfg(target_arch = "aarch64")]
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
    fn test_masks_are_nonzero() {
        assert!(HWCAP_BITS.iter().all(|(_, mask)| *mask != 0));
    }

    #[test]
    fn test_crypto_bits_map_to_names() {
        // aes | sha2 in HWCAP, sve2 in HWCAP2
        let set = features_from_hwcap(HWCAP_BITS, (1 << 3) | (1 << 6), 1 << 1);
        let mut found = enumerate(&set, FEATURE_NAMES);
        found.sort_unstable();
        assert_eq!(found, ["aes", "sha2", "sve2"]);
    }
}
