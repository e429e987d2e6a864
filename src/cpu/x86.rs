//! x86/x86_64 backend: CPUID-based feature bits, microarchitecture name,
//! and processor brand string

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use super::CpuInfo;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::features::FeatureSet;

/// Feature name table; index order matches the probe order in `detect`
pub const FEATURE_NAMES: &[&str] = &[
    "sse",
    "sse2",
    "sse3",
    "ssse3",
    "sse4_1",
    "sse4_2",
    "popcnt",
    "aes",
    "avx",
    "f16c",
    "fma3",
    "pclmulqdq",
    "movbe",
    "rdrnd",
    "cx16",
    "cmov",
    "bmi1",
    "bmi2",
    "avx2",
    "erms",
    "sha",
    "rdseed",
    "adx",
    "avx512f",
    "avx512dq",
    "avx512cd",
    "avx512bw",
    "avx512vl",
    "vaes",
    "vpclmulqdq",
];

/// Probe the host via CPUID
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn detect() -> CpuInfo {
    use raw_cpuid::{CpuId, ExtendedFeatures, FeatureInfo};

    let cpuid = CpuId::new();
    let info = cpuid.get_feature_info();
    let ext = cpuid.get_extended_feature_info();

    let base = |probe: fn(&FeatureInfo) -> bool| info.as_ref().is_some_and(probe);
    let leaf7 = |probe: fn(&ExtendedFeatures) -> bool| ext.as_ref().is_some_and(probe);

    // Positionally parallel to FEATURE_NAMES.
    let present = [
        base(FeatureInfo::has_sse),
        base(FeatureInfo::has_sse2),
        base(FeatureInfo::has_sse3),
        base(FeatureInfo::has_ssse3),
        base(FeatureInfo::has_sse41),
        base(FeatureInfo::has_sse42),
        base(FeatureInfo::has_popcnt),
        base(FeatureInfo::has_aesni),
        base(FeatureInfo::has_avx),
        base(FeatureInfo::has_f16c),
        base(FeatureInfo::has_fma),
        base(FeatureInfo::has_pclmulqdq),
        base(FeatureInfo::has_movbe),
        base(FeatureInfo::has_rdrand),
        base(FeatureInfo::has_cmpxchg16b),
        base(FeatureInfo::has_cmov),
        leaf7(ExtendedFeatures::has_bmi1),
        leaf7(ExtendedFeatures::has_bmi2),
        leaf7(ExtendedFeatures::has_avx2),
        leaf7(ExtendedFeatures::has_rep_movsb_stosb),
        leaf7(ExtendedFeatures::has_sha),
        leaf7(ExtendedFeatures::has_rdseed),
        leaf7(ExtendedFeatures::has_adx),
        leaf7(ExtendedFeatures::has_avx512f),
        leaf7(ExtendedFeatures::has_avx512dq),
        leaf7(ExtendedFeatures::has_avx512cd),
        leaf7(ExtendedFeatures::has_avx512bw),
        leaf7(ExtendedFeatures::has_avx512vl),
        leaf7(ExtendedFeatures::has_vaes),
        leaf7(ExtendedFeatures::has_vpclmulqdq),
    ];
    debug_assert_eq!(present.len(), FEATURE_NAMES.len());

    let mut features = FeatureSet::empty();
    for (index, ok) in present.iter().enumerate() {
        if *ok {
            features.set(index);
        }
    }

    let vendor = cpuid.get_vendor_info();
    let vendor_name = vendor.as_ref().map_or("", |v| v.as_str());

    let (family, model) = info.as_ref().map_or((0, 0), |f| {
        combine_family_model(
            u32::from(f.base_family_id()),
            u32::from(f.extended_family_id()),
            u32::from(f.base_model_id()),
            u32::from(f.extended_model_id()),
        )
    });

    let brand = cpuid
        .get_processor_brand_string()
        .map(|b| b.as_str().trim().to_string())
        .unwrap_or_default();

    CpuInfo {
        features,
        uarch: microarchitecture(vendor_name, family, model).to_string(),
        brand,
    }
}

/// Combine base and extended family/model fields into display values
///
/// The extended family is additive and only applies when the base family is
/// 0xF; the extended model extends families 6 and 0xF.
pub fn combine_family_model(
    base_family: u32,
    ext_family: u32,
    base_model: u32,
    ext_model: u32,
) -> (u32, u32) {
    let family = if base_family == 0xF {
        base_family + ext_family
    } else {
        base_family
    };
    let model = if base_family == 0x6 || base_family == 0xF {
        (ext_model << 4) + base_model
    } else {
        base_model
    };
    (family, model)
}

/// Map vendor/family/model to a microarchitecture name
///
/// Coarse mapping; families or models outside the table report "unknown".
pub fn microarchitecture(vendor: &str, family: u32, model: u32) -> &'static str {
    match (vendor, family) {
        ("GenuineIntel", 0x6) => match model {
            0x1A | 0x1E | 0x1F | 0x2E => "nehalem",
            0x25 | 0x2C | 0x2F => "westmere",
            0x2A | 0x2D => "sandybridge",
            0x3A | 0x3E => "ivybridge",
            0x3C | 0x3F | 0x45 | 0x46 => "haswell",
            0x3D | 0x47 | 0x4F | 0x56 => "broadwell",
            0x4E | 0x55 | 0x5E => "skylake",
            0x8E | 0x9E => "kabylake",
            0xA5 | 0xA6 => "cometlake",
            0x66 => "cannonlake",
            0x6A | 0x6C | 0x7D | 0x7E => "icelake",
            0x8C | 0x8D => "tigerlake",
            0xA7 => "rocketlake",
            0x8F => "sapphirerapids",
            0x97 | 0x9A | 0xBE => "alderlake",
            0xB7 | 0xBA | 0xBF => "raptorlake",
            _ => "unknown",
        },
        ("AuthenticAMD", 0x15) => "bulldozer",
        ("AuthenticAMD", 0x16) => "jaguar",
        ("AuthenticAMD", 0x17) => {
            if model >= 0x30 {
                "zen2"
            } else {
                "zen"
            }
        }
        ("AuthenticAMD", 0x19) => "zen3",
        ("AuthenticAMD", 0x1A) => "zen5",
        _ => "unknown",
    }
}
