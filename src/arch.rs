//! Architecture tag for the closed set of supported CPU families

use std::fmt;

/// CPU architecture discriminant
///
/// Closed enumeration; feature name tables and detection backends are keyed
/// on this tag. `X86` covers both 32-bit x86 and x86_64 hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    Arm,
    Aarch64,
    Mips,
    Ppc,
}

impl Arch {
    /// Resolve the architecture tag for the running host
    ///
    /// Returns `None` on architectures outside the supported set (the caller
    /// renders an empty flag list rather than failing).
    pub fn host() -> Option<Arch> {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            Some(Arch::X86)
        }
        #[cfg(target_arch = "arm")]
        {
            Some(Arch::Arm)
        }
        #[cfg(target_arch = "aarch64")]
        {
            Some(Arch::Aarch64)
        }
        #[cfg(any(target_arch = "mips", target_arch = "mips64"))]
        {
            Some(Arch::Mips)
        }
        #[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
        {
            Some(Arch::Ppc)
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
            None
        }
    }

    /// Stable lowercase name used in the output record
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::Arm => "arm",
            Arch::Aarch64 => "aarch64",
            Arch::Mips => "mips",
            Arch::Ppc => "ppc",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
