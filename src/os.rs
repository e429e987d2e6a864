//! OS introspection: uname-backed machine name, kernel release, and the
//! target-triple string handed to the remote build service

use thiserror::Error;

/// Literal substituted for triple/kernel when the uname query fails
pub const UNKNOWN: &str = "unknown";

/// OS collaborator failures
#[derive(Debug, Error)]
pub enum OsError {
    /// Raised at startup on non-Linux builds; the record schema assumes a
    /// Linux kernel and glibc userland.
    #[error("hostprobe: unsupported operating system (Linux required)")]
    Unsupported,

    /// uname(2) failure; recovered by the assembler with "unknown" fields
    #[error("uname query failed: {0}")]
    Uname(#[from] nix::Error),
}

/// Machine name and kernel release as reported by uname(2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsRelease {
    /// Hardware identifier, e.g. "x86_64"
    pub machine: String,
    /// Kernel release, e.g. "5.15.0-generic"
    pub release: String,
}

/// Reject hosts the record schema does not cover
pub fn ensure_supported() -> Result<(), OsError> {
    if cfg!(target_os = "linux") {
        Ok(())
    } else {
        Err(OsError::Unsupported)
    }
}

/// Query uname(2) for machine name and kernel release
pub fn query() -> Result<OsRelease, OsError> {
    let uts = nix::sys::utsname::uname()?;
    Ok(OsRelease {
        machine: uts.machine().to_string_lossy().into_owned(),
        release: uts.release().to_string_lossy().into_owned(),
    })
}

/// Format the target triple for a uname machine name
///
/// Vendor field intentionally absent; the consumer expects `<machine>-linux-gnu`.
pub fn target_triple(machine: &str) -> String {
    format!("{machine}-linux-gnu")
}
