//! Machine fact assembly: orchestrates the OS and CPU collaborators and
//! drives a printer through the fixed record schema

use std::io;

use tracing::warn;

use crate::arch::Arch;
use crate::cpu::{self, CpuInfo};
use crate::features;
use crate::os::{self, OsRelease};
use crate::render::Printer;

/// One immutable record describing the host
///
/// Constructed once per run, consumed exactly once by a printer. Field order
/// in `render` is the wire schema and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineFacts {
    pub arch: String,
    pub triple: String,
    pub kernel: String,
    pub uarch: String,
    pub brand: String,
    pub flags: Vec<String>,
}

impl MachineFacts {
    /// Build a record from collaborator outputs
    ///
    /// Pure; the flag list is sorted and deduplicated here so every output
    /// format renders identical bytes for identical hardware. A missing OS
    /// result substitutes "unknown" for triple and kernel; an unrecognized
    /// architecture yields "unknown" arch/uarch and an empty flag list.
    pub fn from_parts(arch: Option<Arch>, cpu: &CpuInfo, release: Option<&OsRelease>) -> Self {
        let mut flags: Vec<String> = match arch {
            Some(arch) => features::enumerate(&cpu.features, cpu::feature_names(arch))
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };
        features::sort_flags(&mut flags);

        let (triple, kernel) = match release {
            Some(r) => (os::target_triple(&r.machine), r.release.clone()),
            None => (os::UNKNOWN.to_string(), os::UNKNOWN.to_string()),
        };

        let uarch = if cpu.uarch.is_empty() && arch.is_none() {
            os::UNKNOWN.to_string()
        } else {
            cpu.uarch.clone()
        };

        MachineFacts {
            arch: arch.map_or_else(|| os::UNKNOWN.to_string(), |a| a.to_string()),
            triple,
            kernel,
            uarch,
            brand: cpu.brand.clone(),
            flags,
        }
    }

    /// Probe the host and assemble the record
    pub fn collect() -> Self {
        let arch = Arch::host();
        if arch.is_none() {
            warn!("unrecognized CPU architecture; feature flags unavailable");
        }

        let cpu = cpu::detect();
        let release = match os::query() {
            Ok(release) => Some(release),
            Err(err) => {
                warn!("OS query failed, reporting unknown triple/kernel: {err}");
                None
            }
        };

        Self::from_parts(arch, &cpu, release.as_ref())
    }

    /// Render the record through a printer
    ///
    /// Identical call sequence for every printer variant. The final field
    /// carries no `field_end` separator; comma placement is owned here, not
    /// by the JSON printer.
    pub fn render(&self, printer: &mut dyn Printer) -> io::Result<()> {
        printer.start()?;

        printer.field_start("arch")?;
        printer.emit_str(&self.arch)?;
        printer.field_end()?;

        printer.field_start("triple")?;
        printer.emit_str(&self.triple)?;
        printer.field_end()?;

        printer.field_start("kernel")?;
        printer.emit_str(&self.kernel)?;
        printer.field_end()?;

        printer.field_start("uarch")?;
        printer.emit_str(&self.uarch)?;
        printer.field_end()?;

        printer.field_start("brand")?;
        printer.emit_str(&self.brand)?;
        printer.field_end()?;

        printer.field_start("flags")?;
        printer.array_start()?;
        for (i, flag) in self.flags.iter().enumerate() {
            if i > 0 {
                printer.array_separator()?;
            }
            printer.emit_str(flag)?;
        }
        printer.array_end()?;

        printer.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureSet;
    use crate::render::{JsonPrinter, TextPrinter};

    fn x86_cpu_with(indices: &[usize]) -> CpuInfo {
        let mut features = FeatureSet::empty();
        for index in indices {
            features.set(*index);
        }
        CpuInfo {
            features,
            uarch: "skylake".to_string(),
            brand: "Test CPU".to_string(),
        }
    }

    fn index_of(name: &str) -> usize {
        crate::cpu::x86::FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .unwrap()
    }

    fn release() -> OsRelease {
        OsRelease {
            machine: "x86_64".to_string(),
            release: "5.15.0-generic".to_string(),
        }
    }

    #[test]
    fn test_flags_sorted_regardless_of_detection_order() {
        // sse2 sits after aes in table order? Either way the record sorts.
        let cpu = x86_cpu_with(&[index_of("sse2"), index_of("aes")]);
        let facts = MachineFacts::from_parts(Some(Arch::X86), &cpu, Some(&release()));
        assert_eq!(facts.flags, ["aes", "sse2"]);
    }

    #[test]
    fn test_json_end_to_end_record() {
        let cpu = x86_cpu_with(&[index_of("aes"), index_of("sse2")]);
        let facts = MachineFacts::from_parts(Some(Arch::X86), &cpu, Some(&release()));

        let mut buf = Vec::new();
        facts.render(&mut JsonPrinter::new(&mut buf)).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert_eq!(
            rendered,
            "{\"arch\":\"x86\",\"triple\":\"x86_64-linux-gnu\",\
             \"kernel\":\"5.15.0-generic\",\"uarch\":\"skylake\",\
             \"brand\":\"Test CPU\",\"flags\":[\"aes\",\"sse2\"]}\n"
        );

        // And it must be valid JSON with exactly the six schema keys.
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for key in ["arch", "triple", "kernel", "uarch", "brand", "flags"] {
            assert!(object.contains_key(key));
        }
        assert!(parsed["flags"].is_array());
    }

    #[test]
    fn test_text_end_to_end_record() {
        let cpu = x86_cpu_with(&[index_of("aes"), index_of("sse2")]);
        let facts = MachineFacts::from_parts(Some(Arch::X86), &cpu, Some(&release()));

        let mut buf = Vec::new();
        facts.render(&mut TextPrinter::new(&mut buf)).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert_eq!(
            rendered,
            "arch: x86\ntriple: x86_64-linux-gnu\nkernel: 5.15.0-generic\n\
             uarch: skylake\nbrand: Test CPU\nflags: aes,sse2\n"
        );
    }

    #[test]
    fn test_os_failure_falls_back_to_unknown() {
        let cpu = x86_cpu_with(&[index_of("aes")]);
        let facts = MachineFacts::from_parts(Some(Arch::X86), &cpu, None);
        assert_eq!(facts.triple, "unknown");
        assert_eq!(facts.kernel, "unknown");
        // Other fields populate normally.
        assert_eq!(facts.arch, "x86");
        assert_eq!(facts.flags, ["aes"]);
    }

    #[test]
    fn test_unrecognized_arch_yields_empty_flags() {
        let cpu = CpuInfo::default();
        let facts = MachineFacts::from_parts(None, &cpu, Some(&release()));
        assert_eq!(facts.arch, "unknown");
        assert_eq!(facts.uarch, "unknown");
        assert!(facts.flags.is_empty());

        // Still renders a well-formed record with an empty array.
        let mut buf = Vec::new();
        facts.render(&mut JsonPrinter::new(&mut buf)).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(parsed["flags"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_empty_flags_render_as_empty_array() {
        let cpu = x86_cpu_with(&[]);
        let facts = MachineFacts::from_parts(Some(Arch::X86), &cpu, Some(&release()));
        let mut buf = Vec::new();
        facts.render(&mut JsonPrinter::new(&mut buf)).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("\"flags\":[]"));
    }

    #[test]
    fn test_collect_produces_consistent_record() {
        let facts = MachineFacts::collect();
        assert!(!facts.arch.is_empty());
        let mut sorted = facts.flags.clone();
        crate::features::sort_flags(&mut sorted);
        assert_eq!(facts.flags, sorted);
    }
}
