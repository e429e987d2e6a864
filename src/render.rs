//! Output rendering: a small printer capability set with text and JSON
//! variants, driven identically by the assembler

use std::io::{self, Write};

use crate::cli::OutputFormat;

/// Printer capability set
///
/// One session brackets exactly one record between `start` and `end`. The
/// caller owns separator placement: `field_end` is not called after the final
/// field, and `array_separator` is only called between elements, so the JSON
/// variant never emits a trailing comma.
pub trait Printer {
    fn start(&mut self) -> io::Result<()>;
    fn end(&mut self) -> io::Result<()>;
    fn field_start(&mut self, name: &str) -> io::Result<()>;
    fn field_end(&mut self) -> io::Result<()>;
    fn array_start(&mut self) -> io::Result<()>;
    fn array_separator(&mut self) -> io::Result<()>;
    fn array_end(&mut self) -> io::Result<()>;
    fn emit_str(&mut self, value: &str) -> io::Result<()>;
    fn emit_int(&mut self, value: i64) -> io::Result<()>;
}

/// Construct the printer for the requested output format
pub fn printer_for<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn Printer> {
    match format {
        OutputFormat::Text => Box::new(TextPrinter::new(out)),
        OutputFormat::Json => Box::new(JsonPrinter::new(out)),
    }
}

/// Compact single-object JSON printer
///
/// Intentionally minimal: it renders exactly one flat record and is not a
/// general JSON serializer.
#[derive(Debug)]
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write_escaped(&mut self, value: &str) -> io::Result<()> {
        self.out.write_all(b"\"")?;
        for ch in value.chars() {
            match ch {
                '"' => self.out.write_all(b"\\\"")?,
                '\\' => self.out.write_all(b"\\\\")?,
                '/' => self.out.write_all(b"\\/")?,
                '\u{0008}' => self.out.write_all(b"\\b")?,
                '\u{000C}' => self.out.write_all(b"\\f")?,
                '\n' => self.out.write_all(b"\\n")?,
                '\r' => self.out.write_all(b"\\r")?,
                '\t' => self.out.write_all(b"\\t")?,
                c if (c as u32) < 0x20 => write!(self.out, "\\u{:04x}", c as u32)?,
                c => write!(self.out, "{c}")?,
            }
        }
        self.out.write_all(b"\"")
    }
}

impl<W: Write> Printer for JsonPrinter<W> {
    fn start(&mut self) -> io::Result<()> {
        self.out.write_all(b"{")
    }

    fn end(&mut self) -> io::Result<()> {
        self.out.write_all(b"}\n")
    }

    fn field_start(&mut self, name: &str) -> io::Result<()> {
        self.write_escaped(name)?;
        self.out.write_all(b":")
    }

    fn field_end(&mut self) -> io::Result<()> {
        self.out.write_all(b",")
    }

    fn array_start(&mut self) -> io::Result<()> {
        self.out.write_all(b"[")
    }

    fn array_separator(&mut self) -> io::Result<()> {
        self.out.write_all(b",")
    }

    fn array_end(&mut self) -> io::Result<()> {
        self.out.write_all(b"]")
    }

    fn emit_str(&mut self, value: &str) -> io::Result<()> {
        self.write_escaped(value)
    }

    fn emit_int(&mut self, value: i64) -> io::Result<()> {
        write!(self.out, "{value}")
    }
}

/// Human-readable `name: value` printer
#[derive(Debug)]
pub struct TextPrinter<W: Write> {
    out: W,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Printer for TextPrinter<W> {
    fn start(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        // Closes the final field's line; earlier lines end via field_end.
        self.out.write_all(b"\n")
    }

    fn field_start(&mut self, name: &str) -> io::Result<()> {
        write!(self.out, "{name}: ")
    }

    fn field_end(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }

    fn array_start(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn array_separator(&mut self) -> io::Result<()> {
        self.out.write_all(b",")
    }

    fn array_end(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn emit_str(&mut self, value: &str) -> io::Result<()> {
        self.out.write_all(value.as_bytes())
    }

    fn emit_int(&mut self, value: i64) -> io::Result<()> {
        write!(self.out, "{value}")
    }
}
