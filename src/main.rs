use anyhow::Result;
use clap::Parser;
use hostprobe::{cli::Cli, os, render, report::MachineFacts};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Non-Linux hosts get one diagnostic line and a failure code, no record.
    if let Err(err) = os::ensure_supported() {
        println!("{err}");
        std::process::exit(1);
    }

    let facts = MachineFacts::collect();

    // A failed write to stdout is fatal and unrecoverable; the io::Error
    // propagates and the process exits non-zero.
    let stdout = std::io::stdout();
    let mut printer = render::printer_for(args.format, stdout.lock());
    facts.render(printer.as_mut())?;

    Ok(())
}
