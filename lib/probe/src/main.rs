//! Kernel ABI Layout Prober
//!
//! Captures the layout of the kernel interfaces of one device family on the
//! architecture it was compiled for, and prints Go declarations reproducing
//! that layout byte for byte. Run once per architecture; the output of every
//! run is a complete, self-contained Go source file.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kabi_layout::{emit, layout, Options, Target};
use kabi_uapi::manifest::Family;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Device {
    /// ALSA PCM devices
    Alsa,
    /// Video for Linux devices
    V4l2,
}

impl From<Device> for Family {
    fn from(v: Device) -> Self {
        match v {
            Device::Alsa => Family::Alsa,
            Device::V4l2 => Family::V4l2,
        }
    }
}

#[derive(Parser)]
#[command(name = "kabi-probe")]
#[command(about = "Emit Go declarations of kernel ioctl structures for this architecture", long_about = None)]
#[command(version)]
struct Cli {
    /// Device family to probe
    #[arg(value_enum)]
    family: Device,

    /// Package name of the generated file
    #[arg(long, env = "KABI_PACKAGE", default_value = "device", value_parser = parse_package)]
    package: String,

    /// Write to this file instead of standard output
    #[arg(short, long, env = "KABI_OUTPUT")]
    output: Option<PathBuf>,

    /// Start the output with a build constraint for this architecture
    #[arg(long)]
    build_tag: bool,

    /// Declare constants with their fixed-width integer type
    #[arg(long)]
    typed_constants: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_package(v: &str) -> Result<String, String> {
    let mut chars = v.chars();
    let valid = match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };

    if valid && emit::field_name(v) == v && v != "_" {
        Ok(v.to_owned())
    } else {
        Err(format!("`{}` is not a valid package name", v))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let text = probe(&cli)?;

    match &cli.output {
        Some(path) => write_file(path, &text),
        None => std::io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("failed to write to standard output"),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("KABI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn probe(cli: &Cli) -> Result<String> {
    let family = Family::from(cli.family);
    let target = Target::native().with_context(|| {
        format!("no Go layout rules for `{}`", std::env::consts::ARCH)
    })?;

    tracing::info!(family = family.name(), goarch = target.goarch, "probing");

    let module = family.module(&cli.package);
    let resolved = layout::resolve(&module, &target).with_context(|| {
        format!("failed to resolve the {} layout for {}", family.name(), target.goarch)
    })?;

    let options = Options {
        build_tag: cli.build_tag,
        typed_constants: cli.typed_constants,
    };
    Ok(emit::render(&resolved, &options))
}

// Replace the file only once the complete text is written next to it.
fn write_file(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(v) if !v.as_os_str().is_empty() => v,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write {}", file.path().display()))?;
    file.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "written");
    Ok(())
}
