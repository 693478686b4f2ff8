//! Writes `vdtMath_signatures.cc`, the element-wise vector wrappers around
//! the vdt scalar math functions.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate the vector function signatures of vdt
#[derive(Parser, Debug)]
#[command(name = "vdt-signatures")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Create symbols for the preload
    #[arg(
        short,
        long,
        env = "VDT_PRELOAD",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    preload: bool,

    /// Output directory
    #[arg(short, long, default_value = "./", env = "VDT_OUTDIR")]
    outdir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    vdt_codegen::write_unit(args.preload, &args.outdir).with_context(|| {
        format!(
            "failed to generate {} in {}",
            vdt_codegen::VECTOR_IMPL,
            args.outdir.display()
        )
    })?;

    Ok(())
}
