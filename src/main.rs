use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use ncgr_png::export::{export, ExportConfig};
use ncgr_png::{Converter, Rgb};

/// Convert an NCGR sprite and its NCLR palette into a PNG
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// NCGR tile graphics file
    #[arg(long)]
    ncgr: Option<PathBuf>,

    /// NCLR palette file
    #[arg(long)]
    nclr: Option<PathBuf>,

    /// Output PNG (defaults to the NCGR path with a .png extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recompress the PNG with oxipng
    #[arg(long)]
    optimise: bool,

    /// Fill transparent pixels with this colour (RRGGBB) instead of writing alpha
    #[arg(long)]
    background: Option<Rgb>,

    /// Write a JSON sidecar describing the sprite
    #[arg(long)]
    metadata: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();

    let mut converter = Converter::new();
    if let Some(path) = &args.ncgr {
        converter = converter.ncgr(path);
    }
    if let Some(path) = &args.nclr {
        converter = converter.nclr(path);
    }

    let conversion = match converter.run() {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = args
        .output
        .clone()
        .or_else(|| args.ncgr.as_ref().map(|ncgr| ncgr.with_extension("png")));
    let Some(output) = output else {
        eprintln!("No output path given");
        return ExitCode::FAILURE;
    };

    let config = ExportConfig {
        optimise: args.optimise,
        background: args.background,
        write_metadata: args.metadata,
    };

    if let Err(e) = export(&conversion, &output, &config) {
        eprintln!("Failed to write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }

    println!(
        "Saved {}x{} sprite to {}",
        conversion.grid.width(),
        conversion.grid.height(),
        output.display()
    );
    ExitCode::SUCCESS
}
