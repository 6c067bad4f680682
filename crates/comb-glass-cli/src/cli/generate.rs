//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use comb_glass::{OutputFormat, RenderOptions, Theme, VariantKind, plan_variants, write_variant};

use super::common::{Selection, filter_variants, parse_format, parse_variant_kind, print_counts};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// File name prefix (default: <board>_<glass>)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Comma separated output formats: svg, pdf, png, txt, json
    #[arg(
        short,
        long = "format",
        value_delimiter = ',',
        default_value = "svg,pdf,txt",
        value_parser = parse_format
    )]
    pub formats: Vec<OutputFormat>,

    /// Only write these variants (repeatable): Square, HexOne, ...
    #[arg(long = "only", value_name = "VARIANT", value_parser = parse_variant_kind)]
    pub only: Vec<VariantKind>,

    /// YAML theme overriding colors and stroke widths
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,

    /// PNG preview resolution in pixels per millimeter
    #[arg(long, default_value_t = 4.0)]
    pub png_scale: f64,

    /// Keep writing the remaining outputs after a failure
    #[arg(long)]
    pub keep_going: bool,
}

/// Execute the generate command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let (board, glass) = args.selection.resolve()?;
    let prefix = args.prefix.clone().unwrap_or_else(|| args.selection.default_prefix());

    let theme = match &args.theme {
        Some(path) => Theme::load(path).with_context(|| format!("loading theme {}", path.display()))?,
        None => Theme::default(),
    };
    let options = RenderOptions { theme, png_pixels_per_mm: args.png_scale };

    tracing::info!(
        board = %args.selection.board,
        glass = %args.selection.glass,
        width = board.width,
        height = board.height,
        "generating"
    );

    let variants = filter_variants(plan_variants(&board, &glass), &args.only);
    if variants.is_empty() {
        let only: Vec<_> = args.only.iter().map(|k| k.name()).collect();
        bail!(
            "no variants left to write: {} not produced for a {}mm x {}mm board",
            only.join(", "),
            board.width,
            board.height
        );
    }
    print_counts(&variants);

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let total = variants.len() * args.formats.len();
    let mut failed = 0;

    for variant in &variants {
        for &format in &args.formats {
            match write_variant(&args.output, &prefix, variant, format, &options) {
                Ok(path) => tracing::info!("Wrote: {}", path.display()),
                Err(e) if args.keep_going => {
                    failed += 1;
                    tracing::error!(variant = %variant.kind, format = format.name(), "{}", e);
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("writing {} output for {}", format.name(), variant.kind)
                    });
                }
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} outputs failed", failed, total);
    }
    Ok(())
}
