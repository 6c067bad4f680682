//! Argument groups shared across CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use comb_glass::{
    BoardConfiguration, DEFAULT_BOARD, DEFAULT_GLASS, GlassConfiguration, OutputFormat,
    PresetRegistry, Variant, VariantKind,
};

/// Extra preset files layered over the built-in table.
#[derive(Args, Debug, Clone, Default)]
pub struct PresetFiles {
    /// YAML file with additional boards/glasses (repeatable, later files win)
    #[arg(long = "presets", value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl PresetFiles {
    pub fn registry(&self) -> Result<PresetRegistry> {
        let mut registry = PresetRegistry::builtin();
        for path in &self.files {
            let extra = PresetRegistry::load(path)
                .with_context(|| format!("loading presets from {}", path.display()))?;
            tracing::debug!(
                path = %path.display(),
                boards = extra.boards.len(),
                glasses = extra.glasses.len(),
                "presets loaded"
            );
            registry = registry.merge(extra);
        }
        Ok(registry)
    }
}

/// Which board and glass to lay out.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Board preset name
    #[arg(short, long, default_value = DEFAULT_BOARD)]
    pub board: String,

    /// Glass preset name
    #[arg(short, long, default_value = DEFAULT_GLASS)]
    pub glass: String,

    #[command(flatten)]
    pub presets: PresetFiles,

    /// Override board width (mm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Override board height (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Override wall clearance (mm)
    #[arg(long)]
    pub wall_offset: Option<f64>,

    /// Override minimum gap between drilled holes (mm)
    #[arg(long)]
    pub min_hole_distance: Option<f64>,

    /// Override drilled hole radius (mm)
    #[arg(long)]
    pub inner_radius: Option<f64>,

    /// Override glass outer radius (mm)
    #[arg(long)]
    pub outer_radius: Option<f64>,

    /// Override number of glass sides (below 3 = round)
    #[arg(long)]
    pub sides: Option<u32>,
}

impl Selection {
    /// Look up both presets and apply the per-field overrides.
    pub fn resolve(&self) -> Result<(BoardConfiguration, GlassConfiguration)> {
        let registry = self.presets.registry()?;
        let mut board = registry.board(&self.board)?;
        let mut glass = registry.glass(&self.glass)?;

        board.width = self.width.unwrap_or(board.width);
        board.height = self.height.unwrap_or(board.height);
        board.wall_offset = self.wall_offset.unwrap_or(board.wall_offset);
        board.min_hole_distance = self.min_hole_distance.unwrap_or(board.min_hole_distance);
        glass.inner_radius = self.inner_radius.unwrap_or(glass.inner_radius);
        glass.outer_radius = self.outer_radius.unwrap_or(glass.outer_radius);
        glass.sides = self.sides.unwrap_or(glass.sides);

        Ok((board, glass))
    }

    /// Default file prefix: `<board>_<glass>`.
    pub fn default_prefix(&self) -> String {
        format!("{}_{}", self.board, self.glass)
    }
}

pub fn parse_format(name: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_name(name).ok_or_else(|| {
        let known: Vec<_> = OutputFormat::all().iter().map(|f| f.name()).collect();
        format!("unknown format '{}' (use {})", name, known.join(", "))
    })
}

pub fn parse_variant_kind(name: &str) -> Result<VariantKind, String> {
    VariantKind::from_name(name).ok_or_else(|| {
        let known: Vec<_> = VariantKind::all().iter().map(|k| k.name()).collect();
        format!("unknown variant '{}' (use {})", name, known.join(", "))
    })
}

/// Keep only the requested variants; an empty filter keeps everything.
pub fn filter_variants(variants: Vec<Variant>, only: &[VariantKind]) -> Vec<Variant> {
    if only.is_empty() {
        return variants;
    }
    variants.into_iter().filter(|v| only.contains(&v.kind)).collect()
}

/// `Square:    25` style count lines.
pub fn print_counts(variants: &[Variant]) {
    for v in variants {
        println!("{:<10}{}", format!("{}:", v.kind), v.hole_count());
    }
}
