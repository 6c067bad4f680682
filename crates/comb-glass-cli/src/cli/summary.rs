//! Summary command: spacing and hole counts without writing files.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use comb_glass::{
    BoardConfiguration, GlassConfiguration, Spacing, VariantKind, plan_variants,
};

use super::common::{Selection, print_counts};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonCount {
    variant: VariantKind,
    holes: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    generated_at: String,
    board_name: String,
    glass_name: String,
    board: BoardConfiguration,
    glass: GlassConfiguration,
    spacing: Spacing,
    variants: Vec<JsonCount>,
}

/// Execute the summary command.
pub fn cmd_summary(args: SummaryArgs) -> Result<()> {
    let (board, glass) = args.selection.resolve()?;
    let spacing = Spacing::new(&board, &glass);
    let variants = plan_variants(&board, &glass);

    if args.json {
        let summary = JsonSummary {
            generated_at: chrono::Local::now().to_rfc3339(),
            board_name: args.selection.board.clone(),
            glass_name: args.selection.glass.clone(),
            board,
            glass,
            spacing,
            variants: variants
                .iter()
                .map(|v| JsonCount { variant: v.kind, holes: v.hole_count() })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let (upper_left, lower_right) = spacing.usable_region(&board);
    println!(
        "Board:  {} ({:.1}mm x {:.1}mm, wall {:.1}mm, gap {:.1}mm)",
        args.selection.board, board.width, board.height, board.wall_offset, board.min_hole_distance
    );
    println!(
        "Glass:  {} (inner Ø {:.1}mm, outer Ø {:.1}mm, {})",
        args.selection.glass,
        glass.inner_radius * 2.0,
        glass.outer_radius * 2.0,
        if glass.is_round() { "round".to_string() } else { format!("{} sides", glass.sides) }
    );
    println!(
        "Edge offset {:.1}mm, glass offset {:.1}mm, centers within ({:.1}, {:.1})-({:.1}, {:.1})",
        spacing.edge_offset, spacing.glass_offset, upper_left.x, upper_left.y, lower_right.x, lower_right.y
    );
    println!();
    print_counts(&variants);
    Ok(())
}
