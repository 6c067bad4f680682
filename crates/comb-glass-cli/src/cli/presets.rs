//! Presets command: list known boards and glasses.

use anyhow::Result;
use clap::Args;

use comb_glass::PresetRegistry;

use super::common::PresetFiles;

#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(flatten)]
    pub presets: PresetFiles,

    /// Print the built-in presets as a YAML template
    #[arg(long)]
    pub example: bool,
}

/// Execute the presets command.
pub fn cmd_presets(args: PresetsArgs) -> Result<()> {
    if args.example {
        print!("{}", PresetRegistry::builtin().to_yaml()?);
        return Ok(());
    }

    let registry = args.presets.registry()?;

    println!("Boards:");
    for (name, b) in &registry.boards {
        println!(
            "  {:<40} {:>6.1} x {:>6.1} mm  wall {:>4.1}  gap {:>4.1}",
            name, b.width, b.height, b.wall_offset, b.min_hole_distance
        );
    }

    println!();
    println!("Glasses:");
    for (name, g) in &registry.glasses {
        let shape = if g.is_round() { "round".to_string() } else { format!("{}-gon", g.sides) };
        println!(
            "  {:<40} inner Ø {:>5.1}  outer Ø {:>5.1} mm  {}",
            name,
            g.inner_radius * 2.0,
            g.outer_radius * 2.0,
            shape
        );
    }
    Ok(())
}
