//! CLI command implementations.
//!
//! - `generate` - Plan layouts and write drawings, documents and drill lists
//! - `summary` - Print spacing and hole counts only
//! - `presets` - List available boards and glasses

pub mod common;
pub mod generate;
pub mod presets;
pub mod summary;

pub use generate::{GenerateArgs, cmd_generate};
pub use presets::{PresetsArgs, cmd_presets};
pub use summary::{SummaryArgs, cmd_summary};
