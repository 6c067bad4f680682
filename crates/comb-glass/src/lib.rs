//! # comb-glass
//!
//! Hole layouts for comb glass jigs: boards with round or polygonal
//! cut-outs that hold upside-down honey glasses in a beehive.
//!
//! The pipeline is `configuration -> layout generator -> variants ->
//! writers`. Everything up to the writers is pure computation on plain
//! values; only [`render::write_variant`] touches the file system.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod presets;
pub mod render;
pub mod variant;

// Re-export common types at crate root for convenience.
pub use config::{BoardConfiguration, GlassConfiguration};
pub use error::{PresetError, RenderError, ThemeError};
pub use geometry::{Point, bounding_box, centroid, mid_point, move_points};
pub use layout::{Layout, Spacing, center_all_holes, generate_holes};
pub use presets::{DEFAULT_BOARD, DEFAULT_GLASS, PresetRegistry};
pub use render::{OutputFormat, RenderOptions, Scene, Theme, write_variant};
pub use variant::{Variant, VariantKind, plan_variants};
