//! Named boards and glasses.
//!
//! The registry is read-only data handed to whoever needs it. It starts from
//! a built-in table of real hive boards and shop glasses, and can be
//! extended (or overridden by name) from YAML files:
//!
//! ```yaml
//! boards:
//!   MyBoard:
//!     width: 420
//!     height: 380
//!     wall_offset: 10
//!     min_hole_distance: 10
//! glasses:
//!   MyGlass:
//!     inner_radius: 41
//!     outer_radius: 47.5
//!     sides: 6
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{BoardConfiguration, GlassConfiguration};
use crate::error::PresetError;

/// Board used when nothing else is asked for.
pub const DEFAULT_BOARD: &str = "DadantWeber";
/// Glass used when nothing else is asked for.
pub const DEFAULT_GLASS: &str = "BienenRuckWabengläserRund500";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetRegistry {
    #[serde(default)]
    pub boards: BTreeMap<String, BoardConfiguration>,
    #[serde(default)]
    pub glasses: BTreeMap<String, GlassConfiguration>,
}

impl PresetRegistry {
    /// The presets shipped with the tool.
    pub fn builtin() -> Self {
        let boards = [
            ("DadantWeber", BoardConfiguration::new(464.0, 464.0, 10.0, 10.0)),
            ("ZanderSpec", BoardConfiguration::new(435.0, 380.0, 10.0, 10.0)),
            ("TestBrett", BoardConfiguration::new(500.0, 600.0, 10.0, 10.0)),
            // A4 sheet minus a 10mm print margin on every side
            ("DemoBrettA4", BoardConfiguration::new(210.0 - 20.0, 297.0 - 20.0, 5.0, 5.0)),
        ];

        // Shop pages list diameters; radii are half of those.
        let glasses = [
            // https://www.holtermann-glasshop.de/Sechseckglaeser/Sechseckglas-580-ml/
            ("HolterMannTwistOffSechseckglas580", GlassConfiguration::new(82.0 / 2.0, 95.0 / 2.0, 6)),
            // https://www.holtermann-glasshop.de/Designglaeser/Viereckglas-312-ml/Viereckglas-312-ml-Biene.html
            ("HolterMannTwistOffViereckglas312", GlassConfiguration::new(60.0 / 2.0, 75.0 / 2.0, 4)),
            // https://www.flaschenbauer.de/einmachglaeser/sechskantglaeser/sechskantglas-580-ml-to-82
            ("FlaschenBauerSechskantglas580mlTO82", GlassConfiguration::new(82.0 / 2.0, 95.0 / 2.0, 6)),
            // https://www.bienen-ruck.de/imkershop/honigverkauf-werbemittel/twist-off-glaeser/1902/wabenglaeser-rund
            ("BienenRuckWabengläserRund500", GlassConfiguration::round(82.0 / 2.0, 90.0 / 2.0)),
            ("TestGlas", GlassConfiguration::round(60.0 / 2.0, 88.0 / 2.0)),
            ("DemoGlasEckig", GlassConfiguration::new(45.0 / 2.0, 54.0 / 2.0, 8)),
        ];

        Self {
            boards: boards.into_iter().map(|(n, b)| (n.to_string(), b)).collect(),
            glasses: glasses.into_iter().map(|(n, g)| (n.to_string(), g)).collect(),
        }
    }

    /// Parse a registry from YAML. Missing sections are empty.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PresetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a registry from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PresetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Add every entry of `other`, replacing entries with the same name.
    pub fn merge(mut self, other: PresetRegistry) -> Self {
        self.boards.extend(other.boards);
        self.glasses.extend(other.glasses);
        self
    }

    pub fn to_yaml(&self) -> Result<String, PresetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a board by name.
    ///
    /// Exact matches win; otherwise an ASCII case-insensitive match is tried.
    pub fn board(&self, name: &str) -> Result<BoardConfiguration, PresetError> {
        lookup(&self.boards, name).ok_or_else(|| PresetError::UnknownBoard {
            name: name.to_string(),
            available: self.board_names().join(", "),
        })
    }

    /// Look up a glass by name, same rules as [`PresetRegistry::board`].
    pub fn glass(&self, name: &str) -> Result<GlassConfiguration, PresetError> {
        lookup(&self.glasses, name).ok_or_else(|| PresetError::UnknownGlass {
            name: name.to_string(),
            available: self.glass_names().join(", "),
        })
    }

    pub fn board_names(&self) -> Vec<&str> {
        self.boards.keys().map(String::as_str).collect()
    }

    pub fn glass_names(&self) -> Vec<&str> {
        self.glasses.keys().map(String::as_str).collect()
    }
}

fn lookup<T: Copy>(table: &BTreeMap<String, T>, name: &str) -> Option<T> {
    table.get(name).copied().or_else(|| {
        table
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    })
}
