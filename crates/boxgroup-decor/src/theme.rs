//! Theme descriptions: named image libraries and the sets cut from them.

use boxgroup_core::{DecorationError, Insets};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A theme: a directory of sample images and the libraries cut from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, for diagnostics
    pub name: String,
    /// Directory holding the sample images
    #[serde(default)]
    pub path: String,
    /// Libraries in declaration order
    #[serde(default)]
    pub libraries: IndexMap<String, DecorationLibrary>,
}

/// One sample image split into a grid of cells, with named sets of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecorationLibrary {
    /// Sample image file, relative to the theme path
    pub path: String,
    /// Number of columns and rows in the sample
    pub grid: [u32; 2],
    /// Size of a single image inside its cell (whole cell when absent)
    #[serde(default)]
    pub size: Option<[u32; 2]>,
    /// Offset of the grid inside the sample
    #[serde(default)]
    pub offset: [i32; 2],
    /// Frame thickness (left, right, top, bottom); only decoration
    /// libraries carry one
    #[serde(default)]
    pub border: Option<[u32; 4]>,
    /// Named sets of 1-based (column, row) cells
    #[serde(default)]
    pub sets: IndexMap<String, Vec<[u32; 2]>>,
}

impl DecorationLibrary {
    /// Frame insets, if this library describes decorations.
    pub fn insets(&self) -> Option<Insets> {
        self.border.map(Insets::from)
    }

    pub fn has_set(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }
}

impl Theme {
    /// Parse a theme from its JSON description.
    pub fn from_json(source: &str) -> Result<Theme, DecorationError> {
        serde_json::from_str(source).map_err(|err| DecorationError::InvalidTheme {
            reason: err.to_string(),
        })
    }

    /// Serialize the theme back to JSON.
    pub fn to_json(&self) -> Result<String, DecorationError> {
        serde_json::to_string_pretty(self).map_err(|err| DecorationError::InvalidTheme {
            reason: err.to_string(),
        })
    }

    /// Look up a library by name.
    pub fn library(&self, name: &str) -> Result<&DecorationLibrary, DecorationError> {
        self.libraries
            .get(name)
            .ok_or_else(|| DecorationError::MissingLibrary { name: name.to_string() })
    }

    /// Libraries that describe decorations (those with a border).
    pub fn decoration_libraries(&self) -> impl Iterator<Item = (&str, &DecorationLibrary)> {
        self.libraries
            .iter()
            .filter(|(_, lib)| lib.border.is_some())
            .map(|(name, lib)| (name.as_str(), lib))
    }

    /// The built-in dark theme and its four frame styles.
    pub fn dark() -> Theme {
        let mut sets = IndexMap::new();
        sets.insert("Groove".to_string(), vec![[1, 2]]);
        sets.insert("Ridge".to_string(), vec![[1, 1]]);
        sets.insert("Inset".to_string(), vec![[2, 2]]);
        sets.insert("Outset".to_string(), vec![[2, 1]]);

        let mut libraries = IndexMap::new();
        libraries.insert(
            "Decoration".to_string(),
            DecorationLibrary {
                path: "606060_DECOR.png".to_string(),
                grid: [2, 2],
                size: Some([64, 64]),
                offset: [0, 0],
                border: Some([8, 8, 8, 8]),
                sets,
            },
        );

        Theme {
            name: "dark".to_string(),
            path: "./resources/themes/dark/".to_string(),
            libraries,
        }
    }
}
