//! Explicit color configuration for the charts.
//!
//! Colors are passed in as props rather than read from ambient constants, so
//! tests and callers get deterministic assignment. Defaults match the
//! dashboard's translucent accent set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default segment colors: five translucent accents that read on the dark
/// card background.
const DEFAULT_COLORS: [&str; 5] = [
    "rgba(0, 212, 170, 0.55)",
    "rgba(0, 217, 255, 0.55)",
    "rgba(245, 158, 11, 0.55)",
    "rgba(167, 139, 250, 0.55)",
    "rgba(34, 197, 94, 0.55)",
];

/// Neutral color for series keys with no explicit mapping.
const FALLBACK_COLOR: &str = "rgba(148, 163, 184, 0.55)";

/// Ordered color list assigned to pie slices by index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Build from an ordered CSS color list. An empty list falls back to the
    /// default set so indexing always resolves.
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    /// Color for a slice index, wrapping past the end of the list.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Series key to display color mapping with a neutral fallback for unmapped
/// keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesColors {
    map: HashMap<String, String>,
    fallback: String,
}

impl SeriesColors {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }

    pub fn with_fallback(mut self, color: impl Into<String>) -> Self {
        self.fallback = color.into();
        self
    }

    /// Mapped color for a key, or the neutral fallback.
    pub fn color_for(&self, key: &str) -> &str {
        self.map.get(key).map(String::as_str).unwrap_or(&self.fallback)
    }
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }
}
