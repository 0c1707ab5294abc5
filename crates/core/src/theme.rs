//! Fixed catalog of slide themes.
//!
//! The table is `'static` data: it is never mutated, so it can be shared
//! across any number of concurrent renders without locking. Unknown
//! identifiers are reported as errors here; the substitution of the default
//! theme happens in [`resolve_theme`], at the caller boundary.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Visual parameters for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    /// Display name.
    pub name: &'static str,
    /// Color for titles, controls and the counter.
    pub primary_color: &'static str,
    /// Color for body text.
    pub secondary_color: &'static str,
    /// CSS `background` value for the page.
    pub background: &'static str,
    /// CSS `font-family` value for the page.
    pub font_family: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
}

/// Identifier of a catalog theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Clean corporate design with blue accents.
    #[default]
    Professional,
    /// Purple-pink gradients.
    Creative,
    /// Monochrome, plain white background.
    Minimal,
}

impl ThemeId {
    /// All theme identifiers, in listing order.
    pub const ALL: [ThemeId; 3] = [ThemeId::Professional, ThemeId::Creative, ThemeId::Minimal];

    /// The identifier as used on the command line and in generation results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Creative => "creative",
            Self::Minimal => "minimal",
        }
    }

    /// Look up an identifier by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "professional" => Some(Self::Professional),
            "creative" => Some(Self::Creative),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}

static PROFESSIONAL: ThemeDescriptor = ThemeDescriptor {
    name: "Professional",
    primary_color: "#2563eb",
    secondary_color: "#64748b",
    background: "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)",
    font_family: "Inter, system-ui, sans-serif",
    description: "Clean and corporate design with blue accents",
};

static CREATIVE: ThemeDescriptor = ThemeDescriptor {
    name: "Creative",
    primary_color: "#7c3aed",
    secondary_color: "#ec4899",
    background: "linear-gradient(135deg, #fdf4ff 0%, #fae8ff 100%)",
    font_family: "Poppins, sans-serif",
    description: "Vibrant and modern with purple-pink gradients",
};

static MINIMAL: ThemeDescriptor = ThemeDescriptor {
    name: "Minimal",
    primary_color: "#374151",
    secondary_color: "#9ca3af",
    background: "#ffffff",
    font_family: "Source Sans Pro, sans-serif",
    description: "Clean and simple monochromatic design",
};

/// Read-only access to the theme table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeCatalog;

impl ThemeCatalog {
    /// Descriptor for a known identifier.
    pub fn get(id: ThemeId) -> &'static ThemeDescriptor {
        match id {
            ThemeId::Professional => &PROFESSIONAL,
            ThemeId::Creative => &CREATIVE,
            ThemeId::Minimal => &MINIMAL,
        }
    }

    /// Descriptor for an identifier given by name.
    ///
    /// Fails with [`Error::UnknownTheme`] for names outside the catalog.
    pub fn lookup(name: &str) -> Result<&'static ThemeDescriptor> {
        name.parse::<ThemeId>().map(Self::get)
    }

    /// Every theme with its identifier, in listing order.
    pub fn all() -> impl Iterator<Item = (ThemeId, &'static ThemeDescriptor)> {
        ThemeId::ALL.into_iter().map(|id| (id, Self::get(id)))
    }
}

/// Resolve a caller-supplied theme name, falling back to the default.
///
/// Returns the identifier actually used alongside its descriptor.
pub fn resolve_theme_id(name: &str) -> (ThemeId, &'static ThemeDescriptor) {
    let id = match name.parse::<ThemeId>() {
        Ok(id) => id,
        Err(e) => {
            log::warn!("{}, using {}", e, ThemeId::default());
            ThemeId::default()
        }
    };
    (id, ThemeCatalog::get(id))
}

/// Resolve a caller-supplied theme name to a descriptor.
///
/// Unknown names resolve to the `professional` theme.
pub fn resolve_theme(name: &str) -> &'static ThemeDescriptor {
    resolve_theme_id(name).1
}

/// Listing entry for a theme.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeSummary {
    /// Catalog key, serialized as the theme's name string.
    pub id: ThemeId,
    /// Display name from the descriptor.
    pub name: &'static str,
    /// One-line description from the descriptor.
    pub description: &'static str,
}

/// Summaries of every theme, in listing order.
pub fn theme_summaries() -> Vec<ThemeSummary> {
    ThemeCatalog::all()
        .map(|(id, theme)| ThemeSummary {
            id,
            name: theme.name,
            description: theme.description,
        })
        .collect()
}
