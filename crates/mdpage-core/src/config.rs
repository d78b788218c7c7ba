//! Page setup for the layout adapter.
//!
//! All lengths are twips (1/20 pt) and font sizes are half-points, the
//! units word-processor formats use natively. The defaults describe an A4
//! page with 2 cm top/bottom, 1.5 cm right and 3 cm left margins.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 1134,
            right: 850,
            bottom: 1134,
            left: 1701,
        }
    }
}

/// Font face and size (half-points).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Font table as written in a config file; unset keys fall back per slot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FontOverride {
    family: Option<String>,
    size: Option<u32>,
}

impl FontOverride {
    fn resolve(self, base: Font) -> Font {
        Font {
            family: self.family.unwrap_or(base.family),
            size: self.size.unwrap_or(base.size),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPageSetup {
    content_width: Option<u32>,
    margins: Margins,
    body_font: FontOverride,
    code_font: FontOverride,
    table_font: FontOverride,
}

impl From<RawPageSetup> for PageSetup {
    fn from(raw: RawPageSetup) -> Self {
        let base = PageSetup::default();
        Self {
            content_width: raw.content_width.unwrap_or(base.content_width),
            margins: raw.margins,
            body_font: raw.body_font.resolve(base.body_font),
            code_font: raw.code_font.resolve(base.code_font),
            table_font: raw.table_font.resolve(base.table_font),
        }
    }
}

/// Page geometry and typography consumed by [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPageSetup")]
pub struct PageSetup {
    /// Printable width shared by all table columns.
    pub content_width: u32,
    pub margins: Margins,
    pub body_font: Font,
    pub code_font: Font,
    pub table_font: Font,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            content_width: 9000,
            margins: Margins::default(),
            body_font: Font::new("Times New Roman", 24),
            code_font: Font::new("Courier New", 22),
            table_font: Font::new("Times New Roman", 22),
        }
    }
}

impl PageSetup {
    /// Parse a page setup from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load and validate a page setup from a TOML file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let setup = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        setup.validate()?;
        Ok(setup)
    }

    /// Reject setups no renderer can lay out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_width == 0 {
            return Err(ConfigError::Invalid("content_width must be positive".into()));
        }
        for (name, font) in [
            ("body_font", &self.body_font),
            ("code_font", &self.code_font),
            ("table_font", &self.table_font),
        ] {
            if font.size == 0 {
                return Err(ConfigError::Invalid(format!("{name}.size must be positive")));
            }
            if font.family.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name}.family is empty")));
            }
        }
        Ok(())
    }
}
