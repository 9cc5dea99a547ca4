// Grid template - column count and gap resolved from the configuration

use crate::config::MasonryConfig;
use serde::Serialize;
use std::fmt;

/// Column count used when the configured repeat is zero
pub const FALLBACK_COLUMNS: u32 = 16;

/// A single style declaration (`property: value;`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridTemplate {
    pub columns: u32,
    /// Gap in pixels; `None` means no gap declaration at all
    pub gap: Option<u32>,
}

impl GridTemplate {
    pub fn from_config(config: &MasonryConfig) -> Self {
        let columns = if config.repeat > 0 {
            config.repeat
        } else {
            FALLBACK_COLUMNS
        };
        let gap = (config.gap > 0).then_some(config.gap);
        Self { columns, gap }
    }

    pub fn gap_px(&self) -> u32 {
        self.gap.unwrap_or(0)
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = vec![
            Declaration::new("display", "grid"),
            Declaration::new(
                "grid-template-columns",
                format!("repeat({}, 1fr)", self.columns),
            ),
        ];
        if let Some(gap) = self.gap {
            declarations.push(Declaration::new("grid-gap", format!("{}px", gap)));
        }
        declarations
    }
}
