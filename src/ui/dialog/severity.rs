//! Severity categories and their fixed visual treatment.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Semantic category of a dialog. Selects icon, accent color and default title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// Visual record for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityTheme {
    pub icon: &'static str,
    pub accent: Color,
    pub default_title: &'static str,
}

const INFO: SeverityTheme = SeverityTheme {
    icon: "ℹ",
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    default_title: "Information",
};

const SUCCESS: SeverityTheme = SeverityTheme {
    icon: "✔",
    accent: Color::Rgb(0x16, 0xa3, 0x4a),
    default_title: "Success",
};

const WARNING: SeverityTheme = SeverityTheme {
    icon: "⚠",
    accent: Color::Rgb(0xf5, 0x9e, 0x0b),
    default_title: "Attention",
};

const DANGER: SeverityTheme = SeverityTheme {
    icon: "⛔",
    accent: Color::Rgb(0xdc, 0x26, 0x26),
    default_title: "Error",
};

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Danger,
    ];

    /// Parse a severity name. Unknown names fall back to [`Severity::Info`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            other => {
                tracing::debug!(severity = other, "Unknown dialog severity, using info");
                Severity::Info
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    pub fn theme(self) -> &'static SeverityTheme {
        match self {
            Severity::Info => &INFO,
            Severity::Success => &SUCCESS,
            Severity::Warning => &WARNING,
            Severity::Danger => &DANGER,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Severity::from_name(&value)
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from_name(value)
    }
}
