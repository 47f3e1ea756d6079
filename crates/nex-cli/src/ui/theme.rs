//! UI Theme - Design system constants
//!
//! Colors and column widths shared by every command's output.

use crossterm::style::Color;

/// Default theme for nex output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Column widths
    pub layout: Layout,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Package ids (primary content)
    pub package_name: Color,
    /// Version numbers
    pub version: Color,
    /// Dates, descriptions and other secondary info
    pub secondary: Color,
    /// Field labels
    pub header: Color,
    /// `[INFO]` tag
    pub info: Color,
    /// `[OK]` tag
    pub success: Color,
    /// `[WARN]` tag
    pub warning: Color,
    /// `[ERROR]` tag
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            package_name: Color::Cyan,
            version: Color::White,
            secondary: Color::DarkGrey,
            header: Color::DarkGrey,
            info: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// Column widths for tabular output
#[derive(Debug, Clone)]
pub struct Layout {
    /// Package id column
    pub name_width: usize,
    /// Version column
    pub version_width: usize,
    /// Field label column in `info` and `doctor`
    pub label_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            name_width: 28,
            version_width: 12,
            label_width: 14,
        }
    }
}
