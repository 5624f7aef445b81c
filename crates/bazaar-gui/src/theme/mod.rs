//! Spacing constants and the handful of shared container styles.
//!
//! Widget styling otherwise leans on Iced's built-in palette styles
//! (`button::primary`, `container::bordered_box`, ...).

use iced::{Border, Theme};
use iced::widget::container;

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - cards, modals
pub const BORDER_RADIUS_LG: f32 = 8.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Sidebar width.
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Standard modal dialog width.
pub const MODAL_WIDTH: f32 = 460.0;

/// Table cell padding (vertical, horizontal).
pub const TABLE_CELL_PADDING: [f32; 2] = [8.0, 12.0];

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card surface: weak background, rounded border.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.weak.color,
            width: 1.0,
            radius: BORDER_RADIUS_LG.into(),
        },
        ..container::Style::default()
    }
}

/// Table header row background.
pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..container::Style::default()
    }
}

/// Semi-transparent backdrop behind modal dialogs.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.45).into()),
        ..container::Style::default()
    }
}
