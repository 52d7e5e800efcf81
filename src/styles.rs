//! Per-object styles and pre-computed text styles.
//!
//! # Object Styles
//!
//! Every object carries a [`Style`] by value. Widgets read it while drawing
//! and may copy and tweak it for a single pass (the gauge doubles
//! `line_width` and `pad_hor` to draw its major ticks). A handful of presets cover
//! the widgets in this crate.
//!
//! # Text Styles
//!
//! Scale numerals use `ProFont`. Like the other constants here, the text
//! styles are `const` so nothing is built per frame; only the color varies,
//! which callers get through `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_9_POINT;

use crate::colors::{BLACK, GRAY, ORANGE, SILVER, SLATE, WHITE, YELLOW};

// =============================================================================
// Object Style
// =============================================================================

/// Look of one object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    /// Main body color. For meters: the cold end of the tick gradient.
    pub body_main: Rgb565,
    /// Gradient body color. For meters: the hot end of the tick gradient.
    pub body_grad: Rgb565,
    /// Border color. Gauges paint their needle hub with it.
    pub border_color: Rgb565,
    /// Color of inactive tick lines.
    pub line_color: Rgb565,
    /// Stroke width of tick lines and needles.
    pub line_width: u32,
    /// Horizontal padding. For meters: tick length.
    pub pad_hor: i32,
    /// Vertical padding. For gauges: needle hub radius.
    pub pad_ver: i32,
    /// Inner padding. For gauges: gap between ticks and numerals.
    pub pad_inner: i32,
    /// Text color.
    pub text_color: Rgb565,
    /// Corner radius of the body.
    pub radius: u32,
    /// Whether the body rectangle is painted at all.
    pub body_visible: bool,
}

impl Style {
    /// Transparent container with white text.
    pub const PLAIN: Self = Self {
        body_main: BLACK,
        body_grad: BLACK,
        border_color: GRAY,
        line_color: GRAY,
        line_width: 1,
        pad_hor: 4,
        pad_ver: 4,
        pad_inner: 4,
        text_color: WHITE,
        radius: 0,
        body_visible: false,
    };

    /// Opaque black screen background.
    pub const SCREEN: Self = Self {
        body_visible: true,
        ..Self::PLAIN
    };

    /// Filled rounded panel.
    pub const PRETTY: Self = Self {
        body_main: SLATE,
        body_grad: SLATE,
        border_color: SILVER,
        line_color: GRAY,
        line_width: 1,
        pad_hor: 6,
        pad_ver: 6,
        pad_inner: 4,
        text_color: WHITE,
        radius: 6,
        body_visible: true,
    };

    /// Default look of line meters and gauges: yellow-to-orange ticks.
    pub const METER: Self = Self {
        body_main: YELLOW,
        body_grad: ORANGE,
        border_color: SILVER,
        line_color: GRAY,
        line_width: 1,
        pad_hor: 8,
        pad_ver: 4,
        pad_inner: 4,
        text_color: WHITE,
        radius: 0,
        body_visible: false,
    };
}

impl Default for Style {
    fn default() -> Self { Self::PLAIN }
}

// =============================================================================
// Text Styles
// =============================================================================

/// Text centered horizontally and vertically on its anchor point.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Scale numeral font (`ProFont` 9pt). Exposed for dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &PROFONT_9_POINT;

/// White scale numerals.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);

/// Pick the numeral style for `color`, reusing the const style when possible.
pub fn label_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    if color == WHITE {
        LABEL_STYLE_WHITE
    } else {
        MonoTextStyle::new(LABEL_FONT, color)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::RED;

    #[test]
    fn test_default_style_is_plain() {
        assert_eq!(Style::default(), Style::PLAIN);
    }

    #[test]
    fn test_meter_style_has_gradient() {
        assert_ne!(Style::METER.body_main, Style::METER.body_grad);
        assert!(Style::METER.pad_hor > 0, "ticks need a length");
    }

    #[test]
    fn test_label_style_colors() {
        assert_eq!(label_style(WHITE).text_color, LABEL_STYLE_WHITE.text_color);
        assert_eq!(label_style(RED).text_color, Some(RED));
    }
}
