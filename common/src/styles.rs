//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! Styles that never change color are `const`. Widgets that fade or tint
//! their text build a `MonoTextStyle` from one of the exposed fonts instead.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{PINK, PINK_LIGHT, SLATE_300, SLATE_500, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Body font for reasons and the letter (7x13).
pub const BODY_FONT: &MonoFont = &FONT_7X13;

/// Counter digits (`ProFont` 18pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Hero headline (`ProFont` 24pt).
pub const HERO_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Muted uppercase labels ("DAYS", "Tap to unlock").
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, SLATE_500);

/// White labels on accent backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Pink labels for badges and section captions.
pub const LABEL_STYLE_PINK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, PINK_LIGHT);

/// Body copy.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, SLATE_300);

/// White section titles.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Pink section titles.
pub const TITLE_STYLE_PINK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, PINK);
