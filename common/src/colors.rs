//! Color palette for the anniversary card.
//!
//! The card uses a dark slate night sky with pink, purple and blue accents.
//! Standard colors come from the `RgbColor` trait constants; everything else
//! is hand-tuned in RGB565 space.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Used for headline text and the heart badge glyph.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow (31, 63, 0). Used for sparkles and debug highlights.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure green (0, 63, 0). Used for the debug terminal prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Background Slates
// =============================================================================

/// Page background (slate-950).
pub const SLATE_950: Rgb565 = Rgb565::new(1, 3, 3);

/// Panel background (slate-900).
pub const SLATE_900: Rgb565 = Rgb565::new(2, 5, 5);

/// Raised panel background (slate-800).
pub const SLATE_800: Rgb565 = Rgb565::new(3, 8, 7);

/// Panel borders (slate-700).
pub const SLATE_700: Rgb565 = Rgb565::new(6, 13, 10);

/// Muted text (slate-500).
pub const SLATE_500: Rgb565 = Rgb565::new(12, 27, 17);

/// Body text (slate-300).
pub const SLATE_300: Rgb565 = Rgb565::new(25, 52, 27);

// =============================================================================
// Accents
// =============================================================================

/// Primary accent (pink-500). Hearts, badge, borders.
pub const PINK: Rgb565 = Rgb565::new(29, 18, 19);

/// Light pink (pink-400). Gradient text start.
pub const PINK_LIGHT: Rgb565 = Rgb565::new(30, 28, 22);

/// Rose (rose-500). Heart badge gradient end.
pub const ROSE: Rgb565 = Rgb565::new(30, 15, 11);

/// Purple (purple-500). Gradient midpoint and music button.
pub const PURPLE: Rgb565 = Rgb565::new(21, 21, 30);

/// Light purple (purple-400).
pub const PURPLE_LIGHT: Rgb565 = Rgb565::new(24, 33, 31);

/// Blue (blue-400). Stars and counter accents.
pub const BLUE: Rgb565 = Rgb565::new(12, 40, 31);

/// Cyan (cyan-500).
pub const CYAN: Rgb565 = Rgb565::new(0, 45, 26);

/// Indigo (indigo-500).
pub const INDIGO: Rgb565 = Rgb565::new(12, 25, 30);

/// Amber (amber-500).
pub const AMBER: Rgb565 = Rgb565::new(30, 39, 1);

/// Orange (orange-500).
pub const ORANGE: Rgb565 = Rgb565::new(31, 28, 4);

/// Dark gray for divider lines.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// A two-stop gradient, drawn left-to-right or top-to-bottom.
pub type Gradient = (Rgb565, Rgb565);

pub const PINK_ROSE: Gradient = (PINK, ROSE);
pub const BLUE_CYAN: Gradient = (BLUE, CYAN);
pub const PURPLE_PINK: Gradient = (PURPLE, PINK);
pub const AMBER_ORANGE: Gradient = (AMBER, ORANGE);
pub const INDIGO_PURPLE: Gradient = (INDIGO, PURPLE);
