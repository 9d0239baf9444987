//! Page navigation once the card is open.
//!
//! Button `X` walks forward through the content pages, button `Y` jumps to
//! the debug page and back.
//!
//! # Pages
//!
//! - [`Page::Counter`]: Hero headline and the time-together counter
//! - [`Page::Reasons`]: Rotating "Why I Love You" reasons
//! - [`Page::Memories`]: Grid of memory tiles
//! - [`Page::Letter`]: The note
//! - [`Page::Debug`]: Frame timing and the event log terminal

/// Available pages inside the opened card.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Counter,
    Reasons,
    Memories,
    Letter,
    Debug,
}

impl Page {
    /// Advance to the next content page, wrapping after the letter.
    ///
    /// The debug page is not part of the cycle; leaving it returns to the
    /// first content page.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Counter => Self::Reasons,
            Self::Reasons => Self::Memories,
            Self::Memories => Self::Letter,
            Self::Letter | Self::Debug => Self::Counter,
        }
    }

    /// Toggle between the debug page and the counter page.
    #[inline]
    pub const fn toggle_debug(self) -> Self {
        match self {
            Self::Debug => Self::Counter,
            _ => Self::Debug,
        }
    }

    /// Short title shown in the event log when the page changes.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Counter => "Page: Counter",
            Self::Reasons => "Page: Reasons",
            Self::Memories => "Page: Memories",
            Self::Letter => "Page: Letter",
            Self::Debug => "Page: Debug",
        }
    }
}
