//! Static card content: reasons, memory tiles, the letter and asset paths.
//!
//! Text is plain ASCII because the display fonts are ASCII-only.

use crate::colors::{AMBER_ORANGE, BLUE_CYAN, Gradient, INDIGO_PURPLE, PINK_ROSE, PURPLE_PINK};

/// Looping background track.
pub const SONG_PATH: &str = "assets/audio/song.mp3";

pub const INTRO_TITLE: &str = "For You";
pub const INTRO_SUBTITLE: &str = "Something special awaits...";
pub const INTRO_BUTTON: &str = "Open Your Gift >";
pub const INTRO_HINT: &str = "TAP TO UNLOCK";

pub const HEADER_TITLE: &str = "Us";
pub const HEADER_BADGE: &str = "5 Months Strong";

pub const HERO_BADGE: &str = "ANNIVERSARY SPECIAL";
pub const HERO_LINE_1: &str = "5 Months of";
pub const HERO_LINE_2: &str = "Pure Magic";
pub const HERO_TAGLINE: &str = "In a world of black and white, you are my favorite color.";
pub const COUNTER_CAPTION: &str = "TIME SINCE WE STARTED";

pub const REASONS_TITLE: &str = "Why I Love You";
pub const REASONS_BUTTON: &str = "[A] Tell me another reason";

pub const MEMORIES_TITLE: &str = "Our Journey Together";

pub const LETTER_TITLE: &str = "A Note For You";
pub const LETTER_SIGNATURE: &str = "I love you. <3";

pub const FOOTER: &str = "Made with love for our 5th Month Anniversary";

/// The reasons cycled on the reasons page.
pub const REASONS: &[&str] = &[
    "Your smile makes my entire day brighter, every time I feel down I just look at a photo of us together, gets me going.",
    "Every kiss we had, yeah, I love your lips, it's even better when mine overlap yours :P",
    "The way you laugh at my terrible jokes, my friends would never, I don't know how you survive those atrocities.",
    "How safe I feel when I'm with you.",
    "Our late-night conversations about everything during the early days, they were so special.",
    "You being the most bubbly girl, I love to carry you.",
    "The way you look at me.",
    "Every date we had in these 5 months.",
    "I still remember how you gave me that kinder joy just because I asked you so, jokingly.",
    "The comfort of your presence.",
    "Your kindness and compassion.",
];

/// Glyph drawn on a memory tile.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Heart,
    MapPin,
    Gift,
    Coffee,
    Music,
}

/// One tile of the memories grid.
#[derive(Clone, Copy, Debug)]
pub struct Memory {
    pub month: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
    /// Photo path relative to the working directory. Tiles draw the icon;
    /// the simulator only checks that the file exists.
    pub image: Option<&'static str>,
}

pub const MEMORIES: &[Memory] = &[
    Memory {
        month: 1,
        title: "Smitten",
        description: "Where it all started",
        icon: Icon::Heart,
        gradient: PINK_ROSE,
        image: Some("assets/images/first.jpg"),
    },
    Memory {
        month: 2,
        title: "Kisses",
        description: "Exploring together",
        icon: Icon::MapPin,
        gradient: BLUE_CYAN,
        image: Some("assets/images/second.jpg"),
    },
    Memory {
        month: 3,
        title: "Love",
        description: "With my cutie",
        icon: Icon::Gift,
        gradient: PURPLE_PINK,
        image: Some("assets/images/third-last.jpg"),
    },
    Memory {
        month: 4,
        title: "Yum",
        description: "Simple pleasures",
        icon: Icon::Coffee,
        gradient: AMBER_ORANGE,
        image: Some("assets/images/second-last.jpg"),
    },
    Memory {
        month: 5,
        title: "Adore",
        description: "Just loving you",
        icon: Icon::Music,
        gradient: INDIGO_PURPLE,
        image: Some("assets/images/last.jpg"),
    },
    Memory {
        month: 5,
        title: "Starstruck",
        description: "My Heart Beats for You",
        icon: Icon::Music,
        gradient: INDIGO_PURPLE,
        image: Some("assets/images/best.jpg"),
    },
];

/// Paragraphs of the letter page.
pub const LETTER: &[&str] = &[
    "It's hard to believe it's already been 5 months. Time flies when life feels this right.",
    "Thank you for being my partner, my best friend, and my calm in the chaos. You've made these past months the happiest I've been. I appreciate every little thing you do.",
    "Hope you succeed in all your endeavors. I'll be right here, cheering you on and loving you every step of the way.",
    "Here's to us, to 5 months, and to the infinite moments waiting for us in the future.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_ascii() {
        let all = REASONS.iter().chain(LETTER.iter()).chain(MEMORIES.iter().map(|m| &m.description));
        for text in all {
            assert!(text.is_ascii(), "Non-ASCII text would not render: {text}");
        }
    }

    #[test]
    fn test_reason_count() {
        assert_eq!(REASONS.len(), 11);
    }

    #[test]
    fn test_memories_fill_two_rows() {
        assert_eq!(MEMORIES.len(), 6);
        assert!(MEMORIES.iter().all(|m| (1..=5).contains(&m.month)));
    }
}
