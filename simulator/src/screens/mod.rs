//! Full-screen renderers: the closed-card intro, the content pages and the
//! debug view.

mod card;
mod debug;
mod intro;

pub use card::{CardView, draw_content_page};
pub use debug::{CardStats, draw_debug_page};
pub use intro::{IntroOutcome, run_intro_screen};
