//! Widget components for the card display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so they render
//! the same into the simulator window or any other Rgb565 target.

mod counter;
mod header;
mod letter;
mod memories;
mod particles;
mod popups;
mod primitives;
mod reason;

pub use counter::{TILE_HEIGHT as COUNTER_TILE_HEIGHT, draw_counter};
pub use header::draw_header;
pub use letter::draw_letter;
pub use memories::{draw_memories, tile_origin};
pub use particles::{draw_hearts, draw_stars};
pub use popups::draw_music_popup;
pub use primitives::{draw_gradient_rect, draw_heart, draw_panel, draw_star_dot, draw_wrapped, sway, wrap_lines};
pub use reason::{CARD_FILL as REASON_CARD_FILL, TEXT_COLOR as REASON_TEXT_COLOR, draw_reason_card};
