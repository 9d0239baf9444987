//! Decorative particle generators.
//!
//! Two independent layers float behind the card:
//!
//! - **Hearts**: one new heart per spawn period, kept in a FIFO ring of
//!   [`HEART_CAPACITY`] entries. When the ring is full the oldest heart is
//!   dropped before the new one is appended.
//! - **Stars**: a batch of [`STAR_COUNT`] generated once; the batch has no
//!   mutating API after construction.
//!
//! All random parameters are drawn from an injected [`RngCore`], so a
//! fixed-sequence source makes generation fully deterministic.
//!
//! # Memory Usage
//!
//! Both collections are `heapless` and live inline in their owner; nothing is
//! allocated after startup.

use core::time::Duration;

use heapless::{Deque, Vec};
use rand_core::RngCore;

use crate::config::{
    HEART_CAPACITY,
    HEART_DELAY_RANGE,
    HEART_DURATION_RANGE,
    HEART_LEFT_RANGE,
    HEART_SIZE_RANGE,
    STAR_COUNT,
    STAR_DELAY_RANGE,
    STAR_LEFT_RANGE,
    STAR_SIZE_RANGE,
    STAR_TOP_RANGE,
};

/// Uniform sample between `min` and `max` using the top 24 bits of one `u32`.
pub fn uniform<R>(
    rng: &mut R,
    (min, max): (f32, f32),
) -> f32
where
    R: RngCore + ?Sized,
{
    let unit = (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
    min + unit * (max - min)
}

// =============================================================================
// Hearts
// =============================================================================

/// A floating heart. Never mutated after creation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeartParticle {
    /// Unique within the generator that created it.
    pub id: u32,
    /// Horizontal position, percent of screen width.
    pub left: f32,
    /// Seconds per full float.
    pub animation_duration: f32,
    /// Seconds before the float starts.
    pub delay: f32,
    /// Glyph size in pixels.
    pub size: f32,
    /// Monotonic time the heart was spawned.
    pub born: Duration,
}

/// Bounded FIFO of live hearts.
pub struct HeartField {
    hearts: Deque<HeartParticle, HEART_CAPACITY>,
    next_id: u32,
}

impl HeartField {
    pub const fn new() -> Self {
        Self {
            hearts: Deque::new(),
            next_id: 0,
        }
    }

    /// Synthesize one heart and append it, evicting the oldest if full.
    pub fn spawn<R>(
        &mut self,
        rng: &mut R,
        now: Duration,
    ) -> HeartParticle
    where
        R: RngCore + ?Sized,
    {
        let heart = HeartParticle {
            id: self.next_id,
            left: uniform(rng, HEART_LEFT_RANGE),
            animation_duration: uniform(rng, HEART_DURATION_RANGE),
            delay: uniform(rng, HEART_DELAY_RANGE),
            size: uniform(rng, HEART_SIZE_RANGE),
            born: now,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.push(heart);
        heart
    }

    /// Append a heart, dropping the oldest when at capacity.
    pub fn push(
        &mut self,
        heart: HeartParticle,
    ) {
        if self.hearts.is_full() {
            self.hearts.pop_front();
        }
        // Cannot fail: a slot was freed above if the ring was full.
        self.hearts.push_back(heart).ok();
    }

    /// Hearts oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HeartParticle> { self.hearts.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.hearts.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.hearts.is_empty() }

    /// Total hearts ever spawned by this field.
    #[inline]
    pub const fn spawned(&self) -> u32 { self.next_id }
}

impl Default for HeartField {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Stars
// =============================================================================

/// A twinkling star. Never mutated after creation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StarParticle {
    pub id: u32,
    /// Horizontal position, percent of screen width.
    pub left: f32,
    /// Vertical position, percent of screen height.
    pub top: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Twinkle phase offset in seconds.
    pub delay: f32,
}

/// Fixed batch of stars generated at mount.
pub struct StarField {
    stars: Vec<StarParticle, STAR_COUNT>,
}

impl StarField {
    /// Generate the full batch in one shot.
    pub fn generate<R>(rng: &mut R) -> Self
    where
        R: RngCore + ?Sized,
    {
        let mut stars = Vec::new();
        for id in 0..STAR_COUNT as u32 {
            let star = StarParticle {
                id,
                left: uniform(rng, STAR_LEFT_RANGE),
                top: uniform(rng, STAR_TOP_RANGE),
                size: uniform(rng, STAR_SIZE_RANGE),
                delay: uniform(rng, STAR_DELAY_RANGE),
            };
            // Loop bound equals capacity.
            stars.push(star).ok();
        }
        log::debug!("generated {} stars", stars.len());
        Self { stars }
    }

    #[inline]
    pub fn as_slice(&self) -> &[StarParticle] { &self.stars }

    pub fn iter(&self) -> impl Iterator<Item = &StarParticle> { self.stars.iter() }

    #[inline]
    pub fn len(&self) -> usize { self.stars.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.stars.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of words, cycling when exhausted.
    struct SequenceRng {
        words: &'static [u32],
        pos: usize,
    }

    impl SequenceRng {
        const fn new(words: &'static [u32]) -> Self { Self { words, pos: 0 } }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.pos % self.words.len()];
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 { u64::from(self.next_u32()) }

        fn fill_bytes(
            &mut self,
            dst: &mut [u8],
        ) {
            rand_core::impls::fill_bytes_via_next(self, dst);
        }
    }

    const ZEROS: &[u32] = &[0];
    const MAXES: &[u32] = &[u32::MAX];
    const HALVES: &[u32] = &[0x8000_0000];

    #[test]
    fn test_uniform_bounds() {
        let mut lo = SequenceRng::new(ZEROS);
        let mut hi = SequenceRng::new(MAXES);
        let mut mid = SequenceRng::new(HALVES);
        assert_eq!(uniform(&mut lo, (5.0, 10.0)), 5.0);
        let top = uniform(&mut hi, (5.0, 10.0));
        assert!(top <= 10.0 && top > 9.99, "max word should land at the upper bound, got {top}");
        assert_eq!(uniform(&mut mid, (0.0, 100.0)), 50.0);
    }

    #[test]
    fn test_heart_parameters_within_ranges() {
        let mut rng = SequenceRng::new(&[0, u32::MAX, 0x4000_0000, 0xC000_0000, 12_345, 987_654_321]);
        let mut field = HeartField::new();
        for i in 0..100 {
            let h = field.spawn(&mut rng, Duration::from_secs(i));
            assert!((0.0..=100.0).contains(&h.left), "left out of range: {}", h.left);
            assert!((5.0..=10.0).contains(&h.animation_duration), "duration out of range");
            assert!((0.0..=2.0).contains(&h.delay), "delay out of range");
            assert!((10.0..=30.0).contains(&h.size), "size out of range");
        }
    }

    #[test]
    fn test_heart_field_never_exceeds_capacity() {
        let mut rng = SequenceRng::new(HALVES);
        let mut field = HeartField::new();
        for i in 0..200 {
            field.spawn(&mut rng, Duration::from_secs(i));
            assert!(field.len() <= HEART_CAPACITY, "len {} exceeds cap after {i} spawns", field.len());
        }
        assert_eq!(field.len(), HEART_CAPACITY);
        assert_eq!(field.spawned(), 200);
    }

    #[test]
    fn test_heart_field_drops_oldest_first() {
        let mut rng = SequenceRng::new(HALVES);
        let mut field = HeartField::new();
        for i in 0..HEART_CAPACITY as u64 {
            field.spawn(&mut rng, Duration::from_secs(i));
        }
        assert_eq!(field.iter().next().map(|h| h.id), Some(0));

        let newest = field.spawn(&mut rng, Duration::from_secs(99));

        let ids: std::vec::Vec<u32> = field.iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), HEART_CAPACITY);
        assert_eq!(ids[0], 1, "Heart 0 should have been evicted");
        assert_eq!(*ids.last().unwrap(), newest.id, "Newest heart should be last");
        let expected: std::vec::Vec<u32> = (1..=HEART_CAPACITY as u32).collect();
        assert_eq!(ids, expected, "Field should hold the 20 most recent hearts in order");
    }

    #[test]
    fn test_heart_ids_unique() {
        let mut rng = SequenceRng::new(ZEROS);
        let mut field = HeartField::new();
        let a = field.spawn(&mut rng, Duration::ZERO);
        let b = field.spawn(&mut rng, Duration::ZERO);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_star_field_has_exact_count() {
        let mut rng = SequenceRng::new(&[1, 2, 3, 0xFFFF_0000]);
        let stars = StarField::generate(&mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars.iter() {
            assert!((0.0..=100.0).contains(&star.left));
            assert!((0.0..=100.0).contains(&star.top));
            assert!((1.0..=4.0).contains(&star.size), "size out of range: {}", star.size);
            assert!((0.0..=3.0).contains(&star.delay));
        }
    }

    #[test]
    fn test_star_field_is_deterministic_for_fixed_source() {
        let a = StarField::generate(&mut SequenceRng::new(&[7, 0x1234_5678, 0x9ABC_DEF0]));
        let b = StarField::generate(&mut SequenceRng::new(&[7, 0x1234_5678, 0x9ABC_DEF0]));
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
