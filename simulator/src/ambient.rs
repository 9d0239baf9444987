//! Background particle components.
//!
//! [`FloatingHearts`] owns a heart field and a 1 s spawn timer; it is the only
//! writer of its field. [`TwinklingStars`] generates its batch once at mount
//! and has no timer at all.
//!
//! Both draw their randomness from a shared RNG so the desktop build seeds one
//! generator from the OS and tests can pass a fixed-seed one.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use anniversary_common::{HeartField, StarField};
use rand_xoshiro::rand_core::RngCore;

use crate::scheduler::{Scheduler, TimerHandle};
use crate::timing::HEART_SPAWN_PERIOD;

/// RNG shared by every particle layer.
pub type SharedRng = Rc<RefCell<dyn RngCore>>;

/// Heart layer: one new heart per second, oldest dropped past capacity.
pub struct FloatingHearts {
    field: Rc<RefCell<HeartField>>,
    _spawner: TimerHandle,
}

impl FloatingHearts {
    pub fn mount(
        scheduler: &Scheduler,
        rng: SharedRng,
    ) -> Self {
        let field = Rc::new(RefCell::new(HeartField::new()));
        let writer = Rc::clone(&field);
        let spawner = scheduler.every(HEART_SPAWN_PERIOD, move |now| {
            let heart = writer.borrow_mut().spawn(&mut *rng.borrow_mut(), now);
            log::trace!("heart {} at {:.0}% size {:.0}px", heart.id, heart.left, heart.size);
        });
        log::debug!("hearts mounted");
        Self {
            field,
            _spawner: spawner,
        }
    }

    /// Read access for drawing.
    pub fn field(&self) -> Ref<'_, HeartField> { self.field.borrow() }
}

/// Star layer generated once per mount.
pub struct TwinklingStars {
    field: StarField,
    mounted_at: Duration,
}

impl TwinklingStars {
    pub fn mount(
        scheduler: &Scheduler,
        rng: &SharedRng,
    ) -> Self {
        let field = StarField::generate(&mut *rng.borrow_mut());
        Self {
            field,
            mounted_at: scheduler.now(),
        }
    }

    pub const fn field(&self) -> &StarField { &self.field }

    /// Time since mount, the phase base for twinkling.
    pub fn since_mount(
        &self,
        now: Duration,
    ) -> Duration {
        now.saturating_sub(self.mounted_at)
    }
}
