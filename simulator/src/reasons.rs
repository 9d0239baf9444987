//! Reason card component.
//!
//! [`advance`](ReasonCard::advance) marks the selector as transitioning and
//! schedules the commit [`REASON_FADE`] later as a detached one-shot. The
//! commit mutates the shared selector in place, so overlapping advances each
//! count. The text color cross-fades toward the card background while a
//! transition is pending and back once it commits.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use anniversary_common::ReasonSelector;
use anniversary_common::animations::ColorTransition;
use anniversary_common::widgets::{REASON_CARD_FILL, REASON_TEXT_COLOR};
use embedded_graphics::pixelcolor::Rgb565;

use crate::scheduler::Scheduler;
use crate::timing::REASON_FADE;

const TEXT_SLOT: usize = 0;

pub struct ReasonCard {
    selector: Rc<RefCell<ReasonSelector>>,
    scheduler: Scheduler,
    text: ColorTransition<1>,
}

impl ReasonCard {
    pub fn new(
        scheduler: &Scheduler,
        reasons: &'static [&'static str],
    ) -> Self {
        Self {
            selector: Rc::new(RefCell::new(ReasonSelector::new(reasons))),
            scheduler: scheduler.clone(),
            text: ColorTransition::new(REASON_TEXT_COLOR),
        }
    }

    /// Start a transition to the next reason.
    pub fn advance(&mut self) {
        self.selector.borrow_mut().begin_advance();
        let selector = Rc::clone(&self.selector);
        self.scheduler
            .after(REASON_FADE, move |_| {
                selector.borrow_mut().commit_advance();
            })
            .detach();
    }

    /// Step the text fade by one frame.
    pub fn update_fade(&mut self) {
        let target = if self.selector.borrow().is_transitioning() {
            REASON_CARD_FILL
        } else {
            REASON_TEXT_COLOR
        };
        self.text.set_target(TEXT_SLOT, target);
        self.text.update();
    }

    pub fn text_color(&self) -> Rgb565 { self.text.get_current(TEXT_SLOT) }

    pub fn selector(&self) -> Ref<'_, ReasonSelector> { self.selector.borrow() }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anniversary_common::content::REASONS;

    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    #[test]
    fn test_advance_commits_after_fade() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        card.advance();
        assert!(card.selector().is_transitioning());
        assert_eq!(card.selector().index(), 0);

        sched.run_until(ms(299));
        assert_eq!(card.selector().index(), 0);
        sched.run_until(ms(300));
        assert_eq!(card.selector().index(), 1);
        assert!(!card.selector().is_transitioning());
    }

    #[test]
    fn test_mid_frame_advance_waits_full_fade() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        sched.run_until(ms(1000));

        // Frame loop syncs the scheduler before handling the press
        sched.run_until(ms(1019));
        card.advance();

        sched.run_until(ms(1300));
        assert_eq!(card.selector().index(), 0, "Commit held for the whole 300 ms");
        sched.run_until(ms(1319));
        assert_eq!(card.selector().index(), 1);
    }

    #[test]
    fn test_rapid_advances_both_count() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        card.advance();
        sched.run_until(ms(50));
        card.advance();

        sched.run_until(ms(300));
        assert_eq!(card.selector().index(), 1, "First commit lands at 300 ms");
        assert!(!card.selector().is_transitioning());
        sched.run_until(ms(350));
        assert_eq!(card.selector().index(), 2 % REASONS.len());
    }

    #[test]
    fn test_sequential_advances_wrap() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        let n = REASONS.len() as u64 + 3;
        for i in 0..n {
            card.advance();
            sched.run_until(ms((i + 1) * 1000));
        }
        assert_eq!(card.selector().index(), (n as usize) % REASONS.len());
    }

    #[test]
    fn test_commit_survives_card_drop() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        let selector = Rc::clone(&card.selector);
        card.advance();
        drop(card);
        assert_eq!(sched.pending(), 1, "The delayed commit is fire-and-forget");
        sched.run_until(ms(300));
        assert_eq!(selector.borrow().index(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_text_fades_out_and_back() {
        let sched = Scheduler::new();
        let mut card = ReasonCard::new(&sched, REASONS);
        assert_eq!(card.text_color(), REASON_TEXT_COLOR);

        card.advance();
        for _ in 0..60 {
            card.update_fade();
        }
        assert_eq!(card.text_color(), REASON_CARD_FILL, "Text fully faded while transitioning");

        sched.run_until(ms(300));
        for _ in 0..60 {
            card.update_fade();
        }
        assert_eq!(card.text_color(), REASON_TEXT_COLOR);
    }
}
