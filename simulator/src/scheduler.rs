//! Single-threaded cooperative timer queue.
//!
//! Components register repeating or one-shot callbacks and get a
//! [`TimerHandle`] back. Dropping the handle cancels the timer, so a
//! component's timers live exactly as long as the component.
//!
//! The frame loop calls [`Scheduler::run_until`] once per frame with the
//! current monotonic time. Due callbacks run one at a time, to completion, in
//! due-time order; callbacks due at the same instant run in registration
//! order. No queue borrow is held while a callback runs, so callbacks may
//! register new timers or drop handles.
//!
//! # Missed ticks
//!
//! A repeating timer that falls several periods behind (a long frame, a
//! suspended window) fires once and realigns to its period grid. Missed ticks
//! are skipped, never replayed in a burst.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Shortest accepted period. Guards against a zero period spinning forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

type Repeating = Box<dyn FnMut(Duration)>;
type Once = Box<dyn FnOnce(Duration)>;

enum Task {
    Repeating { period: Duration, callback: Repeating },
    Once(Once),
}

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct Queue {
    entries: Vec<Entry>,
    next_id: u64,
    now: Duration,
    /// Repeating timer currently running, and whether it was cancelled
    /// from inside its own callback.
    running: Option<(u64, bool)>,
}

impl Queue {
    fn insert(
        &mut self,
        due: Duration,
        task: Task,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, due, task });
        id
    }

    /// Remove the earliest entry due at or before `now`.
    fn pop_due(
        &mut self,
        now: Duration,
    ) -> Option<Entry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(index))
    }

    fn cancel(
        &mut self,
        id: u64,
    ) -> Option<Entry> {
        if let Some(index) = self.entries.iter().position(|e| e.id == id) {
            return Some(self.entries.swap_remove(index));
        }
        if let Some((running, cancelled)) = self.running.as_mut()
            && *running == id
        {
            *cancelled = true;
        }
        None
    }
}

/// Next due time of a repeating timer that just fired at `due`.
fn next_due(
    due: Duration,
    period: Duration,
    now: Duration,
) -> Duration {
    let next = due + period;
    if next > now {
        return next;
    }
    let behind = (now - due).as_nanos();
    let skipped = behind / period.as_nanos();
    log::trace!("timer skipped {skipped} missed ticks");
    let step = period.as_nanos() * (skipped + 1);
    due + Duration::from_nanos(u64::try_from(step).unwrap_or(u64::MAX))
}

/// Cooperative timer queue. Clones share the same queue.
#[derive(Clone, Default)]
pub struct Scheduler {
    queue: Rc<RefCell<Queue>>,
}

impl Scheduler {
    pub fn new() -> Self { Self::default() }

    /// Time of the last [`run_until`](Self::run_until) call, or of the
    /// callback currently running.
    pub fn now(&self) -> Duration { self.queue.borrow().now }

    /// Run `callback` every `period`, first one `period` after [`now`](Self::now).
    ///
    /// Call [`run_until`](Self::run_until) with the current time first, or the
    /// first tick lands early.
    ///
    /// The callback receives the time it was due.
    pub fn every<F>(
        &self,
        period: Duration,
        callback: F,
    ) -> TimerHandle
    where
        F: FnMut(Duration) + 'static,
    {
        let period = period.max(MIN_PERIOD);
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + period;
        let id = queue.insert(
            due,
            Task::Repeating {
                period,
                callback: Box::new(callback),
            },
        );
        TimerHandle::new(id, &self.queue)
    }

    /// Run `callback` once, `delay` after [`now`](Self::now).
    pub fn after<F>(
        &self,
        delay: Duration,
        callback: F,
    ) -> TimerHandle
    where
        F: FnOnce(Duration) + 'static,
    {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay;
        let id = queue.insert(due, Task::Once(Box::new(callback)));
        TimerHandle::new(id, &self.queue)
    }

    /// Run every callback due at or before `now`. Returns how many ran.
    pub fn run_until(
        &self,
        now: Duration,
    ) -> usize {
        let mut ran = 0;
        loop {
            let entry = {
                let mut queue = self.queue.borrow_mut();
                let Some(entry) = queue.pop_due(now) else {
                    queue.now = queue.now.max(now);
                    break;
                };
                queue.now = queue.now.max(entry.due);
                if matches!(entry.task, Task::Repeating { .. }) {
                    queue.running = Some((entry.id, false));
                }
                entry
            };

            let Entry { id, due, task } = entry;
            match task {
                Task::Once(callback) => callback(due),
                Task::Repeating { period, mut callback } => {
                    callback(due);
                    let mut queue = self.queue.borrow_mut();
                    let cancelled = matches!(queue.running.take(), Some((_, true)));
                    if cancelled {
                        // Dropped after the borrow is released
                        drop(queue);
                        drop(callback);
                    } else {
                        let next = Entry {
                            id,
                            due: next_due(due, period, now),
                            task: Task::Repeating { period, callback },
                        };
                        queue.entries.push(next);
                    }
                }
            }
            ran += 1;
        }
        ran
    }

    /// Live timers, including a repeating one whose callback is running.
    pub fn pending(&self) -> usize {
        let queue = self.queue.borrow();
        let running = usize::from(matches!(queue.running, Some((_, false))));
        queue.entries.len() + running
    }
}

/// Owner of one registered timer. Dropping it cancels the timer.
#[must_use = "dropping a TimerHandle cancels its timer"]
pub struct TimerHandle {
    id: u64,
    queue: Weak<RefCell<Queue>>,
    detached: bool,
}

impl TimerHandle {
    fn new(
        id: u64,
        queue: &Rc<RefCell<Queue>>,
    ) -> Self {
        Self {
            id,
            queue: Rc::downgrade(queue),
            detached: false,
        }
    }

    /// Let the timer run without an owner.
    ///
    /// Meant for fire-and-forget one-shots; a detached repeating timer runs
    /// until its scheduler is dropped.
    pub fn detach(mut self) { self.detached = true; }

    /// Cancel now instead of at drop.
    pub fn cancel(self) {}

    fn cancel_in_queue(&self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        let removed = match queue.try_borrow_mut() {
            Ok(mut queue) => queue.cancel(self.id),
            Err(_) => {
                log::warn!("timer {} dropped while the queue was busy, not cancelled", self.id);
                None
            }
        };
        // The entry's closure may own handles too; drop it unborrowed.
        drop(removed);
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if !self.detached {
            self.cancel_in_queue();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn ms(n: u64) -> Duration { Duration::from_millis(n) }

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let c = Rc::new(Cell::new(0));
        (Rc::clone(&c), c)
    }

    #[test]
    fn test_every_fires_each_period() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        let _timer = sched.every(ms(1000), move |_| h.set(h.get() + 1));

        assert_eq!(sched.run_until(ms(999)), 0);
        assert_eq!(sched.run_until(ms(1000)), 1);
        assert_eq!(sched.run_until(ms(2500)), 1);
        assert_eq!(sched.run_until(ms(3000)), 1);
        assert_eq!(hits.get(), 3);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_missed_ticks_are_skipped() {
        let sched = Scheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _timer = sched.every(ms(1000), move |due| s.borrow_mut().push(due));

        // Five periods late: one call, then back on the grid
        assert_eq!(sched.run_until(ms(5400)), 1);
        assert_eq!(sched.run_until(ms(5999)), 0);
        assert_eq!(sched.run_until(ms(6000)), 1);
        assert_eq!(*seen.borrow(), vec![ms(1000), ms(6000)]);
    }

    #[test]
    fn test_drop_cancels() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        let timer = sched.every(ms(10), move |_| h.set(h.get() + 1));
        sched.run_until(ms(10));
        drop(timer);
        assert_eq!(sched.pending(), 0);
        sched.run_until(ms(100));
        assert_eq!(hits.get(), 1, "No ticks after the handle is dropped");
    }

    #[test]
    fn test_after_fires_once() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        let timer = sched.after(ms(300), move |_| h.set(h.get() + 1));
        sched.run_until(ms(299));
        assert_eq!(hits.get(), 0);
        sched.run_until(ms(300));
        sched.run_until(ms(900));
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 0);
        drop(timer);
    }

    #[test]
    fn test_detached_one_shot_outlives_handle() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        sched.after(ms(300), move |_| h.set(h.get() + 1)).detach();
        assert_eq!(sched.pending(), 1);
        sched.run_until(ms(300));
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_cancel_before_due() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        sched.after(ms(300), move |_| h.set(h.get() + 1)).cancel();
        sched.run_until(ms(1000));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_due_order_then_registration_order() {
        let sched = Scheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (label, delay) in [("late", 200), ("first", 100), ("second", 100)] {
            let o = Rc::clone(&order);
            handles.push(sched.after(ms(delay), move |_| o.borrow_mut().push(label)));
        }
        assert_eq!(sched.run_until(ms(200)), 3);
        assert_eq!(*order.borrow(), vec!["first", "second", "late"]);
    }

    #[test]
    fn test_callback_can_register_timers() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        let inner = sched.clone();
        let _outer = sched.every(ms(100), move |_| {
            let h = Rc::clone(&h);
            inner.after(ms(50), move |_| h.set(h.get() + 1)).detach();
        });
        sched.run_until(ms(100));
        assert_eq!(hits.get(), 0);
        sched.run_until(ms(150));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_repeating_timer_cancelled_from_own_callback() {
        let sched = Scheduler::new();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
        let (hits, h) = counter();
        let s = Rc::clone(&slot);
        let handle = sched.every(ms(10), move |_| {
            h.set(h.get() + 1);
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(handle);

        sched.run_until(ms(100));
        assert_eq!(hits.get(), 1);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        let _timer = sched.every(Duration::ZERO, move |_| h.set(h.get() + 1));
        sched.run_until(ms(5));
        assert_eq!(hits.get(), 1, "Clamped period still skips missed ticks");
    }

    #[test]
    fn test_now_tracks_run_until() {
        let sched = Scheduler::new();
        assert_eq!(sched.now(), Duration::ZERO);
        sched.run_until(ms(1234));
        assert_eq!(sched.now(), ms(1234));
        let due = Rc::new(Cell::new(Duration::ZERO));
        let d = Rc::clone(&due);
        let _timer = sched.after(ms(100), move |at| d.set(at));
        sched.run_until(ms(2000));
        assert_eq!(due.get(), ms(1334), "One-shot is due relative to the scheduler's time");
    }

    #[test]
    fn test_after_measures_from_latest_run() {
        let sched = Scheduler::new();
        let (hits, h) = counter();
        sched.run_until(ms(1000));

        // Press lands 19 ms into the next frame; sync before registering
        sched.run_until(ms(1019));
        sched.after(ms(300), move |_| h.set(h.get() + 1)).detach();

        sched.run_until(ms(1300));
        assert_eq!(hits.get(), 0, "Must not fire 281 ms after registration");
        sched.run_until(ms(1318));
        assert_eq!(hits.get(), 0);
        sched.run_until(ms(1319));
        assert_eq!(hits.get(), 1, "Fires 300 ms after registration");
    }
}
