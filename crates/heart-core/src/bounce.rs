//! One-shot scale bounce on heart activation.
//!
//! The restore is scheduled by the host (a browser timeout, a native
//! deadline) and comes back here with the [`BounceTicket`] it was given. A
//! ticket only restores when it is the latest one issued and its token has
//! not been cancelled, so a timer that fires after teardown or after a newer
//! click does nothing.

use crate::constants::BOUNCE_FACTOR;
use std::cell::Cell;
use std::rc::Rc;

/// Shared cancel flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Handle for one scheduled restore.
#[derive(Clone, Debug)]
pub struct BounceTicket {
    generation: u64,
    token: CancellationToken,
}

impl BounceTicket {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Active {
    generation: u64,
    restore_scale: f32,
    bounced_scale: f32,
}

#[derive(Debug, Default)]
pub struct ScaleBounce {
    token: CancellationToken,
    generation: u64,
    active: Option<Active>,
}

impl ScaleBounce {
    /// Start (or restart) a bounce from `current_scale`. A bounce that is
    /// already running keeps its original restore scale.
    pub fn trigger(&mut self, current_scale: f32) -> (f32, BounceTicket) {
        self.generation += 1;
        let restore_scale = self.active.map_or(current_scale, |a| a.restore_scale);
        let bounced_scale = restore_scale * BOUNCE_FACTOR;
        self.active = Some(Active {
            generation: self.generation,
            restore_scale,
            bounced_scale,
        });
        let ticket = BounceTicket {
            generation: self.generation,
            token: self.token.clone(),
        };
        (bounced_scale, ticket)
    }

    /// Scale to hold while a bounce is running.
    #[inline]
    pub fn active_scale(&self) -> Option<f32> {
        self.active.map(|a| a.bounced_scale)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// End the bounce named by `ticket`. Returns the scale to restore, or
    /// `None` for a stale or cancelled ticket.
    pub fn finish(&mut self, ticket: &BounceTicket) -> Option<f32> {
        if ticket.is_cancelled() {
            return None;
        }
        match self.active {
            Some(a) if a.generation == ticket.generation => {
                self.active = None;
                Some(a.restore_scale)
            }
            _ => None,
        }
    }

    /// Invalidate every outstanding ticket and drop the running bounce.
    pub fn cancel_all(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounce_then_restore() {
        let mut b = ScaleBounce::default();
        let (scale, ticket) = b.trigger(0.3);
        assert_relative_eq!(scale, 0.36, epsilon = 1e-6);
        assert_eq!(b.active_scale(), Some(scale));
        assert_eq!(b.finish(&ticket), Some(0.3));
        assert!(!b.is_active());
        assert_eq!(b.finish(&ticket), None);
    }

    #[test]
    fn overlapping_bounce_keeps_first_restore_scale() {
        let mut b = ScaleBounce::default();
        let (s1, first) = b.trigger(0.3);
        let (s2, second) = b.trigger(s1);
        assert_relative_eq!(s2, s1);
        assert_eq!(b.finish(&first), None);
        assert!(b.is_active());
        assert_eq!(b.finish(&second), Some(0.3));
    }

    #[test]
    fn cancelled_ticket_is_a_no_op() {
        let mut b = ScaleBounce::default();
        let (_, ticket) = b.trigger(0.3);
        b.cancel_all();
        assert!(ticket.is_cancelled());
        assert_eq!(b.finish(&ticket), None);
        // A fresh bounce after cancellation works normally
        let (_, next) = b.trigger(0.3);
        assert!(!next.is_cancelled());
        assert_eq!(b.finish(&next), Some(0.3));
    }
}
