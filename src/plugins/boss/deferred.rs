//! Tick-keyed deferred actions.
//!
//! Patterns that stagger their effects queue `(due_tick, boss, action)` entries here. The
//! encounter drains them at the start of its own update, so delayed effects run on the fixed
//! tick in scheduling order, and one call cancels a boss's whole backlog.

use super::instance::BossId;
use super::patterns::AttackPattern;

/// Effect a pattern left behind to run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Laser column under the boss's position at fire time.
    FireLaserColumn,
    /// One staggered missile.
    FireMissile,
    /// One pulse shockwave ring.
    FirePulseRing,
    /// Charge is over; return to the hover line.
    EndCharge,
    /// Shield expires.
    DropShield,
    /// A whole pattern, used by composites such as the ultimate.
    RunPattern(AttackPattern),
}

#[derive(Clone, Copy, Debug)]
pub struct Scheduled {
    pub due: u64,
    pub boss: BossId,
    pub action: DeferredAction,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl DeferredQueue {
    pub fn schedule(&mut self, due: u64, boss: BossId, action: DeferredAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { due, boss, action, seq });
    }

    /// Remove and return everything due at or before `now`, ordered by due tick and then by
    /// scheduling order.
    pub fn take_due(&mut self, now: u64) -> Vec<Scheduled> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due
    }

    /// Drop every action scheduled for `boss`.
    pub fn cancel_boss(&mut self, boss: BossId) {
        self.pending.retain(|s| s.boss != boss);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn pending_for(&self, boss: BossId) -> usize {
        self.pending.iter().filter(|s| s.boss == boss).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_due_returns_only_due_actions_in_order() {
        let mut q = DeferredQueue::default();
        let b = BossId(1);
        q.schedule(30, b, DeferredAction::EndCharge);
        q.schedule(10, b, DeferredAction::FireMissile);
        q.schedule(10, b, DeferredAction::FireLaserColumn);
        q.schedule(50, b, DeferredAction::DropShield);

        let due = q.take_due(30);
        let actions: Vec<_> = due.iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                DeferredAction::FireMissile,
                DeferredAction::FireLaserColumn,
                DeferredAction::EndCharge,
            ]
        );
        assert_eq!(q.len(), 1);
        assert!(q.take_due(49).is_empty());
        assert_eq!(q.take_due(50).len(), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn cancel_boss_leaves_other_bosses_alone() {
        let mut q = DeferredQueue::default();
        q.schedule(5, BossId(1), DeferredAction::DropShield);
        q.schedule(5, BossId(2), DeferredAction::DropShield);
        q.schedule(9, BossId(1), DeferredAction::EndCharge);

        q.cancel_boss(BossId(1));

        assert_eq!(q.pending_for(BossId(1)), 0);
        assert_eq!(q.pending_for(BossId(2)), 1);
    }
}
