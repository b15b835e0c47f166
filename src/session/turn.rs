//! Hot-seat turn rotation.
//!
//! `TurnOrder` is a fixed-size circular buffer of seats with a head pointer.
//! Rotating left moves the head; the buffer itself is never reallocated or
//! reordered, so it stays a permutation of the session's seats.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::PlayerId;

/// Rotating view of the session's seats. The entrant at the head holds the
/// turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    slots: SmallVec<[PlayerId; 4]>,
    head: usize,
}

impl TurnOrder {
    /// Seats in selection order, head at seat 0.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            slots: PlayerId::all(player_count).collect(),
            head: 0,
        }
    }

    /// Number of entrants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a turn order has at least one entrant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The entrant at the head.
    #[must_use]
    pub fn front(&self) -> PlayerId {
        self.slots[self.head]
    }

    /// Move the front entrant to the back.
    pub fn rotate_left(&mut self) {
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Entrants in rotation order, starting at the head.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        let (back, front) = self.slots.split_at(self.head);
        front.iter().chain(back.iter()).copied()
    }

    /// True when the slots hold each of `player_count` seats exactly once and
    /// the head points into them.
    #[must_use]
    pub fn covers_seats(&self, player_count: usize) -> bool {
        if self.slots.len() != player_count || self.head >= player_count {
            return false;
        }
        let mut seen: SmallVec<[bool; 4]> = smallvec![false; player_count];
        self.slots.iter().all(|id| match seen.get_mut(id.index()) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }

    /// Compute the next turn without touching `self`.
    ///
    /// Rotates left one step at a time, at most `len` times, and returns the
    /// rotated order as soon as its head is eligible. `None` means no entrant
    /// is eligible: the game is complete. The current head is considered
    /// last, after a full rotation.
    #[must_use]
    pub fn next_turn(&self, is_eligible: impl Fn(PlayerId) -> bool) -> Option<TurnOrder> {
        let mut order = self.clone();
        for _ in 0..order.len() {
            order.rotate_left();
            if is_eligible(order.front()) {
                return Some(order);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(ids: &[u8]) -> Vec<PlayerId> {
        ids.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_new_order() {
        let order = TurnOrder::new(3);

        assert_eq!(order.len(), 3);
        assert_eq!(order.front(), PlayerId::new(0));
        assert_eq!(order.iter().collect::<Vec<_>>(), seats(&[0, 1, 2]));
    }

    #[test]
    fn test_rotate_left_wraps() {
        let mut order = TurnOrder::new(3);

        order.rotate_left();
        assert_eq!(order.iter().collect::<Vec<_>>(), seats(&[1, 2, 0]));
        order.rotate_left();
        order.rotate_left();
        assert_eq!(order.iter().collect::<Vec<_>>(), seats(&[0, 1, 2]));
    }

    #[test]
    fn test_next_turn_round_robin() {
        let order = TurnOrder::new(3);

        let next = order.next_turn(|_| true).unwrap();
        assert_eq!(next.front(), PlayerId::new(1));
        let next = next.next_turn(|_| true).unwrap();
        assert_eq!(next.front(), PlayerId::new(2));
        let next = next.next_turn(|_| true).unwrap();
        assert_eq!(next.front(), PlayerId::new(0));

        // Pure: the input order is untouched.
        assert_eq!(order.front(), PlayerId::new(0));
    }

    #[test]
    fn test_next_turn_skips_finished() {
        let order = TurnOrder::new(4);

        let next = order.next_turn(|p| p != PlayerId::new(1)).unwrap();
        assert_eq!(next.front(), PlayerId::new(2));
        assert_eq!(next.iter().collect::<Vec<_>>(), seats(&[2, 3, 0, 1]));
    }

    #[test]
    fn test_next_turn_returns_to_self_last() {
        let order = TurnOrder::new(3);

        let next = order.next_turn(|p| p == PlayerId::new(0)).unwrap();
        assert_eq!(next.front(), PlayerId::new(0));
    }

    #[test]
    fn test_next_turn_none_when_complete() {
        let order = TurnOrder::new(2);
        assert!(order.next_turn(|_| false).is_none());
    }

    #[test]
    fn test_single_entrant() {
        let order = TurnOrder::new(1);
        let next = order.next_turn(|_| true).unwrap();
        assert_eq!(next.front(), PlayerId::new(0));
    }

    #[test]
    fn test_covers_seats() {
        let mut order = TurnOrder::new(3);
        order.rotate_left();
        assert!(order.covers_seats(3));
        assert!(!order.covers_seats(2));

        let repeated = TurnOrder {
            slots: SmallVec::from_slice(&seats(&[0, 0, 2])),
            head: 0,
        };
        assert!(!repeated.covers_seats(3));

        let foreign = TurnOrder {
            slots: SmallVec::from_slice(&seats(&[0, 7])),
            head: 0,
        };
        assert!(!foreign.covers_seats(2));

        let stray_head = TurnOrder {
            slots: SmallVec::from_slice(&seats(&[0, 1])),
            head: 2,
        };
        assert!(!stray_head.covers_seats(2));
    }
}
