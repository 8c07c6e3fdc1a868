//! Target selection policies.
//!
//! The engine draws each round's target through a `TargetPicker`. The
//! default is the seeded `GameRng`; tests inject fixed or scripted targets.

use std::ops::RangeInclusive;

use crate::core::GameRng;

/// Chooses the target for a new round.
///
/// Implementations must return a value inside `range`.
pub trait TargetPicker {
    fn pick(&mut self, range: RangeInclusive<i64>) -> i64;
}

impl TargetPicker for GameRng {
    fn pick(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.gen_inclusive(range)
    }
}

/// Always picks the same target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTarget(pub i64);

impl TargetPicker for FixedTarget {
    fn pick(&mut self, range: RangeInclusive<i64>) -> i64 {
        assert!(
            range.contains(&self.0),
            "Fixed target {} outside range {:?}",
            self.0,
            range
        );
        self.0
    }
}

/// Picks targets from a list in order, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct TargetSequence {
    targets: Vec<i64>,
    next: usize,
}

impl TargetSequence {
    pub fn new(targets: impl Into<Vec<i64>>) -> Self {
        let targets = targets.into();
        assert!(!targets.is_empty(), "Target sequence must not be empty");
        Self { targets, next: 0 }
    }
}

impl TargetPicker for TargetSequence {
    fn pick(&mut self, range: RangeInclusive<i64>) -> i64 {
        let target = self.targets[self.next];
        self.next = (self.next + 1) % self.targets.len();
        FixedTarget(target).pick(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_target() {
        let mut picker = FixedTarget(42);
        assert_eq!(picker.pick(1..=100), 42);
        assert_eq!(picker.pick(42..=42), 42);
    }

    #[test]
    #[should_panic(expected = "outside range")]
    fn test_fixed_target_outside_range() {
        FixedTarget(0).pick(1..=100);
    }

    #[test]
    fn test_sequence_wraps() {
        let mut picker = TargetSequence::new(vec![3, 7]);
        let picks: Vec<_> = (0..5).map(|_| picker.pick(1..=10)).collect();
        assert_eq!(picks, vec![3, 7, 3, 7, 3]);
    }

    #[test]
    fn test_rng_picker_in_range() {
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let target = rng.pick(1..=100);
            assert!((1..=100).contains(&target));
        }
    }
}
