//! The 2d6 move roll and its tiered outcome.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The narrative outcome tier of a move roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The move succeeds outright.
    Success,
    /// The move succeeds at a cost.
    Mixed,
    /// The move fails and the Keeper reacts.
    Failure,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Total Success"),
            Self::Mixed => write!(f, "Mixed Success"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// The dice half of a move roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRoll {
    /// The two d6 values.
    pub dice: [u32; 2],
    /// The rating value added to the dice.
    pub modifier: i32,
}

impl MoveRoll {
    /// Dice sum plus modifier.
    pub fn total(&self) -> i32 {
        self.dice.iter().sum::<u32>() as i32 + self.modifier
    }
}

impl fmt::Display for MoveRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.dice;
        if self.modifier == 0 {
            write!(f, "[{a}, {b}] = {}", self.total())
        } else {
            write!(f, "[{a}, {b}] {:+} = {}", self.modifier, self.total())
        }
    }
}

/// A fully resolved move roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The dice and modifier rolled.
    pub roll: MoveRoll,
    /// Dice sum plus modifier.
    pub total: i32,
    /// Narrative tier the total falls in.
    pub tier: Tier,
}

/// Tier thresholds for resolving a move roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResolver {
    /// Minimum total for a full success (default: 10).
    pub success_min: i32,
    /// Minimum total for a mixed success (default: 7).
    pub mixed_min: i32,
}

impl Default for MoveResolver {
    fn default() -> Self {
        Self {
            success_min: 10,
            mixed_min: 7,
        }
    }
}

impl MoveResolver {
    /// Roll two d6 using the given RNG, add the rating modifier, and
    /// classify the total.
    ///
    /// Announcing the result is the caller's concern; this only computes
    /// the numbers and the tier.
    pub fn resolve(&self, modifier: i32, rng: &mut StdRng) -> RollOutcome {
        let dice = [rng.random_range(1..=6), rng.random_range(1..=6)];
        self.from_dice(dice, modifier)
    }

    /// Resolve a roll whose dice are already known.
    pub fn from_dice(&self, dice: [u32; 2], modifier: i32) -> RollOutcome {
        let roll = MoveRoll { dice, modifier };
        let total = roll.total();
        RollOutcome {
            roll,
            total,
            tier: self.classify(total),
        }
    }

    /// The tier a total falls in, first match wins.
    pub fn classify(&self, total: i32) -> Tier {
        if total >= self.success_min {
            Tier::Success
        } else if total >= self.mixed_min {
            Tier::Mixed
        } else {
            Tier::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn fixed_dice_hit_each_tier() {
        let resolver = MoveResolver::default();
        assert_eq!(resolver.from_dice([5, 5], 0).tier, Tier::Success);
        assert_eq!(resolver.from_dice([3, 4], 0).tier, Tier::Mixed);
        assert_eq!(resolver.from_dice([1, 2], 0).tier, Tier::Failure);
    }

    #[test]
    fn tier_boundaries() {
        let resolver = MoveResolver::default();

        let outcome = resolver.from_dice([4, 3], 0);
        assert_eq!(outcome.total, 7);
        assert_eq!(outcome.tier, Tier::Mixed);

        let outcome = resolver.from_dice([5, 4], 0);
        assert_eq!(outcome.total, 9);
        assert_eq!(outcome.tier, Tier::Mixed);

        let outcome = resolver.from_dice([5, 5], 0);
        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.tier, Tier::Success);
    }

    #[test]
    fn modifier_shifts_the_total() {
        let resolver = MoveResolver::default();
        let outcome = resolver.from_dice([4, 4], 2);
        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.tier, Tier::Success);

        let outcome = resolver.from_dice([4, 4], -2);
        assert_eq!(outcome.total, 6);
        assert_eq!(outcome.tier, Tier::Failure);
    }

    #[test]
    fn resolve_produces_valid_dice() {
        let resolver = MoveResolver::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let outcome = resolver.resolve(0, &mut rng);
            for value in outcome.roll.dice {
                assert!((1..=6).contains(&value));
            }
            assert_eq!(outcome.total, outcome.roll.total());
        }
    }

    #[test]
    fn resolve_deterministic_with_seed() {
        let resolver = MoveResolver::default();
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            let a = resolver.resolve(1, &mut rng1);
            let b = resolver.resolve(1, &mut rng2);
            assert_eq!(a.roll.dice, b.roll.dice);
            assert_eq!(a.tier, b.tier);
        }
    }

    #[test]
    fn tier_display() {
        assert_eq!(Tier::Success.to_string(), "Total Success");
        assert_eq!(Tier::Mixed.to_string(), "Mixed Success");
        assert_eq!(Tier::Failure.to_string(), "Failure");
    }

    #[test]
    fn roll_display() {
        let roll = MoveRoll {
            dice: [3, 5],
            modifier: 0,
        };
        assert_eq!(roll.to_string(), "[3, 5] = 8");

        let roll = MoveRoll {
            dice: [3, 5],
            modifier: 2,
        };
        assert_eq!(roll.to_string(), "[3, 5] +2 = 10");

        let roll = MoveRoll {
            dice: [3, 5],
            modifier: -1,
        };
        assert_eq!(roll.to_string(), "[3, 5] -1 = 7");
    }
}
