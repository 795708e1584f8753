//! Tier selection for one role

use shared::models::{MembershipTier, TierChoice};
use std::collections::BTreeSet;
use std::fmt;

/// Either "every tier" or a specific set of tiers
///
/// `All` and specific tiers are mutually exclusive: selecting `All` clears
/// the specific tiers, selecting a specific tier drops `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierSet {
    All,
    Specific(BTreeSet<MembershipTier>),
}

impl Default for TierSet {
    fn default() -> Self {
        TierSet::Specific(BTreeSet::new())
    }
}

impl TierSet {
    /// Fold choices in order, last write wins
    pub fn from_choices<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = TierChoice>,
    {
        let mut set = TierSet::default();
        for choice in choices {
            set.select(choice);
        }
        set
    }

    pub fn select(&mut self, choice: TierChoice) {
        match choice {
            TierChoice::All => *self = TierSet::All,
            TierChoice::Tier(tier) => match self {
                TierSet::Specific(tiers) => {
                    tiers.insert(tier);
                }
                TierSet::All => *self = TierSet::Specific(BTreeSet::from([tier])),
            },
        }
    }

    /// Remove a choice; deselecting a tier that is covered only by `All` is a no-op
    pub fn deselect(&mut self, choice: TierChoice) {
        match choice {
            TierChoice::All => {
                if self.is_all() {
                    *self = TierSet::default();
                }
            }
            TierChoice::Tier(tier) => {
                if let TierSet::Specific(tiers) = self {
                    tiers.remove(&tier);
                }
            }
        }
    }

    pub fn contains(&self, tier: MembershipTier) -> bool {
        match self {
            TierSet::All => true,
            TierSet::Specific(tiers) => tiers.contains(&tier),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TierSet::Specific(tiers) if tiers.is_empty())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TierSet::All)
    }

    /// Wire form, lowest tier first
    pub fn choices(&self) -> Vec<TierChoice> {
        match self {
            TierSet::All => vec![TierChoice::All],
            TierSet::Specific(tiers) => tiers.iter().copied().map(TierChoice::Tier).collect(),
        }
    }
}

impl fmt::Display for TierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierSet::All => f.write_str("all tiers"),
            TierSet::Specific(tiers) if tiers.is_empty() => f.write_str("no tiers"),
            TierSet::Specific(tiers) => {
                let names: Vec<&str> = tiers.iter().map(MembershipTier::as_str).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_replaces_specific() {
        let set = TierSet::from_choices([
            TierChoice::Tier(MembershipTier::Silver),
            TierChoice::All,
        ]);
        assert_eq!(set, TierSet::All);
    }

    #[test]
    fn test_specific_replaces_all() {
        let set = TierSet::from_choices([
            TierChoice::All,
            TierChoice::Tier(MembershipTier::Silver),
        ]);
        assert_eq!(
            set,
            TierSet::Specific(BTreeSet::from([MembershipTier::Silver]))
        );
        assert!(!set.contains(MembershipTier::Gold));
    }

    #[test]
    fn test_all_and_specific_never_coexist() {
        let mut set = TierSet::default();
        for choice in [
            TierChoice::Tier(MembershipTier::Bronze),
            TierChoice::All,
            TierChoice::Tier(MembershipTier::Gold),
            TierChoice::Tier(MembershipTier::None),
        ] {
            set.select(choice);
            let choices = set.choices();
            assert!(!(choices.contains(&TierChoice::All) && choices.len() > 1));
        }
        assert_eq!(
            set.choices(),
            vec![
                TierChoice::Tier(MembershipTier::None),
                TierChoice::Tier(MembershipTier::Gold),
            ]
        );
    }

    #[test]
    fn test_deselect() {
        let mut set = TierSet::from_choices([TierChoice::Tier(MembershipTier::Gold)]);
        set.deselect(TierChoice::Tier(MembershipTier::Gold));
        assert!(set.is_empty());

        let mut all = TierSet::All;
        all.deselect(TierChoice::Tier(MembershipTier::Gold));
        assert!(all.is_all());
        all.deselect(TierChoice::All);
        assert!(all.is_empty());
    }

    #[test]
    fn test_all_contains_none_tier() {
        assert!(TierSet::All.contains(MembershipTier::None));
    }

    #[test]
    fn test_display() {
        assert_eq!(TierSet::All.to_string(), "all tiers");
        assert_eq!(TierSet::default().to_string(), "no tiers");
        let set = TierSet::from_choices([
            TierChoice::Tier(MembershipTier::Gold),
            TierChoice::Tier(MembershipTier::Bronze),
        ]);
        assert_eq!(set.to_string(), "BRONZE, GOLD");
    }
}
