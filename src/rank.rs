//! Score to rank tier classification.
//!
//! The ladder is defined against the 15-question reference bank. For banks of
//! another size each threshold is scaled to the same share of the maximum,
//! rounded up, and never drops below one so that a zero score always lands in
//! the bottom tier.

use std::fmt;

/// Bank size the ladder thresholds were written for.
pub const REFERENCE_MAX_SCORE: usize = 15;

/// Rank tiers from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankTier {
    GoofyGoober,
    Victory,
    BoatingSchool,
    Barnacles,
    Plankton,
}

/// Minimum score (inclusive, reference scale) for each tier, descending.
pub const RANK_LADDER: [(usize, RankTier); 4] = [
    (13, RankTier::GoofyGoober),
    (9, RankTier::Victory),
    (5, RankTier::BoatingSchool),
    (1, RankTier::Barnacles),
];

impl RankTier {
    pub fn label(self) -> &'static str {
        match self {
            RankTier::GoofyGoober => "You are a Goofy Goober!!!!",
            RankTier::Victory => "VICTORY SCREEECHHH!",
            RankTier::BoatingSchool => "Still in Boating School",
            RankTier::Barnacles => "You are a load of barnacles",
            RankTier::Plankton => "Plankton? Is that you?",
        }
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn scaled_threshold(reference: usize, max_score: usize) -> usize {
    if max_score == REFERENCE_MAX_SCORE {
        return reference;
    }
    (reference * max_score)
        .div_ceil(REFERENCE_MAX_SCORE)
        .max(1)
}

/// Classify a final score out of `max_score`.
pub fn classify(score: usize, max_score: usize) -> RankTier {
    RANK_LADDER
        .iter()
        .find(|(min, _)| score >= scaled_threshold(*min, max_score))
        .map(|(_, tier)| *tier)
        .unwrap_or(RankTier::Plankton)
}

pub fn rank_label(score: usize, max_score: usize) -> &'static str {
    classify(score, max_score).label()
}
