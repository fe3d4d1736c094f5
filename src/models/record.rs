use serde::{Deserialize, Serialize};

use crate::models::PlayerProfile;
use crate::rank::classify;

/// Column names of a ledger row, in order.
pub const RECORD_HEADER: [&str; 5] = ["Name", "Age", "YearsWatched", "Score", "Rank"];

/// Snapshot of one completed quiz, as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "YearsWatched")]
    pub years_watched: String,
    #[serde(rename = "Score")]
    pub score: usize,
    #[serde(rename = "Rank")]
    pub rank: String,
}

impl ResultRecord {
    /// Flatten a profile and final score, classifying the rank against `max_score`.
    pub fn new(profile: &PlayerProfile, score: usize, max_score: usize) -> Self {
        Self {
            name: profile.name().to_string(),
            age: profile.age(),
            years_watched: profile.watch_duration().label().to_string(),
            score,
            rank: classify(score, max_score).label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WatchDuration;

    #[test]
    fn test_record_from_profile() {
        let profile = PlayerProfile::new("Alli", 21, WatchDuration::TwoPlusYears).unwrap();
        let record = ResultRecord::new(&profile, 12, 15);
        assert_eq!(record.name, "Alli");
        assert_eq!(record.age, 21);
        assert_eq!(record.years_watched, "2+ years");
        assert_eq!(record.score, 12);
        assert_eq!(record.rank, "VICTORY SCREEECHHH!");
    }
}
