//! Challenge definitions and the progress book.

use super::data::ALL_CHALLENGES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a challenge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Kills, optionally of one monster.
    Slay,
    CollectSilver,
    ExploreRooms,
    SpendSilver,
    /// Highest level reached. Progress is a maximum, not a sum.
    ReachLevel,
}

/// Static definition of a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ChallengeKind,
    /// Only progress for this name counts (e.g. a monster to slay).
    pub target: Option<&'static str>,
    pub goal: u32,
}

impl ChallengeDef {
    fn accepts(&self, kind: ChallengeKind, target: Option<&str>) -> bool {
        self.kind == kind && (self.target.is_none() || self.target == target)
    }
}

/// Challenge progress, kept across runs. The host saves it as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengeBook {
    /// Challenge id to current progress.
    pub progress: HashMap<String, u32>,
    /// Completed challenge ids in completion order.
    pub completed: Vec<String>,
}

impl ChallengeBook {
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|c| c == id)
    }

    pub fn progress_for(&self, id: &str) -> u32 {
        self.progress.get(id).copied().unwrap_or(0)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Add progress to every matching challenge that is not yet complete.
    /// Returns the challenges this update completed.
    pub fn record_progress(
        &mut self,
        kind: ChallengeKind,
        target: Option<&str>,
        amount: u32,
    ) -> Vec<&'static ChallengeDef> {
        let mut newly_completed = Vec::new();
        for def in ALL_CHALLENGES.iter().filter(|d| d.accepts(kind, target)) {
            if self.is_completed(def.id) {
                continue;
            }
            let entry = self.progress.entry(def.id.to_string()).or_insert(0);
            *entry = match kind {
                ChallengeKind::ReachLevel => (*entry).max(amount),
                _ => entry.saturating_add(amount),
            };
            if *entry >= def.goal {
                self.completed.push(def.id.to_string());
                newly_completed.push(def);
            }
        }
        newly_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accumulates_until_goal() {
        let mut book = ChallengeBook::default();
        assert!(book.record_progress(ChallengeKind::ExploreRooms, None, 20).is_empty());
        let done = book.record_progress(ChallengeKind::ExploreRooms, None, 5);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "deep-delver");
        assert!(book.is_completed("deep-delver"));

        // Completed challenges stop counting
        assert!(book.record_progress(ChallengeKind::ExploreRooms, None, 5).is_empty());
        assert_eq!(book.progress_for("deep-delver"), 25);
    }

    #[test]
    fn test_target_must_match() {
        let mut book = ChallengeBook::default();
        book.record_progress(ChallengeKind::Slay, Some("Goblin"), 1);
        book.record_progress(ChallengeKind::Slay, Some("Medusa"), 1);
        assert_eq!(book.progress_for("goblin-bane"), 1);
        assert_eq!(book.progress_for("troll-hunter"), 0);
        // Untargeted slay challenges count everything
        assert_eq!(book.progress_for("monster-slayer"), 2);
    }

    #[test]
    fn test_reach_level_keeps_the_maximum() {
        let mut book = ChallengeBook::default();
        book.record_progress(ChallengeKind::ReachLevel, None, 2);
        book.record_progress(ChallengeKind::ReachLevel, None, 2);
        assert_eq!(book.progress_for("seasoned"), 2);
        let done = book.record_progress(ChallengeKind::ReachLevel, None, 3);
        assert_eq!(done.iter().map(|d| d.id).collect::<Vec<_>>(), vec!["seasoned"]);
    }

    #[test]
    fn test_book_json_roundtrip_and_partial_blob() {
        let mut book = ChallengeBook::default();
        book.record_progress(ChallengeKind::SpendSilver, None, 40);
        let json = serde_json::to_string(&book).unwrap();
        let loaded: ChallengeBook = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, book);

        let partial: ChallengeBook = serde_json::from_str(r#"{"progress":{"hoarder":7}}"#).unwrap();
        assert_eq!(partial.progress_for("hoarder"), 7);
        assert!(partial.completed.is_empty());
    }
}
