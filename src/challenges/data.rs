//! Static challenge definitions.

use super::types::{ChallengeDef, ChallengeKind};

/// All challenges in display order.
pub static ALL_CHALLENGES: &[ChallengeDef] = &[
    ChallengeDef {
        id: "monster-slayer",
        name: "Monster Slayer",
        description: "Defeat 20 monsters",
        kind: ChallengeKind::Slay,
        target: None,
        goal: 20,
    },
    ChallengeDef {
        id: "goblin-bane",
        name: "Goblin Bane",
        description: "Defeat 5 Goblins",
        kind: ChallengeKind::Slay,
        target: Some("Goblin"),
        goal: 5,
    },
    ChallengeDef {
        id: "skeleton-crew",
        name: "Skeleton Crew",
        description: "Defeat 5 Blood-drenched Skeletons",
        kind: ChallengeKind::Slay,
        target: Some("Blood-drenched Skeleton"),
        goal: 5,
    },
    ChallengeDef {
        id: "troll-hunter",
        name: "Troll Hunter",
        description: "Defeat 3 Small Stone Trolls",
        kind: ChallengeKind::Slay,
        target: Some("Small Stone Troll"),
        goal: 3,
    },
    ChallengeDef {
        id: "fortress-breaker",
        name: "Fortress Breaker",
        description: "Defeat the Fortress Lord",
        kind: ChallengeKind::Slay,
        target: Some("Fortress Lord"),
        goal: 1,
    },
    ChallengeDef {
        id: "hoarder",
        name: "Hoarder",
        description: "Collect 100 silver from fallen monsters",
        kind: ChallengeKind::CollectSilver,
        target: None,
        goal: 100,
    },
    ChallengeDef {
        id: "deep-delver",
        name: "Deep Delver",
        description: "Explore 25 rooms",
        kind: ChallengeKind::ExploreRooms,
        target: None,
        goal: 25,
    },
    ChallengeDef {
        id: "big-spender",
        name: "Big Spender",
        description: "Spend 75 silver at the peddler",
        kind: ChallengeKind::SpendSilver,
        target: None,
        goal: 75,
    },
    ChallengeDef {
        id: "seasoned",
        name: "Seasoned",
        description: "Reach level 3",
        kind: ChallengeKind::ReachLevel,
        target: None,
        goal: 3,
    },
];

pub fn get_challenge_def(id: &str) -> Option<&'static ChallengeDef> {
    ALL_CHALLENGES.iter().find(|c| c.id == id)
}
