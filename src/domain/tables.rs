//! Auxiliary lookup tables: weekly themes, rewards and the gauntlet intro.
//!
//! Week and reward keys are typed so that a lookup with an unknown string
//! fails at parse time instead of silently missing a map entry.

use serde::{Deserialize, Serialize};

/// Week bucket identifier (`week1`..`week5`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekKey {
    Week1,
    Week2,
    Week3,
    Week4,
    Week5,
}

impl WeekKey {
    /// Every week, in order
    pub const ALL: [WeekKey; 5] = [
        WeekKey::Week1,
        WeekKey::Week2,
        WeekKey::Week3,
        WeekKey::Week4,
        WeekKey::Week5,
    ];

    /// Contract string for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekKey::Week1 => "week1",
            WeekKey::Week2 => "week2",
            WeekKey::Week3 => "week3",
            WeekKey::Week4 => "week4",
            WeekKey::Week5 => "week5",
        }
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeekKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        WeekKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown week: {}", s))
    }
}

/// Reward category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardKey {
    WeekCompletion,
    MentorUnlocks,
    SkillMilestones,
    Graduation,
}

impl RewardKey {
    /// Every reward category, in declaration order
    pub const ALL: [RewardKey; 4] = [
        RewardKey::WeekCompletion,
        RewardKey::MentorUnlocks,
        RewardKey::SkillMilestones,
        RewardKey::Graduation,
    ];

    /// Contract string for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardKey::WeekCompletion => "weekCompletion",
            RewardKey::MentorUnlocks => "mentorUnlocks",
            RewardKey::SkillMilestones => "skillMilestones",
            RewardKey::Graduation => "graduation",
        }
    }
}

impl std::fmt::Display for RewardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RewardKey {
    type Err = anyhow::Error;

    // Keys are case-sensitive; renderers send them verbatim.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        RewardKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown reward category: {}", s))
    }
}

/// Transition text shown once the lesson catalog is exhausted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GauntletIntro {
    pub title: String,
    pub description: String,
    pub mentor_send_off: String,
}

impl GauntletIntro {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        mentor_send_off: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            mentor_send_off: mentor_send_off.into(),
        }
    }

    /// Fields paired with their contract names
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("mentorSendOff", self.mentor_send_off.as_str()),
        ]
    }
}
