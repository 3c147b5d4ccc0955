//! Auxiliary tables shipped alongside the lessons.

use crate::domain::{RewardKey, WeekKey};

pub static WEEKLY_THEMES: &[(WeekKey, &str)] = &[
    (WeekKey::Week1, "The Awakening - Discovering the fundamentals of code"),
    (WeekKey::Week2, "The Journey Begins - Building tools from loops, lists and functions"),
    (WeekKey::Week3, "The Advanced Trials - Mastering complex skills and integration"),
    (WeekKey::Week4, "The Master's Path - Thinking in algorithms and proving code with tests"),
    (WeekKey::Week5, "The Final Ascent - Designing and shipping a creation of your own"),
];

pub static GAUNTLET_TITLE: &str = "The Gauntlet Awaits";

pub static GAUNTLET_DESCRIPTION: &str = "The lessons are complete, but the realm is not yet at peace. Beyond the summit lies the Gauntlet: a chain of open challenges with no scrolls, no hints and no set path. Every skill you have earned will be tested in new combinations, and only your own judgment will guide you.";

pub static GAUNTLET_SEND_OFF: &str = "I have taught you everything a mentor can teach. From here on, the code you write is your own legend. Go, hero. The Gauntlet is waiting, and so is the rest of your story.";

pub static REWARDS: &[(RewardKey, &str)] = &[
    (RewardKey::WeekCompletion, "Mark of honor and a celebration scene at the end of each week"),
    (RewardKey::MentorUnlocks, "New mentor wisdom and bonus stories unlocked as the journey progresses"),
    (RewardKey::SkillMilestones, "Skill badges awarded for mastering each core concept"),
    (RewardKey::Graduation, "Grand ceremony and Gauntlet unlock with full fanfare"),
];
