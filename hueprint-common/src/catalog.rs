//! Option catalog
//!
//! The fixed option pools shown by the onboarding UI. Pool sizes feed the
//! density computation, so the mapping and the `/api/options` response read
//! the same lists.

use serde::Serialize;

use crate::intent::Intent;

pub const PERSPECTIVES: &[&str] = &[
    "Career",
    "Stress",
    "Relationships",
    "Family",
    "Friendship",
    "Health",
    "Money",
    "Purpose",
    "Creativity",
    "Growth",
    "Confidence",
    "Change",
    "Loss",
    "Motivation",
    "Balance",
    "Learning",
    "Identity",
    "Spirituality",
    "Adventure",
    "Home",
    "Community",
];

pub const TONES: &[&str] = &[
    "Warm",
    "Quirky",
    "Wise",
    "Direct",
    "Laid-back",
    "Humorous",
    "Sarcastic",
    "Nerdy",
];

pub const TOPICS: &[&str] = &[
    "Sports",
    "Fitness",
    "Video games",
    "Music",
    "Pop culture",
    "Memes",
    "Board games",
    "Nature",
    "Yoga",
    "Gardening",
    "Cooking",
    "Animals",
    "Photography",
    "Tarot",
    "Mythology",
    "Dreams",
    "Books",
    "Philosophy",
    "History",
    "Movies",
];

pub const PERSPECTIVE_POOL_SIZE: usize = PERSPECTIVES.len();
pub const TONE_POOL_SIZE: usize = TONES.len();
pub const TOPIC_POOL_SIZE: usize = TOPICS.len();

/// One multi-select group as presented to the UI
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub pool_size: usize,
    pub options: Vec<&'static str>,
}

impl OptionGroup {
    fn from_pool(pool: &'static [&'static str]) -> Self {
        Self {
            pool_size: pool.len(),
            options: pool.to_vec(),
        }
    }
}

/// Every option pool the onboarding questionnaire presents
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    pub intents: Vec<&'static str>,
    pub perspectives: OptionGroup,
    pub tones: OptionGroup,
    pub topics: OptionGroup,
}

impl OptionCatalog {
    pub fn standard() -> Self {
        Self {
            intents: Intent::all_variants().iter().map(Intent::label).collect(),
            perspectives: OptionGroup::from_pool(PERSPECTIVES),
            tones: OptionGroup::from_pool(TONES),
            topics: OptionGroup::from_pool(TOPICS),
        }
    }
}
