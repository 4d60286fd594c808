use serde::{Deserialize, Serialize};

/// One skill card: name, proficiency percent, and an icon reference
/// (renderer-interpreted, e.g. "code" or "database").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percent, 0–100. Validated on load.
    pub level: u8,
    #[serde(default)]
    pub icon: String,
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Asset reference for the card banner. Asset hosting is outside
    /// this crate; renderers may substitute a placeholder.
    #[serde(default)]
    pub image: String,
    /// Technology tag list, rendered as pills on the card.
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default)]
    pub live_url: String,
}

/// Outbound profile link shown in the hero (e.g. GitHub, LinkedIn).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

/// One contact card in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    /// Short initials shown in the avatar disc.
    pub monogram: String,
    pub headline: String,
    pub summary: String,
    #[serde(default)]
    pub booking_url: String,
    #[serde(default)]
    pub resume_url: String,
}

/// The whole page's content, supplied as data so the rendering logic
/// stays agnostic to content changes. Read-only after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub contact: Vec<ContactChannel>,
    /// Lead-in line above the contact cards.
    #[serde(default)]
    pub contact_blurb: String,
    #[serde(default)]
    pub footer: String,
}

impl SiteContent {
    /// The content set compiled into the binary, used when no external
    /// content file is supplied.
    pub fn builtin() -> Self {
        crate::builtin::builtin_content()
    }
}
