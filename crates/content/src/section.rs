use serde::{Deserialize, Serialize};

/// Closed set of page regions, in page order.
///
/// The page renders exactly these sections top to bottom, and the
/// navigation bar shows one entry per section in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page order. Nav order and scroll order follow this.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Machine identifier (lowercase, stable across releases).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Human-readable nav label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`], usable as an array index for
    /// per-section state.
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Skills => 2,
            SectionId::Projects => 3,
            SectionId::Contact => 4,
        }
    }

    /// Look up a section by its machine identifier.
    ///
    /// Unknown identifiers are not an error at this level — callers
    /// decide whether to ignore or report them.
    pub fn from_id(id: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
