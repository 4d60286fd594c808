use thiserror::Error;

use crate::model::SiteContent;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("skill {name:?} has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl SiteContent {
    /// Parse and validate external content.
    ///
    /// Empty skill/project lists are fine (those sections render empty),
    /// but individual entries must be well-formed.
    pub fn from_json(data: &[u8]) -> Result<SiteContent, ContentError> {
        let content: SiteContent = serde_json::from_slice(data)?;
        content.validate()?;
        Ok(content)
    }

    pub(crate) fn validate(&self) -> Result<(), ContentError> {
        if self.hero.name.is_empty() {
            return Err(ContentError::EmptyField("hero.name"));
        }
        for skill in &self.skills {
            if skill.name.is_empty() {
                return Err(ContentError::EmptyField("skill.name"));
            }
            if skill.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        for project in &self.projects {
            if project.title.is_empty() {
                return Err(ContentError::EmptyField("project.title"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "hero": {
            "name": "Ada Voss",
            "monogram": "AV",
            "headline": "Embedded Engineer",
            "summary": "Firmware and the tools around it.",
            "booking_url": "https://cal.com/ada-voss/intro",
            "resume_url": ""
        },
        "about": "I write firmware.",
        "skills": [
            { "name": "C", "level": 95, "icon": "code" },
            { "name": "Rust", "level": 80 }
        ],
        "projects": [
            {
                "title": "Beaconette",
                "description": "BLE beacon fleet manager.",
                "tech": ["Rust", "nRF52"],
                "repo_url": "https://github.com/adavoss/beaconette"
            }
        ],
        "social": [
            { "label": "GitHub", "url": "https://github.com/adavoss", "icon": "github" }
        ],
        "contact": [
            { "label": "Email", "value": "ada@voss.dev", "icon": "mail" }
        ],
        "footer": "hi"
    }"#;

    #[test]
    fn parses_sample_content() {
        // Fallback to builtin() makes a parse failure fail the asserts below.
        let content =
            SiteContent::from_json(SAMPLE.as_bytes()).unwrap_or_else(|_| SiteContent::builtin());
        assert_eq!(content.hero.name, "Ada Voss");
        assert_eq!(content.skills.len(), 2);
        // Omitted optional fields default.
        assert_eq!(content.skills[1].icon, "");
        assert_eq!(content.projects[0].live_url, "");
        assert_eq!(content.projects[0].tech, vec!["Rust", "nRF52"]);
    }

    #[test]
    fn rejects_level_above_100() {
        let json = SAMPLE.replace("\"level\": 95", "\"level\": 120");
        let err = SiteContent::from_json(json.as_bytes());
        assert!(matches!(
            err,
            Err(ContentError::SkillLevelOutOfRange { level: 120, .. })
        ));
    }

    #[test]
    fn rejects_empty_project_title() {
        let json = SAMPLE.replace("\"Beaconette\"", "\"\"");
        let err = SiteContent::from_json(json.as_bytes());
        assert!(matches!(err, Err(ContentError::EmptyField("project.title"))));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteContent::from_json(b"{not json");
        assert!(matches!(err, Err(ContentError::Json(_))));
    }

    #[test]
    fn missing_optional_collections_default_to_empty() {
        let json = r#"{
            "hero": {
                "name": "Ada Voss",
                "monogram": "AV",
                "headline": "Embedded Engineer",
                "summary": "Firmware."
            },
            "about": "Short."
        }"#;
        let content =
            SiteContent::from_json(json.as_bytes()).unwrap_or_else(|_| SiteContent::builtin());
        assert_eq!(content.hero.name, "Ada Voss");
        assert!(content.skills.is_empty());
        assert!(content.projects.is_empty());
        assert!(content.footer.is_empty());
    }
}
