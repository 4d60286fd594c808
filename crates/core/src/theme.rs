use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active palette.
///
/// Layout code names roles, not colors, so the dark/light palettes live
/// entirely in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    /// Primary accent (headings, active elements).
    Accent,
    /// Secondary accent for gradient-style pairings.
    AccentAlt,

    NavBackground,
    NavText,
    NavActive,

    CardBackground,
    CardBorder,

    /// Skill proficiency bar.
    BarTrack,
    BarFill,

    /// Technology tag pills on project cards.
    TagBackground,
    TagText,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&ThemeToken::BarFill).unwrap_or_default();
        assert_eq!(json, "\"BarFill\"");
        let back: ThemeToken =
            serde_json::from_str(&json).unwrap_or(ThemeToken::Background);
        assert_eq!(back, ThemeToken::BarFill);
    }
}
