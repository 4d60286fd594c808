use folio_content::SectionId;
use serde::{Deserialize, Serialize};

/// One entry of an observation batch: how much of a section is
/// currently inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub section: SectionId,
    /// Fraction of the section's area inside the viewport, `[0, 1]`.
    pub fraction: f32,
}

/// Tracks which sections have been seen and which one is in focus.
///
/// Owned by the page-level controller and mutated only through
/// [`SectionTracker::observe`]; rendering reads it but never writes.
///
/// Two pieces of state:
/// - per-section `revealed` flags — monotonic, set the first time a
///   section's visible fraction crosses the threshold and never
///   cleared (drives one-shot entrance transitions);
/// - the single `active` section — overwritten by whichever observed
///   section most recently crossed the threshold (drives nav
///   highlighting). Within one batch, last processed wins.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    threshold: f32,
    revealed: [bool; SectionId::COUNT],
    active: SectionId,
    attached: bool,
}

impl SectionTracker {
    /// A fresh tracker: nothing revealed, `Home` active, attached.
    ///
    /// `threshold` is clamped to `[0, 1]`. A threshold of 0 counts any
    /// positive overlap; a threshold of 1 requires the section to be
    /// fully in view.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: [false; SectionId::COUNT],
            active: SectionId::Home,
            attached: true,
        }
    }

    /// Apply one observation batch, in the caller's order.
    ///
    /// Each observation that crosses the threshold reveals its section
    /// (idempotent) and takes over as the active section. Observations
    /// below the threshold change nothing. A no-op after [`detach`].
    ///
    /// [`detach`]: SectionTracker::detach
    pub fn observe<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = Observation>,
    {
        if !self.attached {
            return;
        }
        for obs in batch {
            if !self.crosses(obs.fraction) {
                continue;
            }
            self.revealed[obs.section.index()] = true;
            self.active = obs.section;
        }
    }

    /// Stop tracking. All later `observe` calls are no-ops, so no state
    /// mutation can happen after the hosting page is torn down.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether `section` has ever crossed the threshold.
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed[section.index()]
    }

    /// The section currently in focus for nav highlighting.
    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    fn crosses(&self, fraction: f32) -> bool {
        if self.threshold <= 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.threshold
        }
    }
}

impl Default for SectionTracker {
    /// Tracker with the page's standard 30% reveal threshold.
    fn default() -> Self {
        Self::new(0.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(section: SectionId, fraction: f32) -> Observation {
        Observation { section, fraction }
    }

    #[test]
    fn fresh_tracker_defaults() {
        let tracker = SectionTracker::new(0.3);
        for section in SectionId::ALL {
            assert!(!tracker.is_revealed(section));
        }
        assert_eq!(tracker.active(), SectionId::Home);
        assert!(tracker.is_attached());
    }

    #[test]
    fn crossing_reveals_and_activates() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::Skills, 0.45)]);
        assert!(tracker.is_revealed(SectionId::Skills));
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn below_threshold_changes_nothing() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::Skills, 0.29)]);
        assert!(!tracker.is_revealed(SectionId::Skills));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::Skills, 0.5)]);
        // Section scrolls back out of view — revealed must not reset.
        tracker.observe([obs(SectionId::Skills, 0.0)]);
        tracker.observe([obs(SectionId::Home, 1.0)]);
        assert!(tracker.is_revealed(SectionId::Skills));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::About, 0.4)]);
        tracker.observe([obs(SectionId::About, 0.9)]);
        assert!(tracker.is_revealed(SectionId::About));
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn last_crossing_in_batch_wins() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([
            obs(SectionId::Home, 0.6),
            obs(SectionId::About, 0.8),
            obs(SectionId::Skills, 0.1),
        ]);
        // Skills was below threshold; About was the last to cross.
        assert_eq!(tracker.active(), SectionId::About);
        assert!(tracker.is_revealed(SectionId::Home));
        assert!(tracker.is_revealed(SectionId::About));
        assert!(!tracker.is_revealed(SectionId::Skills));
    }

    #[test]
    fn empty_batch_keeps_active_unchanged() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::Projects, 0.5)]);
        tracker.observe([]);
        tracker.observe([obs(SectionId::Contact, 0.05)]);
        assert_eq!(tracker.active(), SectionId::Projects);
    }

    #[test]
    fn zero_threshold_counts_any_overlap() {
        let mut tracker = SectionTracker::new(0.0);
        tracker.observe([obs(SectionId::About, 0.0)]);
        assert!(!tracker.is_revealed(SectionId::About), "no overlap at all");
        tracker.observe([obs(SectionId::About, 0.001)]);
        assert!(tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn full_threshold_requires_fully_in_view() {
        let mut tracker = SectionTracker::new(1.0);
        tracker.observe([obs(SectionId::Contact, 0.99)]);
        assert!(!tracker.is_revealed(SectionId::Contact));
        tracker.observe([obs(SectionId::Contact, 1.0)]);
        assert!(tracker.is_revealed(SectionId::Contact));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(SectionTracker::new(-0.5).threshold(), 0.0);
        assert_eq!(SectionTracker::new(2.0).threshold(), 1.0);
    }

    #[test]
    fn detached_tracker_ignores_observations() {
        let mut tracker = SectionTracker::new(0.3);
        tracker.observe([obs(SectionId::About, 0.5)]);
        tracker.detach();
        tracker.observe([obs(SectionId::Contact, 1.0)]);
        assert!(!tracker.is_attached());
        assert!(!tracker.is_revealed(SectionId::Contact));
        assert_eq!(tracker.active(), SectionId::About);
    }
}
