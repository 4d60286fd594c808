//! Integration test: simulate a user scrolling through the full page and
//! verify reveal monotonicity, active-section transitions, and teardown.

use folio_content::SectionId;
use folio_core::geometry::{Rect, visible_fraction};
use folio_core::tracker::{Observation, SectionTracker};

const VIEWPORT_H: f32 = 600.0;
const SECTION_H: f32 = 900.0;
const PAGE_W: f32 = 800.0;

/// Sections stacked vertically in page order, as the page lays them out.
fn section_rect(section: SectionId, scroll_y: f32) -> Rect {
    let top = section.index() as f32 * SECTION_H - scroll_y;
    Rect::new(0.0, top, PAGE_W, SECTION_H)
}

/// One frame's observation batch at a given scroll position.
fn batch_at(scroll_y: f32) -> Vec<Observation> {
    let viewport = Rect::new(0.0, 0.0, PAGE_W, VIEWPORT_H);
    SectionId::ALL
        .into_iter()
        .map(|section| Observation {
            section,
            fraction: visible_fraction(section_rect(section, scroll_y), viewport),
        })
        .collect()
}

#[test]
fn scroll_through_page_and_back() {
    let mut tracker = SectionTracker::new(0.3);

    // Fresh load, no scrolling: only home is meaningfully visible.
    tracker.observe(batch_at(0.0));
    assert!(tracker.is_revealed(SectionId::Home));
    assert!(!tracker.is_revealed(SectionId::Skills));
    assert_eq!(tracker.active(), SectionId::Home);

    // Scroll down in small steps until the skills section dominates.
    let mut scroll_y = 0.0;
    while scroll_y < SectionId::Skills.index() as f32 * SECTION_H {
        scroll_y += 120.0;
        tracker.observe(batch_at(scroll_y));
    }
    assert!(tracker.is_revealed(SectionId::About));
    assert!(tracker.is_revealed(SectionId::Skills));
    assert_eq!(tracker.active(), SectionId::Skills);
    assert!(!tracker.is_revealed(SectionId::Contact));

    // Scroll back to the top: skills stays revealed, home is active again.
    tracker.observe(batch_at(0.0));
    assert!(tracker.is_revealed(SectionId::Skills));
    assert_eq!(tracker.active(), SectionId::Home);
}

#[test]
fn full_page_scroll_reveals_everything_once() {
    let mut tracker = SectionTracker::new(0.3);
    let page_bottom = (SectionId::COUNT as f32) * SECTION_H - VIEWPORT_H;

    // Record the first scroll position where each section reveals.
    let mut first_revealed: Vec<Option<f32>> = vec![None; SectionId::COUNT];
    let mut scroll_y = 0.0;
    while scroll_y <= page_bottom {
        tracker.observe(batch_at(scroll_y));
        for section in SectionId::ALL {
            if tracker.is_revealed(section) && first_revealed[section.index()].is_none() {
                first_revealed[section.index()] = Some(scroll_y);
            }
        }
        scroll_y += 60.0;
    }

    // Every section revealed, in page order.
    let mut prev = f32::NEG_INFINITY;
    for section in SectionId::ALL {
        let at = first_revealed[section.index()];
        assert!(at.is_some(), "{section} never revealed");
        let at = at.unwrap_or(0.0);
        assert!(at >= prev, "{section} revealed out of page order");
        prev = at;
    }
    assert_eq!(tracker.active(), SectionId::Contact);
}

#[test]
fn active_always_crossed_threshold_in_its_batch() {
    let mut tracker = SectionTracker::new(0.3);
    let mut scroll_y = 0.0;
    while scroll_y < 4.0 * SECTION_H {
        let batch = batch_at(scroll_y);
        let prior = tracker.active();
        tracker.observe(batch.clone());
        let active = tracker.active();
        let crossed = batch
            .iter()
            .any(|o| o.section == active && o.fraction >= 0.3);
        assert!(
            crossed || active == prior,
            "active {active} neither crossed the threshold nor carried over"
        );
        scroll_y += 233.0;
    }
}

#[test]
fn teardown_mid_scroll_freezes_state() {
    let mut tracker = SectionTracker::new(0.3);
    tracker.observe(batch_at(0.0));
    tracker.observe(batch_at(SECTION_H));
    let active_before = tracker.active();
    let revealed_before: Vec<bool> = SectionId::ALL
        .into_iter()
        .map(|s| tracker.is_revealed(s))
        .collect();

    tracker.detach();

    // Scroll events keep arriving after teardown; none may land.
    tracker.observe(batch_at(3.0 * SECTION_H));
    tracker.observe(batch_at(4.0 * SECTION_H));

    assert_eq!(tracker.active(), active_before);
    let revealed_after: Vec<bool> = SectionId::ALL
        .into_iter()
        .map(|s| tracker.is_revealed(s))
        .collect();
    assert_eq!(revealed_after, revealed_before);
}
