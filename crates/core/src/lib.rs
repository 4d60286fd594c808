pub mod geometry;
pub mod theme;
pub mod tracker;

pub use geometry::{Rect, visible_fraction};
pub use theme::ThemeToken;
pub use tracker::{Observation, SectionTracker};
