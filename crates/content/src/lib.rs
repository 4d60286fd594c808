mod builtin;
pub mod load;
pub mod model;
pub mod section;

pub use load::ContentError;
pub use model::{ContactChannel, Hero, Project, SiteContent, Skill, SocialLink};
pub use section::SectionId;
