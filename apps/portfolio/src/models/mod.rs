pub mod experience;
pub mod project;
pub mod resume;

pub use experience::Experience;
pub use project::{Category, DateRange, Project};
pub use resume::ResumeVariant;
