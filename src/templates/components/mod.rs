pub mod agent;
pub mod contact;
pub mod description;
pub mod gallery;
pub mod map;
pub mod mortgage;
pub mod schedule;
pub mod section;
pub mod stats;
pub mod tours;

pub use section::{section, RenderError, SectionResult};
