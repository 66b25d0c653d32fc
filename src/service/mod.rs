//! Document access, validation, and seeding.

pub mod documents;
pub mod seed;
pub mod validation;

pub use documents::{create_document, find_one, get_documents, shape_document, shape_documents};
pub use seed::{sample_members, sample_projects, sample_team, seed_sample_data, SeedOutcome};
pub use validation::Validate;
