pub mod applications;
pub mod jobs;
