pub mod adaptors;
pub mod listing;
pub mod upstream;
