pub mod client;
pub mod mapping;
