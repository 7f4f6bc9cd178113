pub mod base;
pub mod configs;
pub mod types;
pub mod vapi;
