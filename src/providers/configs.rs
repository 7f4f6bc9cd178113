pub mod base;
pub mod vapi;

pub use base::ProviderConfig;
pub use vapi::VapiProviderConfig;
