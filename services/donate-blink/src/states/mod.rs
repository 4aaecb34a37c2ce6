pub mod asset_registry;
pub use asset_registry::*;

pub mod donation_request;
pub use donation_request::*;
