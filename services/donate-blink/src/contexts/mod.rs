pub mod actions_json;
pub use actions_json::*;

pub mod action_get;
pub use action_get::*;

pub mod action_post;
pub use action_post::*;

pub mod donate_query;
pub use donate_query::*;
