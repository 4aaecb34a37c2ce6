pub mod actions_json;
pub use actions_json::*;

pub mod donate_get;
pub use donate_get::*;

pub mod donate_post;
pub use donate_post::*;

pub mod landing_page;
pub use landing_page::*;
