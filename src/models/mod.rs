pub mod activities;
pub mod api_models;

pub use activities::Activity;
pub use api_models::{EmailQuery, ErrorDetail, MessageResponse};
