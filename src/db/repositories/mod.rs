pub mod access_log;
pub mod image_request;
pub mod profile;
pub mod user;
