pub mod ai_model;

pub use ai_model::{AiModelDetail, catalog};
