mod account;
mod models;

pub use account::{cmd_account_create, cmd_account_delete};
pub use models::cmd_list_models;
