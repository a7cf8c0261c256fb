pub mod prelude;

pub mod access_logs;
pub mod image_requests;
pub mod profiles;
pub mod sea_orm_active_enums;
pub mod users;
