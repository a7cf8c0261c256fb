pub use super::access_logs::Entity as AccessLogs;
pub use super::image_requests::Entity as ImageRequests;
pub use super::profiles::Entity as Profiles;
pub use super::users::Entity as Users;
