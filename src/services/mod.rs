pub mod account_service;
pub mod account_service_impl;
pub use account_service::{
    AccountError, AccountService, CreateAccount, CreatedAccount, DeleteOutcome,
};
pub use account_service_impl::SeaOrmAccountService;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, LoginResult, LogoutResult, UserInfo};
pub use auth_service_impl::SeaOrmAuthService;

pub mod profile_service;
pub mod profile_service_impl;
pub use profile_service::{
    ProfileError, ProfileService, UpdateProfile, UpdatedProfile, UserProfile,
};
pub use profile_service_impl::SeaOrmProfileService;

pub mod image_service;
pub mod image_service_impl;
pub use image_service::{GenerateImage, GeneratedImage, ImageError, ImageGenerationService};
pub use image_service_impl::SeaOrmImageGenerationService;
