pub mod about;
pub mod contact;
pub mod drinks;
pub mod footer;
pub mod hero;
pub mod menu;
pub mod navbar;
pub mod specialties;
pub mod toast;
