pub mod contact;
pub mod delivery;
pub mod menu;
