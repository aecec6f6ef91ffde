pub mod app;
pub mod logger;
