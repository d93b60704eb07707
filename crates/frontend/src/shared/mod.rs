pub mod api_utils;
pub mod config;
pub mod icons;
pub mod list_utils;
