pub mod api;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod direction;
pub mod icons;
pub mod remote_options;
