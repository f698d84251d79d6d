pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud_api;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod live_updates;
pub mod modal_frame;
pub mod page_frame;
pub mod storage;
pub mod theme;
