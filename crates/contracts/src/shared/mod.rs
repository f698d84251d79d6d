pub mod config;
pub mod live_update;
pub mod money;
pub mod resource;
pub mod table;
pub mod validation;
