pub mod config;
pub mod form;
pub mod notification;
pub mod view_state;
