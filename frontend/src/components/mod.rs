pub mod cards;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod fields;
pub mod layout;
pub mod modal;
pub mod toast;
