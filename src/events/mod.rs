pub mod command;
pub mod component;
pub mod modal;
pub mod ready;
pub mod router;
