pub mod duration;
pub mod macros;
pub mod notifier;
pub mod options;
pub mod reply;
