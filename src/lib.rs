pub mod ack;
pub mod capability;
pub mod gui;
pub mod logging;
pub mod overlay;
pub mod presentation;
pub mod settings;
pub mod timer;
pub mod toast_log;
