pub mod activity_log;
pub mod security_settings;
pub mod users;
