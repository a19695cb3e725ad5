pub mod analytics;
pub mod backup;
pub mod client;
pub mod config;
pub mod currency;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod init;
pub mod invoice;
pub mod project;
pub mod session;
