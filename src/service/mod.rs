pub mod abbreviate;
pub mod aggregate;
pub mod classify;
pub mod data_manager;
pub mod format;
pub mod riotapi;
