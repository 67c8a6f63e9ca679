pub mod config;
pub mod logging;

pub mod fetch;
pub mod metadata;
pub mod storage;
pub mod url_model;
