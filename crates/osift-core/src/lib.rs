pub mod config;
pub mod logging;

pub mod acquire;
pub mod fetch;
pub mod pipeline;
pub mod retry;
pub mod search;
pub mod unpack;
pub mod url_model;
