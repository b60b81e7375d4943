pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod sources;

#[cfg(test)]
pub mod test_utils;
