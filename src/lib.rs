pub mod config;
pub mod model;
pub mod provider;
pub mod session;
pub mod view;
