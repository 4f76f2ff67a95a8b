pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod pages;
pub mod routes;
pub mod storage;
pub mod utils;
pub mod window;
