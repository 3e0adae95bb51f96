pub mod api;
pub mod client;
pub mod config;
pub mod feed;
pub mod model;
pub mod oauth;
pub mod session;
pub mod store;
pub mod subscriptions;
pub mod tui;

mod tui_shell;
