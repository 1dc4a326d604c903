pub mod accept;
pub mod apply;
pub mod auth;
pub mod backup;
pub mod log;
pub mod post;
