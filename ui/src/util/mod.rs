pub mod auth;
pub mod browser;
pub mod pointer;
pub mod session;
