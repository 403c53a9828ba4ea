pub mod auth;
pub mod datasource;
pub mod designer;
pub mod pages;
pub mod toast;
