pub mod builder;
pub mod data_modeler;
pub mod designer;
pub mod landing;
pub mod login;
pub mod pages_manager;
pub mod register;
