pub mod catalog;
pub mod error;
pub mod html;
pub mod models;
