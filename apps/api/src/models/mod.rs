pub mod catalog;
pub mod profile;
pub mod roadmap;
