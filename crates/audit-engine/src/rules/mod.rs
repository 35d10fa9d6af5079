pub mod images;
pub mod links;
pub mod styles;
