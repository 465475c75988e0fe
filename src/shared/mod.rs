pub mod api;
pub mod html;
pub mod persistence;
