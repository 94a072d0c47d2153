pub mod components;
pub mod html;
pub mod layout;
pub mod pages;

pub use layout::Toast;
