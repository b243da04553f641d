pub mod carousel;
pub mod components;
pub mod content;
pub mod pages;
pub mod utils;
