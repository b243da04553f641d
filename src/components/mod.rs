pub mod button;
pub mod footer;
pub mod icons;
pub mod logo;
pub mod nav;
pub mod section;
pub mod testimonials;
