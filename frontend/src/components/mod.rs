pub mod contact;
pub mod faq;
pub mod hero;
pub mod navbar;
pub mod reveal;
pub mod sections;
