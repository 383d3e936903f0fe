//! Section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders static content from `content` and wraps its blocks in
//! `reveal` wrappers so entrances play once as the visitor scrolls.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod portfolio;
pub mod reveal;
pub mod skills;
pub mod testimonials;
