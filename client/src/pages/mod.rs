//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` composes the sections in
//! order and delegates rendering details to `components`.

pub mod home;
