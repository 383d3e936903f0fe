//! Declarative animation parameters.
//!
//! Nothing here keeps state. `transition` describes reveal entrances,
//! `ambient` the always-on decorative loops, and `scroll` the contact
//! backdrop that follows scroll position.

pub mod ambient;
pub mod scroll;
pub mod transition;

pub use transition::{Easing, Pose, RevealMotion, Transition, stagger};
