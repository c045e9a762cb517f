//! Engine sub-modules: time formatting and clock units, the lower-row rotator,
//! frame-driven timers, and the board that ties them together.

pub mod board;
pub mod clock;
pub mod rotator;
pub mod ticker;
