//! UI layer: App orchestrator, grid layout, clock painting and fonts.

pub mod app;
pub mod clock_view;
pub mod fonts;
pub mod layout;
