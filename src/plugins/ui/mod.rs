//! On-screen tooling.

pub mod debug_hud;
