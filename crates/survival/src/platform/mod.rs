//! Platform backends
//!
//! Both implement [`Platform`](survival_engine::application::Platform): one
//! opens a real window, the other is scripted for tests and headless runs.

pub mod headless;
pub mod macroquad;

pub use headless::HeadlessPlatform;
pub use self::macroquad::MacroquadPlatform;
