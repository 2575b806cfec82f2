//! UI components for the greeting page.

mod app;
mod backdrop;
mod card_strip;
mod music;
mod onboarding;

pub use app::*;
pub use backdrop::*;
pub use card_strip::*;
pub use music::*;
pub use onboarding::*;
