//! Page model for the birthday greeting viewer.
//!
//! Holds everything the page does that is not rendering: the card deck and
//! its track mapping, carousel geometry and scrolling, the highlight rotator,
//! the onboarding overlay, background sparkles, the audio binding and media
//! load states. `PageSession` ties them to a timer schedule so the whole page
//! can be driven on a virtual clock.

pub mod audio;
pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;
pub mod media;
pub mod overlay;
pub mod rotator;
pub mod session;
pub mod sparkles;
pub mod state;
pub mod timers;

pub use audio::{AudioController, PlayRequest, PlayTrigger, PlaybackOutcome, PlaybackState};
pub use carousel::{rendered_cards, strip_width, Carousel, RenderedCard, ScrollDirection};
pub use config::ViewerConfig;
pub use deck::{CardEntry, Deck, Glyph, Track, TrackId, FALLBACK_IMAGE_URL};
pub use error::{AssetError, ConfigError};
pub use media::{load_image, load_media_as_data_url, LoadState};
pub use overlay::OverlayState;
pub use rotator::HighlightRotator;
pub use session::PageSession;
pub use sparkles::{Sparkle, SPARKLE_COUNT};
pub use state::PageState;
pub use timers::{PageTimer, Schedule, TimerCommand};
