pub mod clock;
pub mod draft;
pub mod session;

pub use clock::PlaybackClock;
pub use draft::CaptionDraft;
pub use session::CaptionEditor;
