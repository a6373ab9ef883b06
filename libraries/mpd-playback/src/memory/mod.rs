//! In-memory actors
//!
//! Reference implementations of the collaborator traits. They hold no audio
//! and exist for tests and for embedding the command core without a backend.

mod mixer;
mod playback;
mod tracklist;

pub use mixer::SoftwareMixer;
pub use playback::{InMemoryPlayback, PlaybackCall, PlayerSnapshot};
pub use tracklist::InMemoryTracklist;
