//! Collaborator interfaces
//!
//! The playback engine, the tracklist, and the mixer live outside this crate.
//! Controllers only reach them through these traits, and await every request
//! before issuing the next one.

use crate::error::ActorResult;
use crate::types::{Millis, ModeState, PlaybackState, Tlid, TrackEntry};
use async_trait::async_trait;

/// The audio playback engine
#[async_trait]
pub trait PlaybackActor: Send + Sync {
    /// Start playback of `tlid`, or of the current track when `None`
    async fn play(&self, tlid: Option<Tlid>) -> ActorResult<()>;

    /// Pause playback
    async fn pause(&self) -> ActorResult<()>;

    /// Resume paused playback
    async fn resume(&self) -> ActorResult<()>;

    /// Stop playback, keeping the current track loaded
    async fn stop(&self) -> ActorResult<()>;

    /// Seek within the current track
    ///
    /// Negative targets are clamped to zero by the implementation.
    async fn seek(&self, position: Millis) -> ActorResult<()>;

    /// Current playback state
    async fn state(&self) -> ActorResult<PlaybackState>;

    /// Id of the loaded track, if any
    async fn current_tlid(&self) -> ActorResult<Option<Tlid>>;

    /// Elapsed time of the current track
    async fn time_position(&self) -> ActorResult<Millis>;

    /// Forget the current track (end of playlist)
    async fn clear_current(&self) -> ActorResult<()>;
}

/// The tracklist (play queue) and its modes
#[async_trait]
pub trait TracklistActor: Send + Sync {
    /// All entries in tracklist order
    async fn tracks(&self) -> ActorResult<Vec<TrackEntry>>;

    /// Entries with positions in `start..end` (clamped to the tracklist)
    async fn slice(&self, start: usize, end: usize) -> ActorResult<Vec<TrackEntry>>;

    /// Entries whose id is in `tlids`
    async fn filter_by_tlid(&self, tlids: &[Tlid]) -> ActorResult<Vec<TrackEntry>>;

    /// Position of `tlid`, if present
    async fn index_of(&self, tlid: Tlid) -> ActorResult<Option<usize>>;

    /// Remove the entry with id `tlid`
    async fn remove(&self, tlid: Tlid) -> ActorResult<()>;

    /// Current modes
    async fn modes(&self) -> ActorResult<ModeState>;

    async fn set_consume(&self, on: bool) -> ActorResult<()>;

    async fn set_random(&self, on: bool) -> ActorResult<()>;

    async fn set_repeat(&self, on: bool) -> ActorResult<()>;

    async fn set_single(&self, on: bool) -> ActorResult<()>;
}

/// The volume mixer
#[async_trait]
pub trait MixerActor: Send + Sync {
    /// Current volume in percent, `None` when unknown
    async fn volume(&self) -> ActorResult<Option<u8>>;

    /// Set volume in percent, returning whether the mixer accepted it
    async fn set_volume(&self, volume: u8) -> ActorResult<bool>;
}
