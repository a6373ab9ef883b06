//! MPD Playback Control
//!
//! The playback section of the MPD protocol: `play`, `pause`, `stop`,
//! `next`, `previous`, the seek and volume commands, and the
//! repeat/random/single/consume toggles.
//!
//! This crate provides:
//! - Next/previous resolution under all repeat/random/single/consume combinations
//! - Resolution of the sentinel forms (`play -1`, `play` and `pause` without arguments)
//! - Track-switching seeks (`seek`, `seekid`) and relative seeks (`seekcur +N`)
//! - Absolute and relative volume with clamping
//! - MPD `ACK` error codes
//!
//! # Architecture
//!
//! `mpd-playback` owns decisions, not state:
//! - The playback engine, the tracklist, and the mixer are actors behind traits
//!   ([`PlaybackActor`], [`TracklistActor`], [`MixerActor`])
//! - Every actor request is awaited before the next one is issued
//! - Modes live with the tracklist, so separate tracklists never share them
//! - Random selections come from an injectable [`RandomSource`]
//!
//! Command-line tokenizing and reply framing belong to the protocol layer;
//! commands enter as typed [`Command`] values.
//!
//! # Example
//!
//! ```rust
//! use mpd_playback::memory::{InMemoryPlayback, InMemoryTracklist, SoftwareMixer};
//! use mpd_playback::{Command, PlaybackSession, SessionConfig, Tlid};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> mpd_playback::Result<()> {
//! let playback = Arc::new(InMemoryPlayback::new());
//! let tracklist = Arc::new(InMemoryTracklist::with_tracks(3));
//! let mixer = Arc::new(SoftwareMixer::default());
//!
//! let mut session =
//!     PlaybackSession::new(playback.clone(), tracklist, mixer, SessionConfig::default());
//!
//! session.execute(Command::Play(Some(0))).await?;
//! session.execute(Command::Next).await?;
//! assert_eq!(playback.snapshot().await.current, Some(Tlid(2)));
//!
//! let reply = session.execute(Command::ReplayGainStatus).await?;
//! assert_eq!(reply.lines(), vec!["replay_gain_mode: off", "OK"]);
//! # Ok(())
//! # }
//! ```

mod actors;
mod command;
mod config;
mod error;
pub mod memory;
mod navigation;
mod options;
mod playback;
mod seek;
mod session;
mod shuffle;
mod tracklist;
pub mod types;
mod volume;

// Public exports
pub use actors::{MixerActor, PlaybackActor, TracklistActor};
pub use command::{Command, Response};
pub use config::{SessionConfig, DEFAULT_RESTART_THRESHOLD_MS};
pub use error::{
    ActorError, ActorResult, ConfigError, MpdError, Result, ACK_ERROR_ARG, ACK_ERROR_NO_EXIST,
    ACK_ERROR_SYSTEM,
};
pub use navigation::{NavigationPolicy, NextTrack, PreviousTrack};
pub use session::PlaybackSession;
pub use shuffle::{RandomSource, StdRandom};
pub use tracklist::TracklistView;
pub use types::{Millis, ModeState, PauseRequest, PlaybackState, Tlid, TrackEntry};
