//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds within a track
///
/// Signed so relative seeks can pass negative targets through to the
/// playback actor, which owns clamping at zero.
pub type Millis = i64;

/// Tracklist id
///
/// Unique within a tracklist and stable across reorderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tlid(pub u32);

impl Tlid {
    /// Convert a client-supplied id, rejecting values that cannot be ids
    pub fn from_arg(value: i64) -> Option<Self> {
        u32::try_from(value).ok().map(Self)
    }
}

impl fmt::Display for Tlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the tracklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    /// Stable tracklist id
    pub tlid: Tlid,

    /// Zero-based position in the tracklist
    pub position: usize,
}

/// Playback state as reported by the playback actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Nothing playing (a current track may still be loaded)
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// The four playback modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeState {
    /// Loop the tracklist (or the current track together with `single`)
    pub repeat: bool,

    /// Play tracks in random order
    pub random: bool,

    /// Stop after the current track (or loop it together with `repeat`)
    pub single: bool,

    /// Remove tracks from the tracklist once played
    pub consume: bool,
}

impl ModeState {
    /// Build from `(repeat, random, single, consume)`
    pub const fn new(repeat: bool, random: bool, single: bool, consume: bool) -> Self {
        Self {
            repeat,
            random,
            single,
            consume,
        }
    }
}

impl fmt::Display for ModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { '.' };
        write!(
            f,
            "{}{}{}{}",
            flag(self.repeat, 'r'),
            flag(self.random, 'z'),
            flag(self.single, 's'),
            flag(self.consume, 'c')
        )
    }
}

/// Argument of the `pause` command
///
/// `pause` without an argument is the deprecated toggle form still sent by
/// some clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseRequest {
    /// No argument: pause when playing, resume when paused
    Toggle,

    /// `pause 1`
    Pause,

    /// `pause 0`
    Resume,
}

impl From<Option<bool>> for PauseRequest {
    fn from(state: Option<bool>) -> Self {
        match state {
            None => Self::Toggle,
            Some(true) => Self::Pause,
            Some(false) => Self::Resume,
        }
    }
}
