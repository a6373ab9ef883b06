//! Typed playback commands and their dispatch
//!
//! Commands arrive already tokenized and converted to typed arguments; the
//! framing layer owns parsing and renders the replies.

use crate::error::Result;
use crate::session::PlaybackSession;
use crate::types::PauseRequest;
use tracing::debug;

/// A playback-control command with typed arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Consume(bool),
    Random(bool),
    Repeat(bool),
    Single(bool),
    Next,
    Previous,
    Pause(PauseRequest),
    Play(Option<i64>),
    PlayId(i64),
    Stop,
    Seek { songpos: u32, seconds: f64 },
    SeekId { tlid: u32, seconds: f64 },
    SeekCur(String),
    SetVol(i64),
    Volume(i64),
    Crossfade(u32),
    MixRampDb(String),
    MixRampDelay(u32),
    ReplayGainMode(String),
    ReplayGainStatus,
}

impl Command {
    /// Protocol name, as used in `ACK` lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Consume(_) => "consume",
            Self::Random(_) => "random",
            Self::Repeat(_) => "repeat",
            Self::Single(_) => "single",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Pause(_) => "pause",
            Self::Play(_) => "play",
            Self::PlayId(_) => "playid",
            Self::Stop => "stop",
            Self::Seek { .. } => "seek",
            Self::SeekId { .. } => "seekid",
            Self::SeekCur(_) => "seekcur",
            Self::SetVol(_) => "setvol",
            Self::Volume(_) => "volume",
            Self::Crossfade(_) => "crossfade",
            Self::MixRampDb(_) => "mixrampdb",
            Self::MixRampDelay(_) => "mixrampdelay",
            Self::ReplayGainMode(_) => "replay_gain_mode",
            Self::ReplayGainStatus => "replay_gain_status",
        }
    }
}

/// Successful command reply: zero or more `key: value` fields before `OK`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    fields: Vec<(&'static str, String)>,
}

impl Response {
    /// Plain `OK`
    pub fn ok() -> Self {
        Self::default()
    }

    /// Add a field
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Reply lines, terminated by `OK`
    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .chain(std::iter::once("OK".to_string()))
            .collect()
    }
}

impl PlaybackSession {
    /// Run one command to completion
    pub async fn execute(&mut self, command: Command) -> Result<Response> {
        debug!(command = command.name(), "Executing command");
        self.finish_pending_stop().await;

        match command {
            Command::Consume(on) => self.set_consume(on).await?,
            Command::Random(on) => self.set_random(on).await?,
            Command::Repeat(on) => self.set_repeat(on).await?,
            Command::Single(on) => self.set_single(on).await?,
            Command::Next => self.next().await?,
            Command::Previous => self.previous().await?,
            Command::Pause(request) => self.pause(request).await?,
            Command::Play(songpos) => self.play(songpos).await?,
            Command::PlayId(tlid) => self.playid(tlid).await?,
            // Replies without waiting for the playback actor
            Command::Stop => self.stop(),
            Command::Seek { songpos, seconds } => self.seek(songpos, seconds).await?,
            Command::SeekId { tlid, seconds } => self.seekid(tlid, seconds).await?,
            Command::SeekCur(time) => self.seekcur(&time).await?,
            Command::SetVol(volume) => self.setvol(volume).await?,
            Command::Volume(change) => self.volume(change).await?,
            Command::Crossfade(seconds) => self.crossfade(seconds)?,
            Command::MixRampDb(decibels) => self.mixrampdb(&decibels)?,
            Command::MixRampDelay(seconds) => self.mixrampdelay(seconds)?,
            Command::ReplayGainMode(mode) => self.replay_gain_mode(&mode)?,
            Command::ReplayGainStatus => {
                return Ok(Response::ok().with("replay_gain_mode", self.replay_gain_status()));
            }
        }

        Ok(Response::ok())
    }
}
