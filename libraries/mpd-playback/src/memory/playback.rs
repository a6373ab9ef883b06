//! In-memory playback engine

use crate::actors::PlaybackActor;
use crate::error::{ActorError, ActorResult};
use crate::types::{Millis, PlaybackState, Tlid};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// A request received by [`InMemoryPlayback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackCall {
    Play(Option<Tlid>),
    Pause,
    Resume,
    Stop,
    Seek(Millis),
    ClearCurrent,
}

/// Observable player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    pub current: Option<Tlid>,
    pub position: Millis,
}

#[derive(Debug)]
struct Inner {
    player: PlayerSnapshot,
    calls: Vec<PlaybackCall>,
    rejecting: bool,
}

/// Playback engine that only tracks state
///
/// Every mutating request is recorded in order, so callers can check exactly
/// which requests a command issued. Queries are not recorded.
#[derive(Debug)]
pub struct InMemoryPlayback {
    inner: Mutex<Inner>,
}

impl InMemoryPlayback {
    /// Stopped, with nothing loaded
    pub fn new() -> Self {
        Self::with_state(PlaybackState::Stopped, None, 0)
    }

    /// Start from the given state
    pub fn with_state(state: PlaybackState, current: Option<Tlid>, position: Millis) -> Self {
        Self {
            inner: Mutex::new(Inner {
                player: PlayerSnapshot {
                    state,
                    current,
                    position,
                },
                calls: Vec::new(),
                rejecting: false,
            }),
        }
    }

    /// Requests received so far
    pub async fn calls(&self) -> Vec<PlaybackCall> {
        self.inner.lock().await.calls.clone()
    }

    pub async fn snapshot(&self) -> PlayerSnapshot {
        self.inner.lock().await.player
    }

    /// Simulate elapsed playback time
    pub async fn set_time_position(&self, position: Millis) {
        self.inner.lock().await.player.position = position;
    }

    /// While set, every mutating request fails with [`ActorError::Rejected`]
    pub async fn set_rejecting(&self, rejecting: bool) {
        self.inner.lock().await.rejecting = rejecting;
    }

    /// Record `call` and apply `change` unless requests are being rejected
    async fn apply(
        &self,
        call: PlaybackCall,
        change: impl FnOnce(&mut PlayerSnapshot),
    ) -> ActorResult<()> {
        let mut inner = self.inner.lock().await;
        inner.calls.push(call);
        if inner.rejecting {
            return Err(ActorError::Rejected(format!("{call:?}")));
        }
        change(&mut inner.player);
        Ok(())
    }
}

impl Default for InMemoryPlayback {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaybackActor for InMemoryPlayback {
    async fn play(&self, tlid: Option<Tlid>) -> ActorResult<()> {
        self.apply(PlaybackCall::Play(tlid), |player| {
            if let Some(tlid) = tlid.or(player.current) {
                player.current = Some(tlid);
                player.state = PlaybackState::Playing;
                player.position = 0;
            }
        })
        .await
    }

    async fn pause(&self) -> ActorResult<()> {
        self.apply(PlaybackCall::Pause, |player| {
            if player.state == PlaybackState::Playing {
                player.state = PlaybackState::Paused;
            }
        })
        .await
    }

    async fn resume(&self) -> ActorResult<()> {
        self.apply(PlaybackCall::Resume, |player| {
            if player.state == PlaybackState::Paused {
                player.state = PlaybackState::Playing;
            }
        })
        .await
    }

    async fn stop(&self) -> ActorResult<()> {
        self.apply(PlaybackCall::Stop, |player| {
            player.state = PlaybackState::Stopped;
            player.position = 0;
        })
        .await
    }

    async fn seek(&self, position: Millis) -> ActorResult<()> {
        self.apply(PlaybackCall::Seek(position), |player| {
            if player.current.is_some() {
                player.position = position.max(0);
            }
        })
        .await
    }

    async fn state(&self) -> ActorResult<PlaybackState> {
        Ok(self.inner.lock().await.player.state)
    }

    async fn current_tlid(&self) -> ActorResult<Option<Tlid>> {
        Ok(self.inner.lock().await.player.current)
    }

    async fn time_position(&self) -> ActorResult<Millis> {
        Ok(self.inner.lock().await.player.position)
    }

    async fn clear_current(&self) -> ActorResult<()> {
        self.apply(PlaybackCall::ClearCurrent, |player| {
            player.current = None;
            player.state = PlaybackState::Stopped;
            player.position = 0;
        })
        .await
    }
}
