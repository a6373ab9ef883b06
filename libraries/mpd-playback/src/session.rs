//! Per-connection playback session
//!
//! Commands for one connection run one at a time, so controllers take
//! `&mut self`. The actors are shared with the rest of the server and may be
//! changed by other sessions between commands.

use crate::actors::{MixerActor, PlaybackActor, TracklistActor};
use crate::config::SessionConfig;
use crate::navigation::NavigationPolicy;
use crate::shuffle::{RandomSource, StdRandom};
use crate::types::Millis;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Playback-control state and actor handles for one client session
pub struct PlaybackSession {
    pub(crate) playback: Arc<dyn PlaybackActor>,
    pub(crate) tracklist: Arc<dyn TracklistActor>,
    pub(crate) mixer: Arc<dyn MixerActor>,
    pub(crate) navigation: NavigationPolicy,

    /// Stop request still running in the background
    pub(crate) pending_stop: Option<JoinHandle<()>>,

    config: SessionConfig,
}

impl PlaybackSession {
    /// Create a session over the given actors
    pub fn new(
        playback: Arc<dyn PlaybackActor>,
        tracklist: Arc<dyn TracklistActor>,
        mixer: Arc<dyn MixerActor>,
        config: SessionConfig,
    ) -> Self {
        let random = StdRandom::new(config.random_seed);
        Self {
            playback,
            tracklist,
            mixer,
            navigation: NavigationPolicy::new(Box::new(random)),
            pending_stop: None,
            config,
        }
    }

    /// Use `random` for random-mode selections
    #[must_use]
    pub fn with_random_source(mut self, random: Box<dyn RandomSource>) -> Self {
        self.navigation.set_random_source(random);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationPolicy {
        &self.navigation
    }

    /// Elapsed time from which `previous` restarts the current track
    pub(crate) fn restart_threshold(&self) -> Millis {
        Millis::try_from(self.config.previous_restart_threshold_ms).unwrap_or(Millis::MAX)
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("navigation", &self.navigation)
            .field("stop_pending", &self.pending_stop.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
