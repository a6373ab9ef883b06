/// Common test utilities and fixtures
use mpd_playback::memory::{InMemoryPlayback, InMemoryTracklist, SoftwareMixer};
use mpd_playback::{Millis, ModeState, PlaybackSession, PlaybackState, SessionConfig, Tlid};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// A session wired to in-memory actors the test can inspect
pub struct Harness {
    pub playback: Arc<InMemoryPlayback>,
    pub tracklist: Arc<InMemoryTracklist>,
    pub mixer: Arc<SoftwareMixer>,
    pub session: PlaybackSession,
}

impl Harness {
    /// `tracks` tracks (ids `1..=tracks`), stopped, nothing loaded
    pub fn new(tracks: u32) -> Self {
        Self::with_player(tracks, PlaybackState::Stopped, None, 0)
    }

    pub fn with_player(
        tracks: u32,
        state: PlaybackState,
        current: Option<u32>,
        position: Millis,
    ) -> Self {
        Self::build(
            tracks,
            InMemoryPlayback::with_state(state, current.map(Tlid), position),
            SoftwareMixer::default(),
            SessionConfig {
                random_seed: Some(7),
                ..SessionConfig::default()
            },
        )
    }

    pub fn with_mixer(mixer: SoftwareMixer) -> Self {
        Self::build(
            0,
            InMemoryPlayback::new(),
            mixer,
            SessionConfig::default(),
        )
    }

    pub fn with_config(
        tracks: u32,
        state: PlaybackState,
        current: Option<u32>,
        position: Millis,
        config: SessionConfig,
    ) -> Self {
        Self::build(
            tracks,
            InMemoryPlayback::with_state(state, current.map(Tlid), position),
            SoftwareMixer::default(),
            config,
        )
    }

    fn build(
        tracks: u32,
        playback: InMemoryPlayback,
        mixer: SoftwareMixer,
        config: SessionConfig,
    ) -> Self {
        init_logging();

        let playback = Arc::new(playback);
        let tracklist = Arc::new(InMemoryTracklist::with_tracks(tracks));
        let mixer = Arc::new(mixer);
        let session = PlaybackSession::new(
            playback.clone(),
            tracklist.clone(),
            mixer.clone(),
            config,
        );
        Self {
            playback,
            tracklist,
            mixer,
            session,
        }
    }

    pub async fn set_modes(&self, modes: ModeState) {
        self.tracklist.set_modes(modes).await;
    }

    pub async fn current(&self) -> Option<u32> {
        self.playback.snapshot().await.current.map(|tlid| tlid.0)
    }

    pub async fn state(&self) -> PlaybackState {
        self.playback.snapshot().await.state
    }

    pub async fn tracklist_ids(&self) -> Vec<u32> {
        self.tracklist
            .tlids()
            .await
            .into_iter()
            .map(|tlid| tlid.0)
            .collect()
    }
}

/// All 16 `(repeat, random, single, consume)` combinations
pub fn all_modes() -> impl Iterator<Item = ModeState> {
    (0u8..16).map(|bits| {
        ModeState::new(
            bits & 0b1000 != 0,
            bits & 0b0100 != 0,
            bits & 0b0010 != 0,
            bits & 0b0001 != 0,
        )
    })
}
