//! Playback controller: `play`, `playid`, `pause`, `stop`, `next`, `previous`

use crate::error::{MpdError, Result};
use crate::navigation::{NextTrack, PreviousTrack};
use crate::session::PlaybackSession;
use crate::tracklist::TracklistView;
use crate::types::{ModeState, PauseRequest, PlaybackState, Tlid};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// `play`/`playid` argument meaning "resume or continue"
const RESUME_OR_CONTINUE: i64 = -1;

impl PlaybackSession {
    /// `play [SONGPOS]`
    ///
    /// Without a position, resumes a paused track and never restarts a playing
    /// one. `-1` resumes or continues. Any other value plays the track at that
    /// tracklist position.
    pub async fn play(&mut self, songpos: Option<i64>) -> Result<()> {
        match songpos {
            None => match self.playback.state().await? {
                PlaybackState::Playing => Ok(()),
                PlaybackState::Paused => Ok(self.playback.resume().await?),
                PlaybackState::Stopped => self.continue_from_stopped().await,
            },
            Some(RESUME_OR_CONTINUE) => self.resume_or_continue().await,
            Some(position) => {
                let tlid = self.tlid_at_position(position).await?;
                self.start(tlid).await
            }
        }
    }

    /// `playid SONGID`
    pub async fn playid(&mut self, tlid: i64) -> Result<()> {
        if tlid == RESUME_OR_CONTINUE {
            return self.resume_or_continue().await;
        }
        let tlid = self.existing_tlid(tlid).await?;
        self.start(tlid).await
    }

    /// `pause [PAUSE]`
    pub async fn pause(&mut self, request: PauseRequest) -> Result<()> {
        let state = self.playback.state().await?;
        match (request, state) {
            (PauseRequest::Toggle | PauseRequest::Pause, PlaybackState::Playing) => {
                self.playback.pause().await?;
            }
            (PauseRequest::Toggle | PauseRequest::Resume, PlaybackState::Paused) => {
                self.playback.resume().await?;
            }
            _ => debug!(?request, ?state, "Pause has nothing to do"),
        }
        Ok(())
    }

    /// `stop`
    ///
    /// Does not wait for the playback actor: the request runs on a spawned
    /// task and failures are only logged. Requests issued through
    /// [`PlaybackSession::execute`] afterwards wait for it, so a later command
    /// never overtakes the stop. Must be called from within a tokio runtime.
    pub fn stop(&mut self) {
        let playback = Arc::clone(&self.playback);
        let earlier = self.pending_stop.take();
        self.pending_stop = Some(tokio::spawn(async move {
            if let Some(earlier) = earlier {
                if let Err(err) = earlier.await {
                    warn!("Earlier stop task failed: {}", err);
                }
            }
            if let Err(err) = playback.stop().await {
                warn!("Stop request failed: {}", err);
            }
        }));
    }

    /// Wait until a background stop request has reached the playback actor
    pub async fn finish_pending_stop(&mut self) {
        if let Some(pending) = self.pending_stop.take() {
            if let Err(err) = pending.await {
                warn!("Stop task failed: {}", err);
            }
        }
    }

    /// `next`
    pub async fn next(&mut self) -> Result<()> {
        let modes = self.tracklist.modes().await?;
        let tracklist = TracklistView::fetch(self.tracklist.as_ref()).await?;
        let current = self.playback.current_tlid().await?;

        match self.navigation.next_track(current, modes, &tracklist) {
            NextTrack::Track(tlid) => {
                debug!(%tlid, %modes, "Next track");
                self.start(tlid).await?;
                self.consume_played(modes, current, Some(tlid), &tracklist)
                    .await
            }
            NextTrack::EndOfPlaylist => {
                info!(%modes, "End of playlist reached");
                self.playback.stop().await?;
                self.playback.clear_current().await?;
                self.consume_played(modes, current, None, &tracklist).await
            }
        }
    }

    /// `previous`
    ///
    /// Restarts the current track instead when enough of it has elapsed.
    pub async fn previous(&mut self) -> Result<()> {
        let current = self.playback.current_tlid().await?;
        if current.is_some() {
            let elapsed = self.playback.time_position().await?;
            if elapsed >= self.restart_threshold() {
                debug!(elapsed, "Restarting current track");
                self.playback.seek(0).await?;
                return Ok(());
            }
        }

        let modes = self.tracklist.modes().await?;
        let tracklist = TracklistView::fetch(self.tracklist.as_ref()).await?;

        match self.navigation.previous_track(current, modes, &tracklist) {
            PreviousTrack::Track(tlid) => {
                debug!(%tlid, %modes, "Previous track");
                self.start(tlid).await?;
                self.consume_played(modes, current, Some(tlid), &tracklist)
                    .await
            }
            PreviousTrack::CurrentUnchanged => {
                debug!(%modes, "Previous keeps the current track");
                Ok(())
            }
        }
    }

    async fn resume_or_continue(&self) -> Result<()> {
        match self.playback.state().await? {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Paused => Ok(self.playback.resume().await?),
            PlaybackState::Stopped => self.continue_from_stopped().await,
        }
    }

    /// Start the current track, or the first one when nothing is current
    async fn continue_from_stopped(&self) -> Result<()> {
        if let Some(tlid) = self.playback.current_tlid().await? {
            return self.start(tlid).await;
        }

        match self.tracklist.slice(0, 1).await?.first() {
            Some(entry) => self.start(entry.tlid).await,
            None => {
                debug!("Tracklist is empty, nothing to play");
                Ok(())
            }
        }
    }

    pub(crate) async fn start(&self, tlid: Tlid) -> Result<()> {
        self.playback.play(Some(tlid)).await?;
        Ok(())
    }

    async fn tlid_at_position(&self, position: i64) -> Result<Tlid> {
        let bad_index = || MpdError::arg("Bad song index");
        let position = usize::try_from(position).map_err(|_| bad_index())?;
        self.tracklist
            .slice(position, position.saturating_add(1))
            .await?
            .first()
            .map(|entry| entry.tlid)
            .ok_or_else(bad_index)
    }

    async fn existing_tlid(&self, tlid: i64) -> Result<Tlid> {
        let missing = || MpdError::no_exist("No such song");
        let tlid = Tlid::from_arg(tlid).ok_or_else(missing)?;
        self.tracklist
            .filter_by_tlid(&[tlid])
            .await?
            .first()
            .map(|entry| entry.tlid)
            .ok_or_else(missing)
    }

    /// Remove the track navigation just moved away from, in consume mode
    async fn consume_played(
        &self,
        modes: ModeState,
        played: Option<Tlid>,
        target: Option<Tlid>,
        tracklist: &TracklistView,
    ) -> Result<()> {
        let Some(played) = played else {
            return Ok(());
        };
        if modes.consume && Some(played) != target && tracklist.contains(played) {
            debug!(tlid = %played, "Consuming played track");
            self.tracklist.remove(played).await?;
        }
        Ok(())
    }
}
