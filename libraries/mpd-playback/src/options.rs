//! Playback options: mode toggles and the unimplemented mixing commands

use crate::error::{MpdError, Result};
use crate::session::PlaybackSession;
use tracing::debug;

impl PlaybackSession {
    /// `consume STATE`
    pub async fn set_consume(&mut self, on: bool) -> Result<()> {
        self.tracklist.set_consume(on).await?;
        Ok(())
    }

    /// `random STATE`
    pub async fn set_random(&mut self, on: bool) -> Result<()> {
        self.tracklist.set_random(on).await?;
        if !on {
            debug!("Random disabled, dropping random order");
            self.navigation.discard_random_order();
        }
        Ok(())
    }

    /// `repeat STATE`
    pub async fn set_repeat(&mut self, on: bool) -> Result<()> {
        self.tracklist.set_repeat(on).await?;
        Ok(())
    }

    /// `single STATE`
    pub async fn set_single(&mut self, on: bool) -> Result<()> {
        self.tracklist.set_single(on).await?;
        Ok(())
    }

    /// `crossfade SECONDS`
    pub fn crossfade(&self, _seconds: u32) -> Result<()> {
        Err(MpdError::NotImplemented)
    }

    /// `mixrampdb DECIBELS`
    pub fn mixrampdb(&self, _decibels: &str) -> Result<()> {
        Err(MpdError::NotImplemented)
    }

    /// `mixrampdelay SECONDS`
    pub fn mixrampdelay(&self, _seconds: u32) -> Result<()> {
        Err(MpdError::NotImplemented)
    }

    /// `replay_gain_mode MODE`
    pub fn replay_gain_mode(&self, _mode: &str) -> Result<()> {
        Err(MpdError::NotImplemented)
    }

    /// `replay_gain_status`; replay gain is never applied
    pub fn replay_gain_status(&self) -> &'static str {
        "off"
    }
}
