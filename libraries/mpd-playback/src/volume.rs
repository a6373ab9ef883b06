//! Volume controller: `setvol`, `volume`
//!
//! `volume` reads the mixer, adds the change, and writes the result back.
//! Another session changing the volume in between is not guarded against.

use crate::error::{MpdError, Result};
use crate::session::PlaybackSession;
use tracing::debug;

const MIN_VOLUME: i64 = 0;
const MAX_VOLUME: i64 = 100;
const MAX_VOLUME_CHANGE: i64 = 100;

/// Clamp to 0-100
fn clamp_volume(volume: i64) -> u8 {
    volume.clamp(MIN_VOLUME, MAX_VOLUME) as u8
}

impl PlaybackSession {
    /// `setvol VOL`
    ///
    /// Out-of-range values are clamped; clients may send signed values.
    pub async fn setvol(&mut self, volume: i64) -> Result<()> {
        self.apply_volume(clamp_volume(volume)).await
    }

    /// `volume CHANGE` (deprecated relative form of `setvol`)
    pub async fn volume(&mut self, change: i64) -> Result<()> {
        if !(-MAX_VOLUME_CHANGE..=MAX_VOLUME_CHANGE).contains(&change) {
            return Err(MpdError::arg("Invalid volume value"));
        }

        let Some(current) = self.mixer.volume().await? else {
            return Err(MpdError::system("problems setting volume"));
        };

        self.apply_volume(clamp_volume(i64::from(current) + change))
            .await
    }

    async fn apply_volume(&self, level: u8) -> Result<()> {
        debug!(level, "Setting volume");
        if self.mixer.set_volume(level).await? {
            Ok(())
        } else {
            Err(MpdError::system("problems setting volume"))
        }
    }
}
