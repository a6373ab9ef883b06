//! Seek controller: `seek`, `seekid`, `seekcur`

use crate::error::{MpdError, Result};
use crate::session::PlaybackSession;
use crate::types::{Millis, Tlid};
use tracing::debug;

/// Convert seconds to whole milliseconds, rounding to nearest
fn to_millis(seconds: f64) -> Millis {
    (seconds * 1000.0).round() as Millis
}

/// Validate a non-negative time argument and convert it
fn absolute_millis(seconds: f64) -> Result<Millis> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(to_millis(seconds))
    } else {
        Err(MpdError::arg(format!("Invalid time: {seconds}")))
    }
}

fn parse_seconds(time: &str) -> Result<f64> {
    time.parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .ok_or_else(|| MpdError::arg(format!("Float expected: {time}")))
}

impl PlaybackSession {
    /// `seek SONGPOS TIME`
    ///
    /// Switches to the track at `songpos` first unless it is already current.
    pub async fn seek(&mut self, songpos: u32, seconds: f64) -> Result<()> {
        let target = absolute_millis(seconds)?;

        let position = match self.playback.current_tlid().await? {
            Some(tlid) => self.tracklist.index_of(tlid).await?,
            None => None,
        };
        if position != usize::try_from(songpos).ok() {
            debug!(songpos, "Switching track before seek");
            self.play(Some(i64::from(songpos))).await?;
        }

        self.playback.seek(target).await?;
        Ok(())
    }

    /// `seekid SONGID TIME`
    pub async fn seekid(&mut self, tlid: u32, seconds: f64) -> Result<()> {
        let target = absolute_millis(seconds)?;

        if self.playback.current_tlid().await? != Some(Tlid(tlid)) {
            debug!(tlid, "Switching track before seek");
            self.playid(i64::from(tlid)).await?;
        }

        self.playback.seek(target).await?;
        Ok(())
    }

    /// `seekcur TIME`
    ///
    /// A leading `+` or `-` makes `time` relative to the current position.
    /// Never changes track.
    pub async fn seekcur(&mut self, time: &str) -> Result<()> {
        let target = if time.starts_with(['+', '-']) {
            let offset = to_millis(parse_seconds(time)?);
            let position = self.playback.time_position().await?;
            position.saturating_add(offset)
        } else {
            absolute_millis(parse_seconds(time)?)?
        };

        debug!(target, "Seeking current track");
        self.playback.seek(target).await?;
        Ok(())
    }
}
