//! In-memory tracklist

use crate::actors::TracklistActor;
use crate::error::{ActorError, ActorResult};
use crate::types::{ModeState, Tlid, TrackEntry};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Inner {
    /// Ids in tracklist order
    tlids: Vec<Tlid>,

    /// Id handed to the next added track
    next_tlid: u32,

    modes: ModeState,
}

impl Inner {
    fn entries(&self, range: std::ops::Range<usize>) -> Vec<TrackEntry> {
        let end = range.end.min(self.tlids.len());
        let start = range.start.min(end);
        self.tlids[start..end]
            .iter()
            .enumerate()
            .map(|(offset, &tlid)| TrackEntry {
                tlid,
                position: start + offset,
            })
            .collect()
    }
}

/// Tracklist held in memory
///
/// Ids are assigned from 1 upward and never reused, so they stay stable when
/// tracks are moved or removed.
#[derive(Debug)]
pub struct InMemoryTracklist {
    inner: Mutex<Inner>,
}

impl InMemoryTracklist {
    /// Create an empty tracklist
    pub fn new() -> Self {
        Self::with_tracks(0)
    }

    /// Create a tracklist of `count` tracks with ids `1..=count`
    pub fn with_tracks(count: u32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                tlids: (1..=count).map(Tlid).collect(),
                next_tlid: count + 1,
                modes: ModeState::default(),
            }),
        }
    }

    /// Append `count` tracks, returning their ids
    pub async fn add(&self, count: u32) -> Vec<Tlid> {
        let mut inner = self.inner.lock().await;
        let added: Vec<Tlid> = (inner.next_tlid..inner.next_tlid + count).map(Tlid).collect();
        inner.next_tlid += count;
        inner.tlids.extend(&added);
        added
    }

    /// Move the track at `from` to position `to`
    pub async fn move_track(&self, from: usize, to: usize) -> ActorResult<()> {
        let mut inner = self.inner.lock().await;
        let len = inner.tlids.len();
        if from >= len || to >= len {
            return Err(ActorError::Rejected(format!(
                "position out of bounds: {from} -> {to} (len {len})"
            )));
        }

        let tlid = inner.tlids.remove(from);
        inner.tlids.insert(to, tlid);
        Ok(())
    }

    /// Remove every track
    pub async fn clear(&self) {
        self.inner.lock().await.tlids.clear();
    }

    /// Replace all modes at once
    pub async fn set_modes(&self, modes: ModeState) {
        self.inner.lock().await.modes = modes;
    }

    /// Ids in tracklist order
    pub async fn tlids(&self) -> Vec<Tlid> {
        self.inner.lock().await.tlids.clone()
    }
}

impl Default for InMemoryTracklist {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TracklistActor for InMemoryTracklist {
    async fn tracks(&self) -> ActorResult<Vec<TrackEntry>> {
        let inner = self.inner.lock().await;
        Ok(inner.entries(0..inner.tlids.len()))
    }

    async fn slice(&self, start: usize, end: usize) -> ActorResult<Vec<TrackEntry>> {
        Ok(self.inner.lock().await.entries(start..end))
    }

    async fn filter_by_tlid(&self, tlids: &[Tlid]) -> ActorResult<Vec<TrackEntry>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .entries(0..inner.tlids.len())
            .into_iter()
            .filter(|entry| tlids.contains(&entry.tlid))
            .collect())
    }

    async fn index_of(&self, tlid: Tlid) -> ActorResult<Option<usize>> {
        Ok(self.inner.lock().await.tlids.iter().position(|&t| t == tlid))
    }

    async fn remove(&self, tlid: Tlid) -> ActorResult<()> {
        self.inner.lock().await.tlids.retain(|&t| t != tlid);
        Ok(())
    }

    async fn modes(&self) -> ActorResult<ModeState> {
        Ok(self.inner.lock().await.modes)
    }

    async fn set_consume(&self, on: bool) -> ActorResult<()> {
        self.inner.lock().await.modes.consume = on;
        Ok(())
    }

    async fn set_random(&self, on: bool) -> ActorResult<()> {
        self.inner.lock().await.modes.random = on;
        Ok(())
    }

    async fn set_repeat(&self, on: bool) -> ActorResult<()> {
        self.inner.lock().await.modes.repeat = on;
        Ok(())
    }

    async fn set_single(&self, on: bool) -> ActorResult<()> {
        self.inner.lock().await.modes.single = on;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn slice_clamps_to_tracklist() {
        let tracklist = InMemoryTracklist::with_tracks(3);
        let slice = tracklist.slice(1, 10).await.unwrap();
        assert_eq!(
            slice,
            vec![
                TrackEntry { tlid: Tlid(2), position: 1 },
                TrackEntry { tlid: Tlid(3), position: 2 },
            ]
        );
        assert!(tracklist.slice(5, 6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_survive_reordering_and_removal() {
        let tracklist = InMemoryTracklist::with_tracks(3);
        tracklist.move_track(0, 2).await.unwrap();
        assert_eq!(tracklist.tlids().await, vec![Tlid(2), Tlid(3), Tlid(1)]);
        assert_eq!(tracklist.index_of(Tlid(1)).await.unwrap(), Some(2));

        tracklist.remove(Tlid(3)).await.unwrap();
        let added = tracklist.add(2).await;
        assert_eq!(added, vec![Tlid(4), Tlid(5)]);
        assert_eq!(
            tracklist.tlids().await,
            vec![Tlid(2), Tlid(1), Tlid(4), Tlid(5)]
        );
    }

    #[tokio::test]
    async fn move_out_of_bounds_is_rejected() {
        let tracklist = InMemoryTracklist::with_tracks(2);
        assert!(tracklist.move_track(0, 2).await.is_err());
    }

    #[tokio::test]
    async fn filter_by_tlid_reports_positions() {
        let tracklist = InMemoryTracklist::with_tracks(4);
        let found = tracklist.filter_by_tlid(&[Tlid(3), Tlid(9)]).await.unwrap();
        assert_eq!(found, vec![TrackEntry { tlid: Tlid(3), position: 2 }]);
    }

    #[tokio::test]
    async fn mode_setters() {
        let tracklist = InMemoryTracklist::new();
        tracklist.set_repeat(true).await.unwrap();
        tracklist.set_consume(true).await.unwrap();
        assert_eq!(
            tracklist.modes().await.unwrap(),
            ModeState::new(true, false, false, true)
        );

        tracklist.set_modes(ModeState::new(false, true, true, false)).await;
        tracklist.set_single(false).await.unwrap();
        assert_eq!(
            tracklist.modes().await.unwrap(),
            ModeState::new(false, true, false, false)
        );
    }

    #[tokio::test]
    async fn clear_empties_tracklist() {
        let tracklist = InMemoryTracklist::with_tracks(3);
        tracklist.clear().await;
        assert!(tracklist.tracks().await.unwrap().is_empty());
    }
}
