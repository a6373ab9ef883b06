//! Read-only tracklist snapshot
//!
//! Fetched fresh for every command; the tracklist actor stays the single
//! source of truth and may change between commands.

use crate::actors::TracklistActor;
use crate::error::ActorResult;
use crate::types::{Tlid, TrackEntry};

/// Ordered view over the tracklist at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracklistView {
    entries: Vec<TrackEntry>,
}

impl TracklistView {
    /// Build a view from entries in tracklist order
    pub fn new(entries: Vec<TrackEntry>) -> Self {
        Self { entries }
    }

    /// Build a view from ids, assigning dense positions
    pub fn from_tlids(tlids: impl IntoIterator<Item = Tlid>) -> Self {
        Self::new(
            tlids
                .into_iter()
                .enumerate()
                .map(|(position, tlid)| TrackEntry { tlid, position })
                .collect(),
        )
    }

    /// Fetch a fresh snapshot from the tracklist actor
    pub async fn fetch(tracklist: &dyn TracklistActor) -> ActorResult<Self> {
        Ok(Self::new(tracklist.tracks().await?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `position`
    pub fn at(&self, position: usize) -> Option<&TrackEntry> {
        self.entries.get(position)
    }

    /// Position of `tlid`
    pub fn index_of(&self, tlid: Tlid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tlid == tlid)
    }

    /// Whether `tlid` is in the tracklist
    pub fn contains(&self, tlid: Tlid) -> bool {
        self.index_of(tlid).is_some()
    }

    /// Ids in tracklist order
    pub fn tlids(&self) -> Vec<Tlid> {
        self.entries.iter().map(|entry| entry.tlid).collect()
    }

    pub fn first(&self) -> Option<Tlid> {
        self.entries.first().map(|entry| entry.tlid)
    }

    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }
}
