//! Next/previous track resolution
//!
//! Decides which track `next` and `previous` move to under the combination
//! of repeat, random, single, and consume. Given a three-track tracklist and
//! current track `c`:
//!
//! ```text
//! next                                   c = 1   c = 2   c = 3
//! repeat random single consume
//!   T      T      T      *               Rand    Rand    Rand   (fresh draw every call)
//!   T      T      .      *               Rand    Rand    Rand   (same order replayed)
//!
//! Under repeat+random with consume, `next` reaches EOPL once the current
//! track is the only one left, so the tracklist drains like the sequential
//! consume rows.
//!   T      .      T      T               2       3       EOPL
//!   T      .      T      .               2       3       1
//!   T      .      .      T               2       3       EOPL
//!   T      .      .      .               2       3       1
//!   .      T      *      *               Rand    Rand    Rand   (EOPL once all visited)
//!   .      .      *      *               2       3       EOPL
//!
//! previous
//!   T      .      *      *               3       1       2
//!   T      T      *      *               step back through the random order
//!   .      T      *      *               c       c       c
//!   .      .      *      *               1       1       2
//! ```
//!
//! The restart-current-track rule of `previous` (elapsed time past the
//! threshold) needs the time position and lives in the playback controller.

use crate::shuffle::RandomSource;
use crate::tracklist::TracklistView;
use crate::types::{ModeState, Tlid};

/// Outcome of `next`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTrack {
    /// Play this track
    Track(Tlid),

    /// Nothing left to play; stop and clear the current track
    EndOfPlaylist,
}

/// Outcome of `previous`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousTrack {
    /// Play this track (may be the current one, restarting it)
    Track(Tlid),

    /// Leave playback untouched
    CurrentUnchanged,
}

/// Random permutation of the tracklist being walked in random mode
#[derive(Debug, Clone)]
struct RandomOrder {
    /// Tracklist ids the permutation was built from
    source: Vec<Tlid>,

    /// The permutation
    sequence: Vec<Tlid>,

    /// Index of the next unvisited entry in `sequence`
    cursor: usize,
}

impl RandomOrder {
    /// Shuffle the tracklist; a current track goes first and counts as visited
    fn generate(
        tracklist: &TracklistView,
        current: Option<Tlid>,
        random: &mut dyn RandomSource,
    ) -> Self {
        let source = tracklist.tlids();
        let mut sequence = source.clone();
        random.shuffle(&mut sequence);

        let mut cursor = 0;
        if let Some(index) = current.and_then(|c| sequence.iter().position(|&t| t == c)) {
            let tlid = sequence.remove(index);
            sequence.insert(0, tlid);
            cursor = 1;
        }

        Self {
            source,
            sequence,
            cursor,
        }
    }

    fn matches(&self, tracklist: &TracklistView) -> bool {
        self.source
            .iter()
            .eq(tracklist.entries().iter().map(|entry| &entry.tlid))
    }

    /// Next unvisited entry, skipping the current track
    fn advance(&mut self, current: Option<Tlid>) -> Option<Tlid> {
        while self.cursor < self.sequence.len() && Some(self.sequence[self.cursor]) == current {
            self.cursor += 1;
        }
        let tlid = self.sequence.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(tlid)
    }
}

/// Navigation state of one session
///
/// Owns the random source and the random order; both are per session so
/// independent sessions never share a permutation.
pub struct NavigationPolicy {
    random: Box<dyn RandomSource>,
    order: Option<RandomOrder>,
}

impl std::fmt::Debug for NavigationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationPolicy")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl NavigationPolicy {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self {
            random,
            order: None,
        }
    }

    /// Replace the random source, dropping any order built with the old one
    pub fn set_random_source(&mut self, random: Box<dyn RandomSource>) {
        self.random = random;
        self.order = None;
    }

    /// Forget the random order (random mode disabled)
    pub fn discard_random_order(&mut self) {
        self.order = None;
    }

    /// Whether a random order is currently held
    pub fn has_random_order(&self) -> bool {
        self.order.is_some()
    }

    /// Track `next` moves to
    pub fn next_track(
        &mut self,
        current: Option<Tlid>,
        modes: ModeState,
        tracklist: &TracklistView,
    ) -> NextTrack {
        if tracklist.is_empty() {
            self.order = None;
            return NextTrack::EndOfPlaylist;
        }

        if !modes.random {
            self.order = None;
            return Self::next_sequential(current, modes, tracklist);
        }

        if modes.repeat && modes.single {
            let tlid = self.draw(current, tracklist);
            if modes.consume && Some(tlid) == current {
                return NextTrack::EndOfPlaylist;
            }
            return NextTrack::Track(tlid);
        }

        self.next_in_order(current, modes, tracklist)
    }

    /// Track `previous` moves to
    pub fn previous_track(
        &mut self,
        current: Option<Tlid>,
        modes: ModeState,
        tracklist: &TracklistView,
    ) -> PreviousTrack {
        let Some(current) = current else {
            return PreviousTrack::CurrentUnchanged;
        };
        let Some(index) = tracklist.index_of(current) else {
            return PreviousTrack::CurrentUnchanged;
        };

        match (modes.repeat, modes.random) {
            (true, true) => self
                .previous_in_order(current, tracklist)
                .unwrap_or_else(|| Self::previous_wrapping(index, tracklist)),
            (true, false) => Self::previous_wrapping(index, tracklist),
            (false, true) => PreviousTrack::CurrentUnchanged,
            (false, false) => tracklist
                .at(index.saturating_sub(1))
                .map_or(PreviousTrack::CurrentUnchanged, |entry| {
                    PreviousTrack::Track(entry.tlid)
                }),
        }
    }

    fn next_sequential(
        current: Option<Tlid>,
        modes: ModeState,
        tracklist: &TracklistView,
    ) -> NextTrack {
        let next_index = current
            .and_then(|tlid| tracklist.index_of(tlid))
            .map_or(0, |index| index + 1);

        if let Some(entry) = tracklist.at(next_index) {
            return NextTrack::Track(entry.tlid);
        }

        // Under consume the tracks before the boundary have been removed
        // already, so wrapping would only replay consumed entries.
        if modes.repeat && !modes.consume {
            if let Some(first) = tracklist.first() {
                return NextTrack::Track(first);
            }
        }

        NextTrack::EndOfPlaylist
    }

    /// Uniform draw over the tracklist, excluding the current track when
    /// anything else is available
    fn draw(&mut self, current: Option<Tlid>, tracklist: &TracklistView) -> Tlid {
        let candidates: Vec<Tlid> = tracklist
            .tlids()
            .into_iter()
            .filter(|&tlid| tracklist.len() == 1 || Some(tlid) != current)
            .collect();
        // Never empty: at most one of two or more tracks is filtered out
        let index = self.random.pick(candidates.len()) % candidates.len();
        candidates[index]
    }

    fn next_in_order(
        &mut self,
        current: Option<Tlid>,
        modes: ModeState,
        tracklist: &TracklistView,
    ) -> NextTrack {
        let stale = !self
            .order
            .as_ref()
            .is_some_and(|order| order.matches(tracklist));
        if stale {
            tracing::debug!(tracks = tracklist.len(), "Generating random order");
            self.order = Some(RandomOrder::generate(
                tracklist,
                current,
                self.random.as_mut(),
            ));
        }

        let Some(order) = self.order.as_mut() else {
            return NextTrack::EndOfPlaylist;
        };

        if let Some(tlid) = order.advance(current) {
            return NextTrack::Track(tlid);
        }

        if modes.repeat {
            order.cursor = 0;
            let replay = order
                .advance(current)
                .or_else(|| order.sequence.first().copied())
                // Replaying the current track would keep it from being consumed
                .filter(|&tlid| !(modes.consume && Some(tlid) == current));
            if let Some(tlid) = replay {
                return NextTrack::Track(tlid);
            }
        }

        self.order = None;
        NextTrack::EndOfPlaylist
    }

    /// Step back one entry in the random order, wrapping to its end
    fn previous_in_order(
        &mut self,
        current: Tlid,
        tracklist: &TracklistView,
    ) -> Option<PreviousTrack> {
        let order = self.order.as_mut().filter(|order| order.matches(tracklist))?;
        let index = order.sequence.iter().position(|&tlid| tlid == current)?;
        let previous = index.checked_sub(1).unwrap_or(order.sequence.len() - 1);
        order.cursor = previous + 1;
        Some(PreviousTrack::Track(order.sequence[previous]))
    }

    fn previous_wrapping(index: usize, tracklist: &TracklistView) -> PreviousTrack {
        let previous = index.checked_sub(1).unwrap_or(tracklist.len() - 1);
        tracklist
            .at(previous)
            .map_or(PreviousTrack::CurrentUnchanged, |entry| {
                PreviousTrack::Track(entry.tlid)
            })
    }
}
