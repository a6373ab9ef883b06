//! Next/previous behaviour for every mode combination
//!
//! Three tracks (ids 1, 2, 3), current track `c` in 1..=3, driven through the
//! full session so mode reads, navigation, consume, and the resulting actor
//! calls are all covered.

mod common;

use common::{all_modes, Harness};
use mpd_playback::memory::PlaybackCall;
use mpd_playback::{ModeState, PlaybackActor, PlaybackState, Tlid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Track(u32),
    EndOfPlaylist,
    /// Some track other than the current one
    Random,
    /// Playback left alone
    Unchanged,
}

fn expected_next(modes: ModeState, c: u32) -> Expect {
    if modes.random {
        return Expect::Random;
    }
    if c < 3 {
        return Expect::Track(c + 1);
    }
    if modes.repeat && !modes.consume {
        Expect::Track(1)
    } else {
        Expect::EndOfPlaylist
    }
}

fn expected_previous(modes: ModeState, c: u32) -> Expect {
    match (modes.repeat, modes.random) {
        // repeat+random steps back through the random order; with no order
        // built yet it falls back to tracklist order (policy choice)
        (true, _) => Expect::Track(if c == 1 { 3 } else { c - 1 }),
        (false, true) => Expect::Unchanged,
        (false, false) => Expect::Track(c.saturating_sub(1).max(1)),
    }
}

#[tokio::test]
async fn next_matches_mode_table() {
    for modes in all_modes() {
        for c in 1..=3 {
            let mut h = Harness::with_player(3, PlaybackState::Playing, Some(c), 0);
            h.set_modes(modes).await;

            h.session.next().await.unwrap();

            let current = h.current().await;
            match expected_next(modes, c) {
                Expect::Track(n) => {
                    assert_eq!(current, Some(n), "next with modes {modes} from {c}");
                    assert_eq!(h.state().await, PlaybackState::Playing);
                }
                Expect::EndOfPlaylist => {
                    assert_eq!(current, None, "next with modes {modes} from {c}");
                    assert_eq!(h.state().await, PlaybackState::Stopped);
                    assert_eq!(
                        h.playback.calls().await,
                        vec![PlaybackCall::Stop, PlaybackCall::ClearCurrent]
                    );
                }
                Expect::Random => {
                    let picked = current.expect("random next always picks a track");
                    assert!(
                        (1..=3).contains(&picked) && picked != c,
                        "next with modes {modes} from {c} picked {picked}"
                    );
                }
                Expect::Unchanged => unreachable!(),
            }

            // Consume removes the track that was playing
            let remaining = h.tracklist_ids().await;
            assert_eq!(
                remaining.contains(&c),
                !modes.consume,
                "tracklist after next with modes {modes} from {c}: {remaining:?}"
            );
        }
    }
}

#[tokio::test]
async fn previous_matches_mode_table() {
    for modes in all_modes() {
        for c in 1..=3 {
            let mut h = Harness::with_player(3, PlaybackState::Playing, Some(c), 0);
            h.set_modes(modes).await;

            h.session.previous().await.unwrap();

            match expected_previous(modes, c) {
                Expect::Track(n) => {
                    assert_eq!(
                        h.current().await,
                        Some(n),
                        "previous with modes {modes} from {c}"
                    );
                    assert_eq!(
                        h.playback.calls().await,
                        vec![PlaybackCall::Play(Some(Tlid(n)))]
                    );
                    let consumed = modes.consume && n != c;
                    assert_eq!(h.tracklist_ids().await.contains(&c), !consumed);
                }
                Expect::Unchanged => {
                    assert_eq!(h.current().await, Some(c));
                    assert!(h.playback.calls().await.is_empty());
                    assert_eq!(h.tracklist_ids().await, vec![1, 2, 3]);
                }
                Expect::Random | Expect::EndOfPlaylist => unreachable!(),
            }
        }
    }
}

#[tokio::test]
async fn previous_restarts_track_past_threshold_in_every_mode() {
    for modes in all_modes() {
        for c in 1..=3 {
            let mut h = Harness::with_player(3, PlaybackState::Playing, Some(c), 15_000);
            h.set_modes(modes).await;

            h.session.previous().await.unwrap();

            assert_eq!(h.playback.calls().await, vec![PlaybackCall::Seek(0)]);
            assert_eq!(h.current().await, Some(c));
            assert_eq!(h.playback.snapshot().await.position, 0);
            assert_eq!(h.tracklist_ids().await, vec![1, 2, 3]);
        }
    }
}

#[tokio::test]
async fn previous_just_below_threshold_changes_track() {
    let mut h = Harness::with_player(3, PlaybackState::Playing, Some(2), 14_999);
    h.session.previous().await.unwrap();
    assert_eq!(h.current().await, Some(1));
}

#[tokio::test]
async fn random_without_repeat_visits_every_track_then_stops() {
    let mut h = Harness::with_player(5, PlaybackState::Playing, Some(3), 0);
    h.set_modes(ModeState::new(false, true, false, false)).await;

    let mut visited = vec![3];
    loop {
        h.session.next().await.unwrap();
        match h.current().await {
            Some(tlid) => visited.push(tlid),
            None => break,
        }
        assert!(visited.len() <= 5, "visited more tracks than exist: {visited:?}");
    }

    visited.sort_unstable();
    assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    assert_eq!(h.state().await, PlaybackState::Stopped);
}

#[tokio::test]
async fn repeat_random_replays_the_same_order_forever() {
    let mut h = Harness::with_player(4, PlaybackState::Playing, Some(1), 0);
    h.set_modes(ModeState::new(true, true, false, false)).await;

    let mut order = Vec::new();
    for _ in 0..12 {
        h.session.next().await.unwrap();
        order.push(h.current().await.expect("repeat+random never stops"));
    }

    // Each cycle is the same permutation of all four tracks
    assert_eq!(order[0..4], order[4..8]);
    assert_eq!(order[4..8], order[8..12]);
    let mut cycle = order[0..4].to_vec();
    cycle.sort_unstable();
    assert_eq!(cycle, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn consume_drains_tracklist_to_end_of_playlist() {
    let mut h = Harness::with_player(3, PlaybackState::Playing, Some(1), 0);
    h.set_modes(ModeState::new(false, false, false, true)).await;

    h.session.next().await.unwrap();
    assert_eq!(h.tracklist_ids().await, vec![2, 3]);
    h.session.next().await.unwrap();
    assert_eq!(h.tracklist_ids().await, vec![3]);
    h.session.next().await.unwrap();
    assert!(h.tracklist_ids().await.is_empty());
    assert_eq!(h.current().await, None);
}

#[tokio::test]
async fn consume_drains_tracklist_under_repeat_random() {
    for single in [false, true] {
        let mut h = Harness::with_player(3, PlaybackState::Playing, Some(1), 0);
        h.set_modes(ModeState::new(true, true, single, true)).await;

        for _ in 0..3 {
            h.session.next().await.unwrap();
        }

        assert!(
            h.tracklist_ids().await.is_empty(),
            "single: {single}, left: {:?}",
            h.tracklist_ids().await
        );
        assert_eq!(h.current().await, None);
        assert_eq!(h.state().await, PlaybackState::Stopped);
    }
}

#[tokio::test]
async fn next_without_current_track_starts_at_first() {
    let mut h = Harness::new(3);
    h.session.next().await.unwrap();
    assert_eq!(h.current().await, Some(1));
    assert_eq!(h.state().await, PlaybackState::Playing);
}

#[tokio::test]
async fn next_on_empty_tracklist_stops() {
    let mut h = Harness::new(0);
    h.session.next().await.unwrap();
    assert_eq!(
        h.playback.calls().await,
        vec![PlaybackCall::Stop, PlaybackCall::ClearCurrent]
    );
}

#[tokio::test]
async fn mode_changes_apply_on_the_next_command() {
    let mut h = Harness::with_player(3, PlaybackState::Playing, Some(3), 0);

    h.session.next().await.unwrap();
    assert_eq!(h.current().await, None);

    // Another client enables repeat; no mode is cached by the session
    h.tracklist.set_modes(ModeState::new(true, false, false, false)).await;
    h.playback.play(Some(Tlid(3))).await.unwrap();
    h.session.next().await.unwrap();
    assert_eq!(h.current().await, Some(1));
}
