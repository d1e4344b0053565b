//! Shuffle index selection
//!
//! Shuffle does not reorder the queue; next/previous simply pick a random
//! index each time. A re-roll loop guarantees the pick never matches the
//! current track when an alternative exists.

use rand::Rng;
use rhymic_core::{Track, TrackId};

/// Pick a uniformly random queue index for shuffle navigation
///
/// Re-rolls while the queue has more than one track and the picked track's
/// id equals `current_id`, so the same track never plays twice in a row
/// unless it is the only one queued. When every queued track shares the
/// current id (pathological duplicate queue) the re-roll condition can
/// never be satisfied, so the first pick stands.
pub fn pick_shuffled_index<R: Rng>(
    tracks: &[Track],
    current_id: Option<TrackId>,
    rng: &mut R,
) -> Option<usize> {
    if tracks.is_empty() {
        return None;
    }

    let mut index = rng.gen_range(0..tracks.len());

    if let Some(current) = current_id {
        let has_alternative = tracks.iter().any(|t| t.id != current);
        while tracks.len() > 1 && has_alternative && tracks[index].id == current {
            index = rng.gen_range(0..tracks.len());
        }
    }

    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn track(id: TrackId) -> Track {
        Track::new(
            id,
            format!("Track {id}"),
            "Test Artist",
            format!("/covers/{id}.jpg"),
            format!("/music/{id}.mp3"),
        )
    }

    #[test]
    fn empty_queue_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_shuffled_index(&[], Some(1), &mut rng), None);
    }

    #[test]
    fn single_track_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let tracks = vec![track(1)];
        assert_eq!(pick_shuffled_index(&tracks, Some(1), &mut rng), Some(0));
    }

    #[test]
    fn never_picks_current_when_alternatives_exist() {
        let mut rng = StdRng::seed_from_u64(42);
        let tracks: Vec<Track> = (1..=5).map(track).collect();

        for _ in 0..500 {
            let index = pick_shuffled_index(&tracks, Some(3), &mut rng).unwrap();
            assert_ne!(tracks[index].id, 3);
        }
    }

    #[test]
    fn all_duplicates_still_terminates() {
        let mut rng = StdRng::seed_from_u64(7);
        let tracks = vec![track(1), track(1), track(1)];
        assert!(pick_shuffled_index(&tracks, Some(1), &mut rng).is_some());
    }

    #[test]
    fn covers_every_index_eventually() {
        let mut rng = StdRng::seed_from_u64(9);
        let tracks: Vec<Track> = (1..=4).map(track).collect();
        let mut seen = [false; 4];

        for _ in 0..200 {
            let index = pick_shuffled_index(&tracks, None, &mut rng).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
