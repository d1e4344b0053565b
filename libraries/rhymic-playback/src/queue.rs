//! Playback queue
//!
//! One ordered list of tracks, the single source of truth for next/previous
//! ordering. The queue is replaced wholesale whenever the user starts
//! playback from a new collection, so "next" always means "next in the list
//! the user was just browsing".
//!
//! Lookups are keyed by track id; duplicate ids collapse to the first match.
//! Collections arrive deduplicated in practice, so this is acceptable.

use rhymic_core::{Track, TrackId};

/// Ordered playback queue
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the entire queue with `tracks`, verbatim
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// All queued tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the first track with the given id
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Insert `track` right after the current track's position
    ///
    /// Falls back to appending when there is no current track or the
    /// current track is not in the queue.
    pub fn insert_after(&mut self, current: Option<TrackId>, track: Track) {
        match current.and_then(|id| self.index_of(id)) {
            Some(index) => self.tracks.insert(index + 1, track),
            None => self.tracks.push(track),
        }
    }

    /// Append `track` to the end of the queue
    pub fn push_end(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Index the sequential "next" policy selects from `current`
    ///
    /// Advances by one, wrapping modulo queue length. A current id that is
    /// not in the queue behaves as index -1, so next lands on the first
    /// queued track. Empty queue yields `None`.
    pub fn next_index(&self, current: Option<TrackId>) -> Option<usize> {
        let len = self.tracks.len() as i64;
        if len == 0 {
            return None;
        }
        let current_index = self.signed_index(current);
        Some(((current_index + 1).rem_euclid(len)) as usize)
    }

    /// Index the sequential "previous" policy selects from `current`
    ///
    /// Retreats by one, wrapping modulo queue length, with the same
    /// index -1 treatment for a current id that is not in the queue.
    pub fn previous_index(&self, current: Option<TrackId>) -> Option<usize> {
        let len = self.tracks.len() as i64;
        if len == 0 {
            return None;
        }
        let current_index = self.signed_index(current);
        Some(((current_index - 1).rem_euclid(len)) as usize)
    }

    fn signed_index(&self, current: Option<TrackId>) -> i64 {
        current
            .and_then(|id| self.index_of(id))
            .map_or(-1, |i| i as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn replace_is_verbatim() {
        let mut queue = Queue::new();
        queue.replace(vec![track(3), track(1), track(2)]);

        let ids: Vec<TrackId> = queue.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn next_advances_and_wraps() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2), track(3)]);

        assert_eq!(queue.next_index(Some(1)), Some(1));
        assert_eq!(queue.next_index(Some(2)), Some(2));
        // Wrap from the last track back to the first
        assert_eq!(queue.next_index(Some(3)), Some(0));
    }

    #[test]
    fn previous_retreats_and_wraps() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2), track(3)]);

        assert_eq!(queue.previous_index(Some(3)), Some(1));
        assert_eq!(queue.previous_index(Some(2)), Some(0));
        assert_eq!(queue.previous_index(Some(1)), Some(2));
    }

    #[test]
    fn unknown_current_behaves_as_index_minus_one() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2), track(3)]);

        // Documented fallback: next from "not found" lands on the first track
        assert_eq!(queue.next_index(Some(99)), Some(0));
        assert_eq!(queue.next_index(None), Some(0));
        assert_eq!(queue.previous_index(Some(99)), Some(1));
    }

    #[test]
    fn single_track_reselects_itself() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1)]);

        assert_eq!(queue.next_index(Some(1)), Some(0));
        assert_eq!(queue.previous_index(Some(1)), Some(0));
    }

    #[test]
    fn empty_queue_has_no_next() {
        let queue = Queue::new();
        assert_eq!(queue.next_index(Some(1)), None);
        assert_eq!(queue.previous_index(None), None);
    }

    #[test]
    fn duplicate_ids_collapse_to_first_match() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2), track(1), track(3)]);

        assert_eq!(queue.index_of(1), Some(0));
        // Ordering is keyed off the first occurrence
        assert_eq!(queue.next_index(Some(1)), Some(1));
    }

    #[test]
    fn insert_after_current() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2), track(3)]);

        queue.insert_after(Some(2), track(9));
        let ids: Vec<TrackId> = queue.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 9, 3]);
    }

    #[test]
    fn insert_after_appends_without_current() {
        let mut queue = Queue::new();
        queue.replace(vec![track(1), track(2)]);

        queue.insert_after(None, track(9));
        queue.insert_after(Some(42), track(10));
        let ids: Vec<TrackId> = queue.tracks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 9, 10]);
    }
}
