//! Volume model
//!
//! Linear volume in [0, 1], clamped on every write, with a mute flag that
//! preserves the stored level. The effective value is what gets pushed to
//! the audio backend.

/// Volume state for the playback engine
#[derive(Debug, Clone)]
pub struct Volume {
    /// Stored level, always in [0, 1]
    value: f32,

    /// Mute state (preserves the stored level)
    muted: bool,
}

impl Volume {
    /// Create a new volume, clamping the initial level into [0, 1]
    pub fn new(value: f32) -> Self {
        Self {
            value: clamp_unit(value),
            muted: false,
        }
    }

    /// Set the level, clamping into [0, 1]
    pub fn set(&mut self, value: f32) {
        self.value = clamp_unit(value);
    }

    /// Stored level (independent of mute)
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Level to push to the backend: 0.0 while muted
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.value
        }
    }

    /// Mute, preserving the stored level
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute, restoring the stored level
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_below_range_clamp_to_zero() {
        let mut volume = Volume::new(0.5);
        volume.set(-0.5);
        assert_eq!(volume.value(), 0.0);
    }

    #[test]
    fn writes_above_range_clamp_to_one() {
        let mut volume = Volume::new(0.5);
        volume.set(1.7);
        assert_eq!(volume.value(), 1.0);
    }

    #[test]
    fn mute_preserves_level() {
        let mut volume = Volume::new(0.8);
        volume.mute();
        assert_eq!(volume.effective(), 0.0);
        assert_eq!(volume.value(), 0.8);

        volume.unmute();
        assert_eq!(volume.effective(), 0.8);
    }

    #[test]
    fn toggle_mute_round_trips() {
        let mut volume = Volume::new(0.6);
        volume.toggle_mute();
        assert!(volume.is_muted());
        volume.toggle_mute();
        assert!(!volume.is_muted());
    }
}
