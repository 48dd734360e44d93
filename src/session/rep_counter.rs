//! Two-phase hysteresis rep counter
//!
//! A rep is counted on the transition out of good form: hold good form for
//! `good_min_frames` to arm, then break it for `bad_min_frames` to count.
//! The last rep of a set is therefore only counted once form breaks, which
//! is intended - a held final position is not yet a completed rep.

pub struct RepCounter {
    good_min_frames: u32,
    bad_min_frames: u32,
    good_streak: u32,
    bad_streak: u32,
    was_good_phase: bool,
    count: u32,
}

impl RepCounter {
    pub fn new(good_min_frames: u32, bad_min_frames: u32) -> Self {
        Self {
            good_min_frames,
            bad_min_frames,
            good_streak: 0,
            bad_streak: 0,
            was_good_phase: false,
            count: 0,
        }
    }

    /// Feed one frame's good-form flag; returns the monotonic rep count.
    pub fn update(&mut self, good_now: bool) -> u32 {
        if good_now {
            self.good_streak += 1;
            self.bad_streak = 0;
            if self.good_streak >= self.good_min_frames {
                self.was_good_phase = true;
            }
        } else {
            self.bad_streak += 1;
            self.good_streak = 0;
            if self.was_good_phase && self.bad_streak >= self.bad_min_frames {
                self.count += 1;
                self.was_good_phase = false;
            }
        }
        self.count
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Zero everything; called on every exercise change.
    pub fn reset(&mut self) {
        self.good_streak = 0;
        self.bad_streak = 0;
        self.was_good_phase = false;
        self.count = 0;
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new(5, 2)
    }
}
