use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the keyframe interval found by the previous sample so that
/// monotonic playback finds the next one in O(1).
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A time-stamped sequence of values for a single animated channel.
///
/// `times` are in seconds and must be strictly increasing; `values` is
/// parallel to `times`.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        debug_assert_eq!(times.len(), values.len(), "times/values length mismatch");
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last keyframe, or `0.0` for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track without a cursor (binary search).
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);
        Some(self.sample_at_frame(idx, time))
    }

    /// Samples the track, reusing and updating `cursor`.
    ///
    /// Forward or backward playback scans at most `MAX_SCAN_OFFSET`
    /// neighbouring intervals before falling back to a binary search.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        let len = self.times.len();
        if len == 0 {
            return None;
        }
        if len == 1 {
            return Some(self.values[0]);
        }

        let i = cursor.last_index.min(len - 1);
        let t_curr = self.times[i];

        let found_index = if time >= t_curr {
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1);
                    }
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = found_index.unwrap_or_else(|| {
            // Large jump (scrub or loop reset)
            self.times
                .partition_point(|&t| t <= time)
                .saturating_sub(1)
        });
        cursor.last_index = final_index;

        Some(self.sample_at_frame(final_index, time))
    }

    /// Drops interior keyframes whose value equals both neighbours.
    ///
    /// The first and last keyframes are always kept so the track keeps its
    /// duration.
    pub fn optimize(&mut self) {
        let len = self.times.len();
        if len <= 2 {
            return;
        }

        let mut times = Vec::with_capacity(len);
        let mut values = Vec::with_capacity(len);
        times.push(self.times[0]);
        values.push(self.values[0]);

        for i in 1..len - 1 {
            let prev = *values.last().unwrap_or(&self.values[i - 1]);
            let redundant = self.values[i] == prev && self.values[i] == self.values[i + 1];
            if !redundant {
                times.push(self.times[i]);
                values.push(self.values[i]);
            }
        }

        times.push(self.times[len - 1]);
        values.push(self.values[len - 1]);

        self.times = times;
        self.values = values;
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        if index >= len - 1 {
            return self.values[len - 1];
        }
        if time <= self.times[0] {
            return self.values[0];
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        }
    }
}
