//! Frame-sampled motion engine for tile rotations.
//!
//! Rotations are described up front as [`Track`]s of eased [`Segment`]s
//! scheduled at absolute times, and the frame loop samples them with plain
//! arithmetic. Nothing is callback-scheduled: each sample the started track
//! with the latest start wins the axis, entering from wherever the axis
//! visually was at that instant, so a flip can take over mid-spin without a
//! jump.

/// Duration (ms) of each of the two eased phases of the hover spin.
pub const SPIN_PHASE_MS: f64 = 500.0;
/// How far (ms) the settle phase reaches back into the fling phase.
pub const SPIN_OVERLAP_MS: f64 = 250.0;
/// Whole-wall flip duration (ms).
pub const FLIP_MS: f64 = 1000.0;
/// Total window (ms) across which per-tile flip starts are spread.
pub const FLIP_STAGGER_MS: f64 = 500.0;

/// Easing curve for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Decelerating cubic.
    CubicOut,
    /// Symmetric cubic, slow at both ends.
    CubicInOut,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One eased keyframe of a track.
///
/// `offset_ms` is relative to the track start; a zero duration makes an
/// instant set. `from: None` means the track's entry value, the axis value
/// sampled at the instant the track started.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub offset_ms: f64,
    pub dur_ms: f64,
    pub from: Option<f64>,
    pub to: f64,
    pub ease: Ease,
}

impl Segment {
    fn value_at(&self, local: f64, from: f64) -> f64 {
        if self.dur_ms <= 0.0 {
            return self.to;
        }
        let t = ((local - self.offset_ms) / self.dur_ms).clamp(0.0, 1.0);
        from + (self.to - from) * self.ease.apply(t)
    }

    fn end_ms(&self) -> f64 {
        self.offset_ms + self.dur_ms
    }
}

/// A scheduled sequence of segments on one rotation axis.
///
/// Segments must be ordered by `offset_ms`. Overlapping segments follow the
/// render-order rule of timeline animation: the latest-started segment wins
/// the value, and a finished segment holds its `to` until a later one
/// starts.
#[derive(Clone, Debug)]
pub struct Track {
    pub start_ms: f64,
    pub segments: Vec<Segment>,
}

impl Track {
    /// Sample the track at absolute time `now`. `entry` is the axis value
    /// at `start_ms`, substituted for segments built with `from: None`.
    pub fn sample(&self, now: f64, entry: f64) -> f64 {
        let local = now - self.start_ms;
        let mut value = entry;
        for seg in &self.segments {
            if local < seg.offset_ms {
                break;
            }
            value = seg.value_at(local, seg.from.unwrap_or(entry));
        }
        value
    }

    pub fn end_ms(&self) -> f64 {
        let tail = self
            .segments
            .iter()
            .map(Segment::end_ms)
            .fold(0.0, f64::max);
        self.start_ms + tail
    }

    pub fn finished(&self, now: f64) -> bool {
        now >= self.end_ms()
    }
}

/// Scheduled tracks for one rotation axis of one tile, plus the angle the
/// axis rests at when nothing is scheduled.
///
/// Sampling resolves the started track with the latest start (ties go to
/// the later-pushed one); its entry value is the remaining tracks resolved
/// at that start instant, so a takeover continues from wherever the axis
/// was. Tracks whose start is still in the future (stagger delays) leave
/// the earlier motion rendering until then, and a delayed track outranks
/// one pushed after it but started before it.
#[derive(Clone, Debug, Default)]
pub struct AxisMotion {
    rest: f64,
    tracks: Vec<Track>,
}

impl AxisMotion {
    pub fn new(rest: f64) -> Self {
        Self {
            rest,
            tracks: Vec::new(),
        }
    }

    /// Angle the axis settles on with no tracks scheduled. Moves to the
    /// final sampled pose whenever [`AxisMotion::prune`] drops a finished
    /// backlog, so the next track enters from where the axis last rested.
    pub fn rest(&self) -> f64 {
        self.rest
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
        // A sample only ever resolves through the most recent few tracks;
        // cap the backlog so event bursts cannot grow it without bound.
        if self.tracks.len() > 4 {
            self.tracks.remove(0);
        }
    }

    /// Sample the axis at `now`.
    pub fn sample(&self, now: f64) -> f64 {
        let tracks: Vec<&Track> = self.tracks.iter().collect();
        Self::resolve(&tracks, self.rest, now)
    }

    fn resolve(tracks: &[&Track], rest: f64, now: f64) -> f64 {
        let mut winner: Option<usize> = None;
        for (i, track) in tracks.iter().enumerate() {
            if now >= track.start_ms
                && winner.is_none_or(|w| track.start_ms >= tracks[w].start_ms)
            {
                winner = Some(i);
            }
        }
        let Some(w) = winner else { return rest };
        let others: Vec<&Track> = tracks
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != w)
            .map(|(_, t)| *t)
            .collect();
        let entry = Self::resolve(&others, rest, tracks[w].start_ms);
        tracks[w].sample(now, entry)
    }

    /// Whether any scheduled track still has time left to run.
    pub fn active(&self, now: f64) -> bool {
        self.tracks.iter().any(|t| !t.finished(now))
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drop the backlog once every track has finished, parking the rest
    /// pose on the final sampled value. Finished tracks are kept while a
    /// later one is still pending so the held pose stays sampleable
    /// through stagger delays.
    pub fn prune(&mut self, now: f64) {
        if !self.tracks.is_empty() && self.tracks.iter().all(|t| t.finished(now)) {
            self.rest = self.sample(now);
            self.tracks.clear();
        }
    }
}

/// Hover spin for one tile: snap to the resting pose, fling most of the way
/// around the horizontal axis while the vertical axis tilts out, then have
/// a settle phase take over halfway through the fling and carry both axes
/// home. Returns the (horizontal, vertical) tracks.
///
/// `baseline` is the tile's resting rotation, 0 or 180 depending on the
/// flip side; the spin ends one full revolution above it, which renders
/// identically.
pub fn spin_tracks(start_ms: f64, baseline: f64, tilt: f64) -> (Track, Track) {
    let settle_at = SPIN_PHASE_MS - SPIN_OVERLAP_MS;
    // Eased progress of the fling at the instant the settle takes over;
    // fixes the handoff values so sampling stays continuous.
    let reached = Ease::CubicOut.apply(settle_at / SPIN_PHASE_MS);
    let x = Track {
        start_ms,
        segments: vec![
            Segment {
                offset_ms: 0.0,
                dur_ms: 0.0,
                from: None,
                to: baseline,
                ease: Ease::CubicOut,
            },
            Segment {
                offset_ms: 0.0,
                dur_ms: SPIN_PHASE_MS,
                from: Some(baseline),
                to: baseline + 270.0,
                ease: Ease::CubicOut,
            },
            Segment {
                offset_ms: settle_at,
                dur_ms: SPIN_PHASE_MS,
                from: Some(baseline + 270.0 * reached),
                to: baseline + 360.0,
                ease: Ease::CubicOut,
            },
        ],
    };
    let y = Track {
        start_ms,
        segments: vec![
            Segment {
                offset_ms: 0.0,
                dur_ms: 0.0,
                from: None,
                to: 0.0,
                ease: Ease::CubicOut,
            },
            Segment {
                offset_ms: 0.0,
                dur_ms: SPIN_PHASE_MS,
                from: Some(0.0),
                to: tilt,
                ease: Ease::CubicOut,
            },
            Segment {
                offset_ms: settle_at,
                dur_ms: SPIN_PHASE_MS,
                from: Some(tilt * reached),
                to: 0.0,
                ease: Ease::CubicOut,
            },
        ],
    };
    (x, y)
}

/// Flip track for one tile: carry the horizontal axis to the new resting
/// angle from wherever the tile is when the track starts.
pub fn flip_track(start_ms: f64, target: f64) -> Track {
    Track {
        start_ms,
        segments: vec![Segment {
            offset_ms: 0.0,
            dur_ms: FLIP_MS,
            from: None,
            to: target,
            ease: Ease::CubicInOut,
        }],
    }
}

/// Assign each of `count` tiles a start delay inside [`FLIP_STAGGER_MS`]:
/// evenly spaced steps dealt out in shuffled order, so the wall ripples in
/// a different random pattern every flip while a pinned seed keeps tests
/// deterministic.
pub fn stagger_delays(count: usize, seed: u64) -> Vec<f64> {
    let mut ranks: Vec<usize> = (0..count).collect();
    let mut state = seed;
    // Fisher-Yates driven by a linear congruential step (not crypto secure).
    for i in (1..count).rev() {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        let j = (state >> 16) as usize % (i + 1);
        ranks.swap(i, j);
    }
    let step = if count > 1 {
        FLIP_STAGGER_MS / (count - 1) as f64
    } else {
        0.0
    };
    ranks.into_iter().map(|r| r as f64 * step).collect()
}
