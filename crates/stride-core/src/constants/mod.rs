// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for plan shape, volume progression, sessions, race week, and paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Planner Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. `PlanParameters::default()` is built from these values.

/// Fixed shape of the generated plan
pub mod plan_shape {
    /// Total plan length in weeks (six build weeks plus the race week)
    pub const WEEKS: u32 = 7;
    /// Training sessions per build week
    pub const DAYS_PER_WEEK: u32 = 3;
    /// Days in a calendar week
    pub const DAYS_IN_WEEK: i64 = 7;
}

/// Session placement relative to the Monday of each build week
pub mod schedule_offsets {
    /// Intervals on Tuesday
    pub const INTERVALS_DAY: i64 = 1;
    /// Tempo on Thursday
    pub const TEMPO_DAY: i64 = 3;
    /// Long run on Sunday
    pub const LONG_RUN_DAY: i64 = 6;
}

/// Weekly volume seeding and progression
pub mod volume {
    /// Baseline race distance multiplier used to seed week one volume
    pub const SEED_MULTIPLIER: f64 = 4.5;
    /// Lowest seeded weekly volume (km)
    pub const SEED_MIN_KM: f64 = 22.0;
    /// Highest seeded weekly volume (km)
    pub const SEED_MAX_KM: f64 = 34.0;
    /// Week-over-week growth rate
    pub const WEEKLY_GROWTH: f64 = 0.08;
    /// Zero-based index of the cutback week (week 4)
    pub const CUTBACK_WEEK_INDEX: u32 = 3;
    /// Volume multiplier applied in the cutback week (-20%)
    pub const CUTBACK_FACTOR: f64 = 0.80;
}

/// Build week session split and limits
pub mod session_split {
    /// Share of weekly volume for the interval session
    pub const FRACTION_INTERVALS: f64 = 0.25;
    /// Share of weekly volume for the tempo session
    pub const FRACTION_TEMPO: f64 = 0.25;
    /// Share of weekly volume for the long run
    pub const FRACTION_LONG: f64 = 0.50;
    /// Longest allowed long run (km); overflow moves to tempo
    pub const LONG_RUN_CAP_KM: f64 = 20.0;
    /// Session distances are presented in steps of this size (km)
    pub const ROUNDING_STEP_KM: f64 = 0.5;
    /// Tolerance when checking that fractions sum to one
    pub const FRACTION_SUM_TOLERANCE: f64 = 1e-6;
}

/// Race week override
pub mod race_week {
    /// Easy + strides run distance (km)
    pub const EASY_KM: f64 = 5.0;
    /// Sharpening tempo distance (km)
    pub const TEMPO_KM: f64 = 6.0;
    /// Half marathon race distance (km)
    pub const HALF_MARATHON_KM: f64 = 21.1;
    /// Easy + strides run happens this many days before the race
    pub const EASY_DAYS_BEFORE_RACE: i64 = 5;
    /// Sharpening tempo happens this many days before the race
    pub const TEMPO_DAYS_BEFORE_RACE: i64 = 3;
    /// Number of strides after the easy run
    pub const STRIDE_COUNT: u32 = 6;
    /// Stride duration (seconds)
    pub const STRIDE_DURATION_SEC: u32 = 20;
    /// Easy jog between strides (seconds)
    pub const STRIDE_RECOVERY_SEC: u32 = 90;
    /// Sharpening tempo warmup (minutes)
    pub const TEMPO_WARMUP_MIN: u32 = 10;
    /// Sharpening tempo block at threshold (minutes)
    pub const TEMPO_BLOCK_MIN: u32 = 12;
    /// Sharpening tempo cooldown (minutes)
    pub const TEMPO_COOLDOWN_MIN: u32 = 10;
}

/// Fixed warmup and cooldown envelopes for build week quality sessions
pub mod envelopes {
    /// Interval session warmup (minutes)
    pub const INTERVALS_WARMUP_MIN: u32 = 12;
    /// Interval session cooldown (minutes)
    pub const INTERVALS_COOLDOWN_MIN: u32 = 10;
    /// Tempo session warmup (minutes)
    pub const TEMPO_WARMUP_MIN: u32 = 10;
    /// Tempo session cooldown (minutes)
    pub const TEMPO_COOLDOWN_MIN: u32 = 10;
}

/// Pace offsets (seconds per km) applied during calibration
pub mod pace_offsets {
    /// Threshold is this much slower than baseline race pace
    pub const THRESHOLD_OVER_RACE: f64 = 8.0;
    /// Easy range lower bound above threshold
    pub const EASY_MIN_OVER_THRESHOLD: f64 = 40.0;
    /// Easy range upper bound above threshold
    pub const EASY_MAX_OVER_THRESHOLD: f64 = 80.0;
    /// Interval pace is this much faster than threshold
    pub const INTERVAL_UNDER_THRESHOLD: f64 = 15.0;
}

/// Canned coaching notes attached to workout structures
pub mod notes {
    /// Long run note
    pub const LONG_RUN: &str = "Keep it easy; optional gentle pickup at the end.";
    /// Race week easy + strides note
    pub const EASY_STRIDES: &str = "Relaxed run + strides with full recovery.";
    /// Race week sharpening tempo note
    pub const SHARPENING_TEMPO: &str = "Short, snappy; do not turn into a hard workout.";
    /// Race day note
    pub const RACE: &str =
        "Start controlled; fuel/hydrate appropriately; try to negative split if feeling good.";
}
