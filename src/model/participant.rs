// src/model/participant.rs
use std::fmt;

use crate::error::ModelError;
use super::time::{duration, TimePoint};

pub const LEG_COUNT: u8 = 4;

/// The five timed points of a race, in race order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Checkpoint {
    Start,
    Pitstop1,
    Pitstop2,
    Pitstop3,
    Finish,
}

impl Checkpoint {
    pub const ALL: [Checkpoint; 5] = [
        Checkpoint::Start,
        Checkpoint::Pitstop1,
        Checkpoint::Pitstop2,
        Checkpoint::Pitstop3,
        Checkpoint::Finish,
    ];

    /// Canonical field name as produced by label normalization on the split table.
    pub fn key(self) -> &'static str {
        match self {
            Checkpoint::Start => "start",
            Checkpoint::Pitstop1 => "pitstop_1",
            Checkpoint::Pitstop2 => "pitstop_2",
            Checkpoint::Pitstop3 => "pitstop_3",
            Checkpoint::Finish => "finish",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One hiker's checkpoint times.
///
/// Timeline order (`start ≤ pitstop_1 ≤ … ≤ finish`) is checked on construction
/// and on every update; durations are derived from the current times each call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    display_name: String,
    race_number: u32,
    times: [TimePoint; 5],
}

impl Participant {
    /// `times` are in [`Checkpoint::ALL`] order.
    pub fn new(
        display_name: impl Into<String>,
        race_number: u32,
        times: [TimePoint; 5],
    ) -> Result<Self, ModelError> {
        check_timeline(&times)?;
        Ok(Self {
            display_name: display_name.into(),
            race_number,
            times,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Text before the first space.
    pub fn first_name(&self) -> &str {
        self.display_name.split(' ').next().unwrap_or_default()
    }

    pub fn race_number(&self) -> u32 {
        self.race_number
    }

    pub fn time(&self, checkpoint: Checkpoint) -> TimePoint {
        self.times[checkpoint.index()]
    }

    pub fn start(&self) -> TimePoint {
        self.time(Checkpoint::Start)
    }

    pub fn finish(&self) -> TimePoint {
        self.time(Checkpoint::Finish)
    }

    /// Replace one checkpoint time. Rejected (and nothing changes) if it would
    /// break timeline order.
    pub fn set_time(&mut self, checkpoint: Checkpoint, time: TimePoint) -> Result<(), ModelError> {
        let mut times = self.times;
        times[checkpoint.index()] = time;
        check_timeline(&times)?;
        self.times = times;
        Ok(())
    }

    /// Seconds spent on leg `leg_no` (1..=4).
    pub fn leg_duration(&self, leg_no: u8) -> Result<u32, ModelError> {
        if !(1..=LEG_COUNT).contains(&leg_no) {
            return Err(ModelError::InvalidLegNumber(leg_no));
        }
        let i = leg_no as usize;
        duration(self.times[i - 1], self.times[i])
    }

    pub fn total_duration(&self) -> Result<u32, ModelError> {
        duration(self.start(), self.finish())
    }
}

fn check_timeline(times: &[TimePoint; 5]) -> Result<(), ModelError> {
    for (i, pair) in times.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(ModelError::NonMonotonicTimeline {
                earlier: Checkpoint::ALL[i],
                earlier_time: pair[0],
                later: Checkpoint::ALL[i + 1],
                later_time: pair[1],
            });
        }
    }
    Ok(())
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Participant:")?;
        writeln!(f, "    Race No : {}", self.race_number)?;
        writeln!(f, "       name : {}", self.display_name)?;
        for checkpoint in Checkpoint::ALL {
            writeln!(f, "{:>12}: {}", checkpoint.key(), self.time(checkpoint))?;
        }
        Ok(())
    }
}
