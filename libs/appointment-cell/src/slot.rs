use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const SLOT_FORMAT: &str = "%H:%M";

/// A time of day on the appointment grid, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(NaiveTime);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid slot {0:?}, expected HH:MM")]
pub struct SlotParseError(pub String);

impl Slot {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Slot)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for Slot {
    fn from(time: NaiveTime) -> Self {
        Slot(time)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl FromStr for Slot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), SLOT_FORMAT)
            .map(Slot)
            .map_err(|_| SlotParseError(s.to_string()))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Ordered daily grid of bookable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Slots every `step` from `start` up to (not including) `end`, skipping
    /// any that fall inside the half-open `lunch` window.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        step: Duration,
        lunch: Option<(NaiveTime, NaiveTime)>,
    ) -> Self {
        let mut slots = Vec::new();
        if step <= Duration::zero() {
            return Self { slots };
        }

        let mut current = start;
        while current < end {
            let at_lunch = lunch.is_some_and(|(from, to)| current >= from && current < to);
            if !at_lunch {
                slots.push(Slot(current));
            }

            let (next, wrapped) = current.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            current = next;
        }

        Self { slots }
    }

    /// 08:00 to 17:30 every half hour with no slots between 13:00 and 14:00.
    pub fn standard() -> Self {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self::new(at(8), at(18), Duration::minutes(30), Some((at(13), at(14))))
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::standard()
    }
}
