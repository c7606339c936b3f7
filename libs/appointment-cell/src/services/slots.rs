//! Lays a day's appointments onto the slot grid.
//!
//! Matching is on `time` only. Duplicates are tolerated: the first
//! appointment in input order is the one shown.

use serde::Serialize;

use crate::models::Appointment;
use crate::slot::{Slot, SlotGrid};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub time: Slot,
    pub available: bool,
    pub appointment: Option<Appointment>,
}

fn first_at(slot: Slot, appointments: &[Appointment]) -> Option<&Appointment> {
    appointments.iter().find(|appointment| appointment.time == slot)
}

pub fn available_slots(grid: &SlotGrid, appointments: &[Appointment]) -> Vec<Slot> {
    grid.slots()
        .iter()
        .copied()
        .filter(|slot| first_at(*slot, appointments).is_none())
        .collect()
}

pub fn occupied_slots(grid: &SlotGrid, appointments: &[Appointment]) -> Vec<Slot> {
    grid.slots()
        .iter()
        .copied()
        .filter(|slot| first_at(*slot, appointments).is_some())
        .collect()
}

pub fn schedule_view(grid: &SlotGrid, appointments: &[Appointment]) -> Vec<ScheduleEntry> {
    grid.slots()
        .iter()
        .map(|&slot| {
            let appointment = first_at(slot, appointments).cloned();
            ScheduleEntry {
                time: slot,
                available: appointment.is_none(),
                appointment,
            }
        })
        .collect()
}
