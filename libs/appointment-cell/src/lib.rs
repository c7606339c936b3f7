pub mod handlers;
pub mod models;
pub mod router;
pub mod seed;
pub mod services;
pub mod slot;

pub use models::*;
pub use router::appointment_routes;
pub use services::{AppointmentService, ScheduleEntry};
pub use slot::{Slot, SlotGrid};
