pub mod booking;
pub mod slots;

pub use booking::AppointmentService;
pub use slots::{available_slots, occupied_slots, schedule_view, ScheduleEntry};
