pub mod handlers;
pub mod models;
pub mod router;
pub mod seed;
pub mod services;

pub use models::*;
pub use services::DoctorService;
pub use router::doctor_routes;
