pub mod aggregate;
pub mod delivery_mode;
pub mod delivery_schedule;
