pub mod pitch;
pub mod radar;
