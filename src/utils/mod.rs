pub mod datetime;
pub mod feedback;
pub mod logging;
