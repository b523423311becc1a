pub mod cases;
pub mod dashboard;
pub mod error;
pub mod selection;
