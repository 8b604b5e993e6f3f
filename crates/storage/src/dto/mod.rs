pub mod ranking;
pub mod roster;
pub mod submission;
