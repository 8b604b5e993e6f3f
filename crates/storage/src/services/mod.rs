pub mod activity;
pub mod intake;
pub mod ranking;
