mod operative;
mod roster;
mod submission;

pub use operative::{Operative, Sector};
pub use roster::Roster;
pub use submission::Submission;
