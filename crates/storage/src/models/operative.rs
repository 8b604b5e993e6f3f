use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Business sector an operative works in. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sector {
    Onboarding,
    Ongoing,
    Retention,
}

/// One roster member eligible for credited submissions.
///
/// Defined at startup and immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Operative {
    pub id: String,
    pub name: String,
    pub sector: Sector,
    /// Points credited per submission. Copied into each submission at intake
    /// time, so a later roster change never alters historical totals.
    pub weight: f64,
}
