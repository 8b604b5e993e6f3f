use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Operative, Sector};

/// Response containing one roster operative
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperativeResponse {
    pub id: String,
    pub name: String,
    pub sector: Sector,
    pub weight: f64,
}

impl From<&Operative> for OperativeResponse {
    fn from(operative: &Operative) -> Self {
        Self {
            id: operative.id.clone(),
            name: operative.name.clone(),
            sector: operative.sector,
            weight: operative.weight,
        }
    }
}
