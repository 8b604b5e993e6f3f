use std::path::Path;

use super::{Operative, Sector};
use crate::error::Result;

/// The fixed list of operatives and their point weights.
///
/// Declaration order is significant: ranking entries with equal totals keep
/// this order.
#[derive(Debug, Clone)]
pub struct Roster {
    operatives: Vec<Operative>,
}

impl Roster {
    pub fn new(operatives: Vec<Operative>) -> Self {
        Self { operatives }
    }

    /// Roster shipped with the binary, used when no roster file is configured.
    pub fn builtin() -> Self {
        Self::new(vec![
            Operative {
                id: "adriele".to_string(),
                name: "Adriele".to_string(),
                sector: Sector::Onboarding,
                weight: 1.0,
            },
            Operative {
                id: "jeniffer".to_string(),
                name: "Jeniffer".to_string(),
                sector: Sector::Ongoing,
                weight: 0.5,
            },
            Operative {
                id: "esdras".to_string(),
                name: "Esdras".to_string(),
                sector: Sector::Retention,
                weight: 1.5,
            },
        ])
    }

    /// Loads a roster from a JSON array of operatives.
    pub fn from_json(json: &str) -> Result<Self> {
        let operatives: Vec<Operative> = serde_json::from_str(json)?;
        Ok(Self::new(operatives))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn get(&self, id: &str) -> Option<&Operative> {
        self.operatives.iter().find(|operative| operative.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Operatives in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Operative> {
        self.operatives.iter()
    }

    pub fn len(&self) -> usize {
        self.operatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operatives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let roster = Roster::builtin();
        assert_eq!(roster.len(), 3);

        let operative = roster.get("esdras").unwrap();
        assert_eq!(operative.name, "Esdras");
        assert_eq!(operative.sector, Sector::Retention);
        assert_eq!(operative.weight, 1.5);

        assert!(roster.get("unknown").is_none());
    }

    #[test]
    fn test_from_json() {
        let roster = Roster::from_json(
            r#"[
                {"id": "ada", "name": "Ada", "sector": "Onboarding", "weight": 2.0},
                {"id": "lin", "name": "Lin", "sector": "Retention", "weight": 0.5}
            ]"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ada").unwrap().weight, 2.0);
        assert!(roster.contains("lin"));
    }

    #[test]
    fn test_from_json_file_missing_path_is_an_error() {
        let err = Roster::from_json_file("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, crate::error::StorageError::Io(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Roster::from_json("not json").is_err());
        assert!(Roster::from_json(r#"{"id": "ada"}"#).is_err());
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let roster = Roster::builtin();
        let ids: Vec<&str> = roster.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["adriele", "jeniffer", "esdras"]);
    }
}
