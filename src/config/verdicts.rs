use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Status key → human-readable verdict shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerdictTable(HashMap<String, String>);

impl Default for VerdictTable {
    fn default() -> Self {
        Self::from_pairs([
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ])
    }
}

impl VerdictTable {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(status, text)| (status.into(), text.into()))
                .collect(),
        )
    }

    /// Parse a JSON object `{"status": "verdict text", ...}`.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let table: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        if table.is_empty() {
            return Err("verdict table is empty".to_string());
        }
        Ok(table)
    }

    pub fn from_file(path: &str) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn verdict(&self, status: &str) -> Option<&str> {
        self.0.get(status).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
