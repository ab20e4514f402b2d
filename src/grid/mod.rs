pub mod columns;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Row lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Active => write!(f, "Active"),
            Status::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A single row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub email: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub progress: u8,
}

/// Form state for a row that has not been committed yet.
/// `age` stays text until commit so the input field can hold whatever
/// was typed; conversion happens in `RowStore::add`.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub name: String,
    pub age: String,
    pub email: String,
    pub status: Status,
}

impl Draft {
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.email.clear();
        self.status = Status::Active;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("age '{0}' is not a number")]
    InvalidAge(String),
}

/// Ordered row collection. Ids come from a monotonic counter, so a
/// removed row's id is never handed out again.
#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<Person>,
    next_id: u64,
}

impl RowStore {
    pub fn from_rows(rows: Vec<Person>) -> Self {
        let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { rows, next_id }
    }

    /// The dataset the grid ships with
    pub fn sample() -> Self {
        Self::from_rows(vec![
            Person {
                id: 1,
                name: "John Doe".to_string(),
                age: 28,
                email: "john@example.com".to_string(),
                status: Status::Active,
                progress: 75,
            },
            Person {
                id: 2,
                name: "Jane Smith".to_string(),
                age: 32,
                email: "jane@example.com".to_string(),
                status: Status::Inactive,
                progress: 30,
            },
            Person {
                id: 3,
                name: "Mark Johnson".to_string(),
                age: 35,
                email: "mark@example.com".to_string(),
                status: Status::Active,
                progress: 60,
            },
            Person {
                id: 4,
                name: "Sarah Williams".to_string(),
                age: 27,
                email: "sarah@example.com".to_string(),
                status: Status::Inactive,
                progress: 50,
            },
        ])
    }

    pub fn rows(&self) -> &[Person] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row built from the draft. Nothing is mutated on error:
    /// the caller keeps the draft and the dialog stays open.
    pub fn add(&mut self, draft: &Draft) -> Result<&Person, DraftError> {
        if draft.name.trim().is_empty() {
            return Err(DraftError::MissingField("name"));
        }
        if draft.age.trim().is_empty() {
            return Err(DraftError::MissingField("age"));
        }
        if draft.email.trim().is_empty() {
            return Err(DraftError::MissingField("email"));
        }
        let age: u32 = draft
            .age
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidAge(draft.age.trim().to_string()))?;

        let person = Person {
            id: self.next_id,
            name: draft.name.trim().to_string(),
            age,
            email: draft.email.trim().to_string(),
            status: draft.status,
            progress: 0,
        };
        self.next_id += 1;
        self.rows.push(person);
        Ok(self.rows.last().expect("row just pushed"))
    }

    /// Drop the row with the given id, keeping the rest in order.
    /// Removing an id that isn't there is a no-op.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }
}

/// Read a row set from a JSON array. Duplicate ids are rejected up
/// front, otherwise the store's uniqueness invariant would be broken
/// before the first keypress.
pub fn rows_from_file(path: &Path) -> Result<Vec<Person>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let rows: Vec<Person> = serde_json::from_str(&content)
        .with_context(|| format!("Cannot parse {} as a row array", path.display()))?;

    let mut seen = HashSet::new();
    for row in &rows {
        if !seen.insert(row.id) {
            anyhow::bail!("Duplicate row id {} in {}", row.id, path.display());
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, age: &str, email: &str) -> Draft {
        Draft {
            name: name.to_string(),
            age: age.to_string(),
            email: email.to_string(),
            status: Status::Active,
        }
    }

    #[test]
    fn add_appends_row_with_zero_progress() {
        let mut store = RowStore::sample();
        let row = store.add(&draft("Alex", "40", "alex@x.com")).unwrap();
        assert_eq!(row.id, 5);
        assert_eq!(row.age, 40);
        assert_eq!(row.progress, 0);
        assert_eq!(row.status, Status::Active);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn add_rejects_empty_fields() {
        let mut store = RowStore::sample();
        assert_eq!(
            store.add(&draft("", "40", "a@x.com")),
            Err(DraftError::MissingField("name"))
        );
        assert_eq!(
            store.add(&draft("Alex", "", "a@x.com")),
            Err(DraftError::MissingField("age"))
        );
        assert_eq!(
            store.add(&draft("Alex", "40", "")),
            Err(DraftError::MissingField("email"))
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn add_rejects_non_numeric_age() {
        let mut store = RowStore::sample();
        let err = store.add(&draft("Alex", "forty", "a@x.com")).unwrap_err();
        assert_eq!(err, DraftError::InvalidAge("forty".to_string()));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_keeps_order() {
        let mut store = RowStore::sample();
        assert!(store.remove(2));
        let ids: Vec<u64> = store.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut store = RowStore::sample();
        assert!(!store.remove(99));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut store = RowStore::sample();
        store.remove(2);
        let row = store.add(&draft("Alex", "40", "alex@x.com")).unwrap();
        // length-based assignment would hand out 4 here and collide
        assert_eq!(row.id, 5);
        let ids: Vec<u64> = store.rows().iter().map(|r| r.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn rows_from_file_round_trips() {
        let path = std::env::temp_dir().join("tabulon_rows_ok.json");
        let rows = RowStore::sample().rows().to_vec();
        std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

        let loaded = rows_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded[1].name, "Jane Smith");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rows_from_file_rejects_duplicate_ids() {
        let path = std::env::temp_dir().join("tabulon_rows_dup.json");
        let mut rows = RowStore::sample().rows().to_vec();
        rows[3].id = 1;
        std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

        let err = rows_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Duplicate row id"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn counter_resumes_above_seeded_ids() {
        let mut store = RowStore::from_rows(vec![Person {
            id: 17,
            name: "Solo".to_string(),
            age: 50,
            email: "solo@x.com".to_string(),
            status: Status::Active,
            progress: 10,
        }]);
        let row = store.add(&draft("Next", "20", "next@x.com")).unwrap();
        assert_eq!(row.id, 18);
    }
}
