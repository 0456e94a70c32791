//! Run statistics for a conversion

use crate::database::Database;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Counts collected over one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub facts_parsed: usize,
    /// Facts matched by at least one category or relation
    pub facts_matched: usize,
    pub entities: usize,
    /// Values per category name
    pub category_values: BTreeMap<String, usize>,
    /// Entries (functional) or pairs (set-valued) per relation name
    pub relation_entries: BTreeMap<String, usize>,
    /// Facts per predicate that no table entry matched
    pub unmatched_predicates: BTreeMap<String, usize>,
}

impl ConversionStats {
    /// Fill the table counts from a finished database
    pub fn record_database(&mut self, db: &Database) {
        self.entities = db.entities.len();
        self.category_values =
            db.categories.iter().map(|t| (t.name.clone(), t.values.len())).collect();
        self.relation_entries =
            db.relations.iter().map(|t| (t.name().to_string(), t.len())).collect();
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lines read:      {}", self.lines_read)?;
        writeln!(f, "facts parsed:    {}", self.facts_parsed)?;
        writeln!(f, "facts matched:   {}", self.facts_matched)?;
        writeln!(f, "entities:        {}", self.entities)?;

        writeln!(f, "categories:")?;
        for (name, count) in &self.category_values {
            writeln!(f, "  {name}: {count}")?;
        }
        writeln!(f, "relations:")?;
        for (name, count) in &self.relation_entries {
            writeln!(f, "  {name}: {count}")?;
        }
        if !self.unmatched_predicates.is_empty() {
            writeln!(f, "unmatched predicates:")?;
            for (predicate, count) in &self.unmatched_predicates {
                writeln!(f, "  {predicate}: {count}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report_lists_unmatched_only_when_present() {
        let mut stats = ConversionStats { lines_read: 2, facts_parsed: 2, ..Default::default() };
        assert!(!stats.to_string().contains("unmatched"));

        stats.unmatched_predicates.insert("road".to_string(), 2);
        assert!(stats.to_string().contains("  road: 2"));
    }

    #[test]
    fn test_json_report_fields() {
        let stats = ConversionStats { facts_matched: 3, ..Default::default() };
        let value: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(value["facts_matched"], 3);
    }
}
