//! Classification tables
//!
//! A [`SchemaConfig`] holds the category and relation tables that drive the
//! classifier. The default is the GeoQuery geobase table set; custom tables
//! can be loaded from YAML or JSON files.

use crate::constants::geobase;
use crate::error::{ConvertError, ConvertResult};
use factdb_types::{ArgRange, CategorySpec, RelationSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Category and relation tables, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
    #[serde(default)]
    pub relations: Vec<RelationSpec>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::geobase()
    }
}

impl SchemaConfig {
    /// Empty tables
    pub fn empty() -> Self {
        Self { categories: Vec::new(), relations: Vec::new() }
    }

    /// The GeoQuery geobase tables
    pub fn geobase() -> Self {
        let categories = geobase::CATEGORIES
            .iter()
            .map(|&(name, tag, predicate, index)| CategorySpec::new(name, tag, predicate, index))
            .collect();
        let relations = geobase::RELATIONS
            .iter()
            .map(|&(name, predicate, (s1, c1), (s2, c2), functional)| {
                RelationSpec::new(
                    name,
                    predicate,
                    ArgRange::new(s1, c1),
                    ArgRange::new(s2, c2),
                    functional,
                )
            })
            .collect();
        Self { categories, relations }
    }

    /// Append a category spec
    pub fn with_category(mut self, spec: CategorySpec) -> Self {
        self.categories.push(spec);
        self
    }

    /// Append a relation spec
    pub fn with_relation(mut self, spec: RelationSpec) -> Self {
        self.relations.push(spec);
        self
    }

    /// Parse tables from YAML
    pub fn from_yaml_str(text: &str) -> ConvertResult<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| ConvertError::config(format!("invalid YAML tables: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse tables from JSON
    pub fn from_json_str(text: &str) -> ConvertResult<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| ConvertError::config(format!("invalid JSON tables: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load tables from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: &Path) -> ConvertResult<Self> {
        info!(path = %path.display(), "Loading table configuration");

        let text = fs::read_to_string(path).map_err(|e| {
            ConvertError::config(format!("cannot read tables {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json { Self::from_json_str(&text) } else { Self::from_yaml_str(&text) }
    }

    /// Serialize tables as YAML
    pub fn to_yaml(&self) -> ConvertResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConvertError::config(format!("cannot serialize tables: {e}")))
    }

    /// Serialize tables as pretty JSON
    pub fn to_json(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::config(format!("cannot serialize tables: {e}")))
    }

    /// Check the tables for entries the classifier cannot use.
    ///
    /// Rejects empty names, predicates and type tags, zero-width ranges, and a
    /// relation name declared both functional and set-valued.
    pub fn validate(&self) -> ConvertResult<()> {
        for (i, spec) in self.categories.iter().enumerate() {
            let setting = format!("categories[{i}]");
            if spec.name.is_empty() {
                return Err(ConvertError::config_setting(setting, "category name is empty"));
            }
            if spec.predicate.is_empty() {
                return Err(ConvertError::config_setting(
                    setting,
                    format!("category `{}` has an empty predicate", spec.name),
                ));
            }
            if spec.type_tag.is_empty() {
                return Err(ConvertError::config_setting(
                    setting,
                    format!("category `{}` has an empty type tag", spec.name),
                ));
            }
        }

        let mut functional_by_name: HashMap<&str, bool> = HashMap::new();
        for (i, spec) in self.relations.iter().enumerate() {
            let setting = format!("relations[{i}]");
            if spec.name.is_empty() {
                return Err(ConvertError::config_setting(setting, "relation name is empty"));
            }
            if spec.predicate.is_empty() {
                return Err(ConvertError::config_setting(
                    setting,
                    format!("relation `{}` has an empty predicate", spec.name),
                ));
            }
            if spec.arg1.count == 0 || spec.arg2.count == 0 {
                return Err(ConvertError::config_setting(
                    setting,
                    format!("relation `{}` has an empty argument range", spec.name),
                ));
            }
            match functional_by_name.get(spec.name.as_str()) {
                Some(&functional) if functional != spec.functional => {
                    return Err(ConvertError::config_setting(
                        setting,
                        format!(
                            "relation `{}` is declared both functional and set-valued",
                            spec.name
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    functional_by_name.insert(&spec.name, spec.functional);
                }
            }
        }

        debug!(
            categories = self.categories.len(),
            relations = self.relations.len(),
            "Validated table configuration"
        );
        Ok(())
    }
}
