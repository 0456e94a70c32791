//! Table-driven classification of facts
//!
//! Each fact is matched by predicate against every category and relation spec,
//! in table order. Specs that share an output name share one accumulator.

use crate::config::SchemaConfig;
use crate::database::{CategoryTable, Database, RelationTable};
use crate::error::{ConvertError, ConvertResult};
use factdb_types::{ArgRange, Fact};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Cross product of two argument ranges over `args`, left range outermost.
///
/// Both ranges are clamped to the arguments actually present, so a range
/// starting past the end contributes nothing.
pub fn cross_pairs(
    arg1: ArgRange,
    arg2: ArgRange,
    args: &[String],
) -> impl Iterator<Item = (&str, &str)> {
    let n1 = arg1.available(args.len());
    let n2 = arg2.available(args.len());
    (0..n1).flat_map(move |i| {
        (0..n2).map(move |j| (args[arg1.start + i].as_str(), args[arg2.start + j].as_str()))
    })
}

struct RelationAccumulator {
    functional: bool,
    pairs: Vec<(String, String)>,
}

/// Accumulates category values and relation pairs over a stream of facts
pub struct Classifier<'a> {
    schema: &'a SchemaConfig,
    categories: IndexMap<&'a str, Vec<String>>,
    relations: IndexMap<&'a str, RelationAccumulator>,
    facts_seen: usize,
    facts_matched: usize,
    unmatched: BTreeMap<String, usize>,
}

impl<'a> Classifier<'a> {
    pub fn new(schema: &'a SchemaConfig) -> Self {
        let mut categories = IndexMap::new();
        for spec in &schema.categories {
            categories.entry(spec.name.as_str()).or_insert_with(Vec::new);
        }

        // The first spec declaring a name decides whether it is functional.
        let mut relations = IndexMap::new();
        for spec in &schema.relations {
            relations.entry(spec.name.as_str()).or_insert_with(|| RelationAccumulator {
                functional: spec.functional,
                pairs: Vec::new(),
            });
        }

        Self {
            schema,
            categories,
            relations,
            facts_seen: 0,
            facts_matched: 0,
            unmatched: BTreeMap::new(),
        }
    }

    /// Classify one fact. Returns whether any spec matched it.
    ///
    /// A category whose index is missing from the fact is fatal. Relation
    /// ranges are clamped instead.
    pub fn add_fact(&mut self, line_number: usize, fact: &Fact) -> ConvertResult<bool> {
        let schema = self.schema;
        self.facts_seen += 1;
        let mut matched = false;

        for spec in &schema.categories {
            if spec.predicate != fact.predicate {
                continue;
            }
            let value = fact.arg(spec.arg_index).ok_or_else(|| ConvertError::ArgumentIndex {
                line_number,
                predicate: fact.predicate.clone(),
                category: spec.name.clone(),
                index: spec.arg_index,
                arity: fact.arity(),
            })?;
            if let Some(values) = self.categories.get_mut(spec.name.as_str()) {
                values.push(value.to_string());
            }
            matched = true;
        }

        for spec in &schema.relations {
            if spec.predicate != fact.predicate {
                continue;
            }
            if let Some(acc) = self.relations.get_mut(spec.name.as_str()) {
                acc.pairs.extend(
                    cross_pairs(spec.arg1, spec.arg2, &fact.args)
                        .map(|(left, right)| (left.to_string(), right.to_string())),
                );
            }
            matched = true;
        }

        if matched {
            self.facts_matched += 1;
        } else {
            *self.unmatched.entry(fact.predicate.clone()).or_default() += 1;
        }
        Ok(matched)
    }

    /// Values accumulated so far for a category name
    pub fn category_values(&self, name: &str) -> &[String] {
        self.categories.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Pairs accumulated so far for a relation name
    pub fn relation_pairs(&self, name: &str) -> &[(String, String)] {
        self.relations.get(name).map(|acc| acc.pairs.as_slice()).unwrap_or_default()
    }

    pub fn facts_seen(&self) -> usize {
        self.facts_seen
    }

    pub fn facts_matched(&self) -> usize {
        self.facts_matched
    }

    /// Predicates no spec matched, with their fact counts
    pub fn unmatched_predicates(&self) -> &BTreeMap<String, usize> {
        &self.unmatched
    }

    /// Finish accumulation and build the tables for emission
    #[instrument(skip(self), fields(facts = self.facts_seen))]
    pub fn into_database(self) -> Database {
        for (predicate, count) in &self.unmatched {
            debug!(%predicate, count, "Predicate matched no table entry");
        }

        let schema = self.schema;
        let mut type_tags: IndexMap<&str, Vec<String>> = IndexMap::new();
        for spec in &schema.categories {
            let tags = type_tags.entry(spec.name.as_str()).or_default();
            if !tags.contains(&spec.type_tag) {
                tags.push(spec.type_tag.clone());
            }
        }

        let entities = self.categories.values().flatten().cloned().collect();

        let categories = self
            .categories
            .into_iter()
            .map(|(name, values)| CategoryTable {
                name: name.to_string(),
                type_tags: type_tags.swap_remove(name).unwrap_or_default(),
                values,
            })
            .collect();

        let relations = self
            .relations
            .into_iter()
            .map(|(name, acc)| {
                if acc.functional {
                    RelationTable::functional(name, acc.pairs)
                } else {
                    RelationTable::set_valued(name, acc.pairs)
                }
            })
            .collect();

        Database { entities, categories, relations }
    }
}
