use crate::classifier::Classifier;
use crate::config::SchemaConfig;
use crate::database::Database;
use crate::emitter::render_database;
use crate::error::{ConvertError, ConvertResult};
use crate::parser::FactLines;
use crate::stats::ConversionStats;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Fact file to s-expression database converter
#[derive(Debug, Clone)]
pub struct Converter {
    schema: SchemaConfig,
}

impl Default for Converter {
    fn default() -> Self {
        Self::geobase()
    }
}

impl Converter {
    /// Create a converter over validated tables
    #[instrument(skip(schema))]
    pub fn new(schema: SchemaConfig) -> ConvertResult<Self> {
        schema.validate()?;
        info!(
            categories = schema.categories.len(),
            relations = schema.relations.len(),
            "Creating converter"
        );
        Ok(Self { schema })
    }

    /// Converter over the built-in geobase tables
    pub fn geobase() -> Self {
        Self { schema: SchemaConfig::geobase() }
    }

    pub fn schema(&self) -> &SchemaConfig {
        &self.schema
    }

    /// Read every fact and accumulate the tables.
    ///
    /// Stops at the first malformed line or missing category index.
    #[instrument(skip(self, reader))]
    pub fn accumulate<R: BufRead>(&self, reader: R) -> ConvertResult<(Database, ConversionStats)> {
        let mut classifier = Classifier::new(&self.schema);
        let mut facts = FactLines::new(reader);

        for item in facts.by_ref() {
            let (line_number, fact) = item?;
            classifier.add_fact(line_number, &fact)?;
        }

        let mut stats = ConversionStats {
            lines_read: facts.lines_read(),
            facts_parsed: classifier.facts_seen(),
            facts_matched: classifier.facts_matched(),
            unmatched_predicates: classifier.unmatched_predicates().clone(),
            ..Default::default()
        };
        let db = classifier.into_database();
        stats.record_database(&db);

        info!(
            facts = stats.facts_parsed,
            matched = stats.facts_matched,
            entities = stats.entities,
            "Accumulated fact tables"
        );
        Ok((db, stats))
    }

    /// Convert facts from `reader` and write the database to `writer`.
    ///
    /// Nothing is written unless the whole input converts.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> ConvertResult<ConversionStats> {
        let (db, stats) = self.accumulate(reader)?;
        writer.write_all(render_database(&db).as_bytes())?;
        writer.flush()?;
        Ok(stats)
    }

    /// Convert facts held in memory
    pub fn convert_str(&self, input: &str) -> ConvertResult<String> {
        let (db, _) = self.accumulate(input.as_bytes())?;
        Ok(render_database(&db))
    }

    /// Convert `input` into `output`.
    ///
    /// The output file is only created once the input has converted
    /// successfully.
    #[instrument(skip(self))]
    pub fn convert_file(&self, input: &Path, output: &Path) -> ConvertResult<ConversionStats> {
        let reader = open_fact_file(input)?;
        let (db, stats) = self.accumulate(reader)?;

        fs::write(output, render_database(&db))?;
        info!(output = %output.display(), "Wrote fact database");
        Ok(stats)
    }
}

/// Open a fact file for buffered reading
pub fn open_fact_file(path: &Path) -> ConvertResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ConvertError::MissingFile { path: path.to_path_buf(), source })
}
