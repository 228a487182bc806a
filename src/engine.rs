//! Conversion pipeline: SQL text → parse tree → model → Go source.

use std::path::Path;

use tracing::{debug, info};

use crate::builder::ModelBuilder;
use crate::config::Config;
use crate::error::GormResult;
use crate::model::ModelFile;
use crate::parser;
use crate::transpiler::ToGorm;
use crate::walker;

/// Parse `sql` and build the table model.
///
/// Any [`ProtocolViolation`](crate::error::ProtocolViolation) aborts the run;
/// no partial model is returned.
pub fn build_model(sql: &str, config: &Config) -> GormResult<ModelFile> {
    let tree = parser::parse(sql)?;
    debug!(statements = tree.children.len(), "parsed");

    let mut builder = ModelBuilder::new(config.package.as_str());
    walker::walk(&tree, &mut builder)?;
    let model = builder.finish()?;

    info!(
        tables = model.tables.len(),
        imports = model.imports.len(),
        "model built"
    );
    Ok(model)
}

/// Convert `sql` straight to Go source.
///
/// # Example
///
/// ```
/// use sql2gorm::{convert, Config};
///
/// let go = convert("CREATE TABLE t (id INT);", &Config::default()).unwrap();
/// assert!(go.contains("id int64 `gorm:\"column:id\"` //id"));
/// ```
pub fn convert(sql: &str, config: &Config) -> GormResult<String> {
    Ok(build_model(sql, config)?.to_gorm())
}

/// Read a SQL file and convert it.
pub fn convert_file(path: &Path, config: &Config) -> GormResult<String> {
    let sql = std::fs::read_to_string(path)?;
    convert(&sql, config)
}
