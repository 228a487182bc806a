//! Event driven model builder.
//!
//! [`ModelBuilder`] receives table, column and attribute events in source
//! order and assembles a [`ModelFile`]. At most one table and one column are
//! open at a time; an event that breaks this nesting is a
//! [`ProtocolViolation`] and aborts the run. Attribute events that arrive
//! with no open column are logged and dropped.

use tracing::{debug, warn};

use crate::classifier::{RuleChain, classify};
use crate::error::{GormResult, ProtocolViolation};
use crate::model::{Column, ModelFile, Table};

/// Accumulates tables and columns for a single walk.
#[derive(Debug)]
pub struct ModelBuilder {
    file: ModelFile,
    current_table: Option<Table>,
    current_column: Option<Column>,
}

impl ModelBuilder {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            file: ModelFile::new(package),
            current_table: None,
            current_column: None,
        }
    }

    /// Open a table. `qualified_name` may be `schema.table`, quoted or not.
    pub fn enter_table(&mut self, qualified_name: &str) -> GormResult<()> {
        let name = table_name(qualified_name);
        if let Some(open) = &self.current_table {
            return Err(ProtocolViolation::TableAlreadyOpen {
                open: open.name.clone(),
                next: name,
            }
            .into());
        }
        self.current_table = Some(Table::new(name));
        Ok(())
    }

    /// Seal the open table and append it to the file.
    pub fn exit_table(&mut self) -> GormResult<()> {
        if let Some(col) = &self.current_column {
            return Err(ProtocolViolation::Unfinished(col.name.clone()).into());
        }
        let table = self
            .current_table
            .take()
            .ok_or(ProtocolViolation::NoOpenTable("table exit"))?;
        debug!(table = %table.name, columns = table.columns.len(), "table done");
        self.file.tables.push(table);
        Ok(())
    }

    /// Open a column on the current table.
    pub fn enter_column(&mut self, raw_name: &str) -> GormResult<()> {
        let name = unquote(raw_name);
        if let Some(open) = &self.current_column {
            return Err(ProtocolViolation::ColumnAlreadyOpen {
                open: open.name.clone(),
                next: name,
            }
            .into());
        }
        if self.current_table.is_none() {
            return Err(ProtocolViolation::NoOpenTable("column start").into());
        }
        self.current_column = Some(Column::new(name));
        Ok(())
    }

    /// Seal the open column and append it to the current table.
    pub fn exit_column(&mut self) -> GormResult<()> {
        let table = self
            .current_table
            .as_mut()
            .ok_or(ProtocolViolation::NoOpenTable("column exit"))?;
        let col = self
            .current_column
            .take()
            .ok_or(ProtocolViolation::NoOpenColumn("column exit"))?;
        debug!(table = %table.name, column = %col.name, data_type = %col.data_type, "column done");
        table.columns.push(col);
        Ok(())
    }

    /// Classify `type_name` with `rules` and apply it to the open column.
    pub fn set_type(&mut self, type_name: &str, rules: &RuleChain) {
        let Some(col) = self.current_column.as_mut() else {
            warn!(type_name, "data type outside of a column, ignored");
            return;
        };
        let rule = classify(type_name, rules);
        col.data_type = rule.go_type.to_string();
        for import in rule.imports {
            self.file.add_import(import);
        }
    }

    /// Record the raw default literal on the open column.
    pub fn set_default(&mut self, raw_value: &str) {
        let Some(col) = self.current_column.as_mut() else {
            warn!(raw_value, "default outside of a column, ignored");
            return;
        };
        let value = raw_value.trim();
        col.default_value = (!value.is_empty()).then(|| value.to_string());
    }

    /// Record a comment string literal on the open column.
    pub fn set_comment(&mut self, raw_literal: &str) {
        let Some(col) = self.current_column.as_mut() else {
            warn!(raw_literal, "comment outside of a column, ignored");
            return;
        };
        let text = unquote(raw_literal);
        col.comment = (!text.is_empty()).then_some(text);
    }

    /// Mark the open column `NOT NULL` (or explicitly nullable).
    pub fn set_not_null(&mut self, not_null: bool) {
        let Some(col) = self.current_column.as_mut() else {
            warn!(not_null, "null constraint outside of a column, ignored");
            return;
        };
        col.not_null = not_null;
    }

    /// Name of the table being built, if any.
    pub fn current_table(&self) -> Option<&str> {
        self.current_table.as_ref().map(|t| t.name.as_str())
    }

    /// Finish the walk and hand back the model.
    pub fn finish(self) -> GormResult<ModelFile> {
        if let Some(col) = self.current_column {
            return Err(ProtocolViolation::Unfinished(col.name).into());
        }
        if let Some(table) = self.current_table {
            return Err(ProtocolViolation::Unfinished(table.name).into());
        }
        Ok(self.file)
    }
}

/// Last `.` separated segment of a table reference, unquoted.
fn table_name(qualified_name: &str) -> String {
    let last = qualified_name
        .rsplit('.')
        .next()
        .unwrap_or(qualified_name);
    unquote(last)
}

/// Drop one pair of matching delimiters and undouble the delimiter inside.
/// Text that is not wrapped in a quote pair is returned trimmed.
fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    for quote in ['`', '"', '\''] {
        if let Some(inner) = raw.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner.replace(&format!("{quote}{quote}"), &quote.to_string());
        }
    }
    raw.to_string()
}
