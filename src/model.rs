//! In-memory model of the tables found in a DDL file.

use serde::Serialize;

/// Package name used when none is configured.
pub const DEFAULT_PACKAGE: &str = "models";

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: String::new(),
            not_null: false,
            default_value: None,
            comment: None,
        }
    }
}

/// One struct definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

/// Everything needed to render one Go source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelFile {
    pub package: String,
    pub tables: Vec<Table>,
    /// Distinct import paths in first-seen order.
    pub imports: Vec<String>,
}

impl ModelFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            tables: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Register an import. Registering the same path twice is a no-op.
    pub fn add_import(&mut self, path: &str) {
        if !self.imports.iter().any(|i| i == path) {
            self.imports.push(path.to_string());
        }
    }
}

impl Default for ModelFile {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}
