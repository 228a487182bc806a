//! Go source generation for the table model.
//!
//! Renders a [`ModelFile`] into a Go file with one GORM annotated struct per
//! table. Names and literals are written as they came out of the SQL; nothing
//! is escaped.

use crate::model::{Column, DEFAULT_PACKAGE, ModelFile, Table};

/// Trait for converting model nodes to Go source.
pub trait ToGorm {
    /// Convert this node to Go source text.
    fn to_gorm(&self) -> String;
}

impl ToGorm for ModelFile {
    fn to_gorm(&self) -> String {
        let package = if self.package.is_empty() {
            DEFAULT_PACKAGE
        } else {
            self.package.as_str()
        };
        let mut out = format!("package {}\n", package);

        if !self.imports.is_empty() {
            out.push_str("import (\n");
            for import in &self.imports {
                out.push_str(&format!("    \"{}\"\n", import));
            }
            out.push_str(")\n");
        }

        for table in &self.tables {
            out.push_str(&table.to_gorm());
            out.push('\n');
        }

        out
    }
}

impl ToGorm for Table {
    fn to_gorm(&self) -> String {
        let fields: Vec<String> = self.columns.iter().map(|c| c.to_gorm()).collect();
        format!("\ntype {} struct {{\n{}\n}}\n", self.name, fields.join("\n"))
    }
}

impl ToGorm for Column {
    fn to_gorm(&self) -> String {
        let mut tags = vec![format!("column:{}", self.name)];
        if let Some(default) = &self.default_value {
            tags.push(format!("default:{}", default));
        }
        if self.not_null {
            tags.push("not null".to_string());
        }
        let comment = self.comment.as_deref().unwrap_or(&self.name);

        format!(
            "    {} {} `gorm:\"{}\"` //{}",
            self.name,
            self.data_type,
            tags.join(";"),
            comment
        )
    }
}
