//! # sql2gorm
//!
//! Turn MySQL `CREATE TABLE` statements into Go structs tagged for GORM.
//!
//! ## Quick Example
//!
//! ```
//! use sql2gorm::prelude::*;
//!
//! let sql = "CREATE TABLE users (id BIGINT, name VARCHAR(64) COMMENT 'Display name');";
//! let go = sql2gorm::convert(sql, &Config::default()).unwrap();
//!
//! assert!(go.starts_with("package models\n"));
//! assert!(go.contains("type users struct {"));
//! assert!(go.contains("    name string `gorm:\"column:name\"` //Display name"));
//! ```
//!
//! ## Pipeline
//!
//! | Stage        | Module         | Output              |
//! |--------------|----------------|---------------------|
//! | Parse        | [`parser`]     | [`ast::Node`] tree  |
//! | Walk         | [`walker`]     | builder events      |
//! | Accumulate   | [`builder`]    | [`model::ModelFile`]|
//! | Render       | [`transpiler`] | Go source           |

pub mod ast;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod transpiler;
pub mod walker;

pub use config::Config;
pub use engine::{build_model, convert, convert_file};

pub mod prelude {
    pub use crate::ast::{Node, NodeKind};
    pub use crate::builder::ModelBuilder;
    pub use crate::classifier::{RuleChain, TypeCategory, classify};
    pub use crate::config::Config;
    pub use crate::engine::{build_model, convert, convert_file};
    pub use crate::error::*;
    pub use crate::model::{Column, ModelFile, Table};
    pub use crate::parser::parse;
    pub use crate::transpiler::ToGorm;
    pub use crate::walker::{Listener, walk};
}
