//! Depth-first parse tree walk.
//!
//! [`walk`] calls [`Listener::enter`] before a node's children and
//! [`Listener::exit`] after them. [`ModelBuilder`] listens for the node kinds
//! that carry model information and ignores everything else.

use crate::ast::{Node, NodeKind};
use crate::builder::ModelBuilder;
use crate::classifier::TypeCategory;
use crate::error::GormResult;

/// Receives enter/exit notifications during a walk.
pub trait Listener {
    fn enter(&mut self, node: &Node) -> GormResult<()>;
    fn exit(&mut self, node: &Node) -> GormResult<()>;
}

/// Walk `node` and its subtree, left to right. Stops at the first error.
pub fn walk<L: Listener + ?Sized>(node: &Node, listener: &mut L) -> GormResult<()> {
    listener.enter(node)?;
    for child in &node.children {
        walk(child, listener)?;
    }
    listener.exit(node)
}

/// Data type category for a node kind, if it is a data type node.
pub fn type_category(kind: NodeKind) -> Option<TypeCategory> {
    let category = match kind {
        NodeKind::StringDataType => TypeCategory::String,
        NodeKind::NationalStringDataType => TypeCategory::NationalString,
        NodeKind::NationalVaryingStringDataType => TypeCategory::NationalVaryingString,
        NodeKind::DimensionDataType => TypeCategory::Dimension,
        NodeKind::SimpleDataType => TypeCategory::Simple,
        NodeKind::CollectionDataType => TypeCategory::Collection,
        NodeKind::SpatialDataType => TypeCategory::Spatial,
        NodeKind::LongVarcharDataType => TypeCategory::LongVarchar,
        NodeKind::LongVarbinaryDataType => TypeCategory::LongVarbinary,
        _ => return None,
    };
    Some(category)
}

impl Listener for ModelBuilder {
    fn enter(&mut self, node: &Node) -> GormResult<()> {
        match node.kind {
            NodeKind::CreateTable => self.enter_table(&node.text)?,
            NodeKind::ColumnDeclaration => self.enter_column(&node.text)?,
            NodeKind::DefaultConstraint => self.set_default(&node.text),
            NodeKind::CommentConstraint => self.set_comment(&node.text),
            NodeKind::NullConstraint => {
                let not_null = node.text.to_ascii_uppercase().starts_with("NOT");
                self.set_not_null(not_null);
            }
            kind => {
                if let Some(category) = type_category(kind) {
                    self.set_type(&node.text, category.rules());
                }
            }
        }
        Ok(())
    }

    fn exit(&mut self, node: &Node) -> GormResult<()> {
        match node.kind {
            NodeKind::CreateTable => self.exit_table(),
            NodeKind::ColumnDeclaration => self.exit_column(),
            _ => Ok(()),
        }
    }
}
