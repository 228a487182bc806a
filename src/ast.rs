//! Parse tree for MySQL DDL.
//!
//! The parser produces a [`Node`] tree that mirrors the grammar rules it
//! recognised. Only a handful of kinds matter for model building; the rest are
//! kept so the tree stays a faithful picture of the input.

use std::fmt;

/// Grammar rule a [`Node`] was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Whole input.
    Root,
    /// `CREATE TABLE name (...)`. Text is the raw, possibly qualified, name.
    CreateTable,
    /// One column definition inside a table. Text is the raw column name.
    ColumnDeclaration,

    // Data type categories. Text is the type keyword(s) as written.
    StringDataType,
    NationalStringDataType,
    NationalVaryingStringDataType,
    DimensionDataType,
    SimpleDataType,
    CollectionDataType,
    SpatialDataType,
    LongVarcharDataType,
    LongVarbinaryDataType,

    /// `NULL` or `NOT NULL`. Text is the constraint as written.
    NullConstraint,
    /// `DEFAULT <value>`. Text is the raw value.
    DefaultConstraint,
    /// `COMMENT '<text>'`. Text is the string literal including quotes.
    CommentConstraint,
    AutoIncrementConstraint,
    PrimaryKeyConstraint,
    UniqueKeyConstraint,
    /// Any other column attribute (ON UPDATE, COLLATE, REFERENCES, ...).
    OtherColumnConstraint,

    /// Table level key, index or constraint definition.
    TableConstraint,
    /// Table option after the closing parenthesis.
    TableOption,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node.
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    pub fn branch(kind: NodeKind, text: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            text: text.into(),
            children,
        }
    }

    /// Render the tree one node per line, indented by depth.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.kind.to_string());
        if !self.text.is_empty() {
            out.push(' ');
            out.push_str(&self.text);
        }
        out.push('\n');
        for child in &self.children {
            child.dump_into(out, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_indents_children() {
        let tree = Node::branch(
            NodeKind::Root,
            "",
            vec![Node::branch(
                NodeKind::CreateTable,
                "users",
                vec![Node::leaf(NodeKind::ColumnDeclaration, "id")],
            )],
        );
        assert_eq!(tree.dump(), "Root\n  CreateTable users\n    ColumnDeclaration id\n");
    }
}
