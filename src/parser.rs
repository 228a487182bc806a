//! MySQL DDL parser using nom.
//!
//! Builds a [`Node`] tree from `CREATE TABLE` statements. Keywords are matched
//! case-insensitively while identifiers and literals keep their original text.
//! Any other statement is skipped up to its terminating `;`.
//!
//! # Tree shape
//!
//! ```text
//! Root
//! └── CreateTable `shop`.`users`
//!     ├── ColumnDeclaration `id`
//!     │   ├── DimensionDataType bigint
//!     │   ├── NullConstraint NOT NULL
//!     │   └── AutoIncrementConstraint AUTO_INCREMENT
//!     ├── TableConstraint PRIMARY KEY (`id`)
//!     └── TableOption ENGINE=InnoDB
//! ```

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case, take_until, take_while1},
    character::complete::{anychar, char, digit1, multispace1, not_line_ending, satisfy},
    combinator::{cut, map, not, opt, recognize, value},
    error::{context, ErrorKind, ParseError, VerboseError, VerboseErrorKind},
    multi::{many0, separated_list1},
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use tracing::{debug, warn};

use crate::ast::{Node, NodeKind};
use crate::error::{GormError, GormResult};

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Parse a complete SQL source into a tree.
pub fn parse(input: &str) -> GormResult<Node> {
    let mut statements = Vec::new();
    let mut rest = input;

    loop {
        rest = ws(rest).map(|(r, _)| r).unwrap_or(rest);
        if rest.is_empty() {
            break;
        }
        if let Some(after) = rest.strip_prefix(';') {
            rest = after;
            continue;
        }

        if create_table_head(rest).is_ok() {
            let (remaining, table) = create_table(rest).map_err(|e| to_error(input, e))?;
            match table {
                Some(node) => statements.push(node),
                None => warn!(
                    statement = %preview(rest),
                    "CREATE TABLE without column definitions, skipped"
                ),
            }
            rest = remaining;
        } else {
            let (remaining, skipped) = statement_tail(rest).map_err(|e| to_error(input, e))?;
            if skipped.is_empty() {
                return Err(GormError::parse(
                    input.len() - rest.len(),
                    format!("unterminated literal near '{}'", preview(rest)),
                ));
            }
            debug!(statement = %preview(skipped), "skipping statement");
            rest = remaining;
        }
    }

    Ok(Node::branch(NodeKind::Root, "", statements))
}

fn to_error(source: &str, err: nom::Err<VerboseError<&str>>) -> GormError {
    let e = match err {
        nom::Err::Incomplete(_) => {
            return GormError::parse(source.len(), "unexpected end of input");
        }
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
    };
    let Some((at, _)) = e.errors.first() else {
        return GormError::parse(0, "parse failed");
    };
    let position = source.len() - at.len();
    let expected = e.errors.iter().find_map(|(_, kind)| match kind {
        VerboseErrorKind::Context(what) => Some(*what),
        _ => None,
    });
    let message = match (expected, at.is_empty()) {
        (Some(what), true) => format!("expected {} at end of input", what),
        (Some(what), false) => format!("expected {} near '{}'", what, preview(at)),
        (None, true) => "unexpected end of input".to_string(),
        (None, false) => format!("unexpected input near '{}'", preview(at)),
    };
    GormError::parse(position, message)
}

/// First line of `text`, shortened for messages.
fn preview(text: &str) -> String {
    let line = text.trim_start().lines().next().unwrap_or("");
    line.chars().take(32).collect()
}

// =============================================================================
// Lexical helpers
// =============================================================================

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whitespace and comments (`--`, `#`, `/* */`), possibly empty.
fn ws(input: &str) -> Res<()> {
    value(
        (),
        many0(alt((multispace1, line_comment, block_comment))),
    )(input)
}

fn line_comment(input: &str) -> Res<&str> {
    recognize(pair(alt((tag("--"), tag("#"))), not_line_ending))(input)
}

fn block_comment(input: &str) -> Res<&str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Case-insensitive keyword that must not run into a following word character.
fn kw<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> Res<'a, &'a str> {
    terminated(tag_no_case(keyword), not(satisfy(is_word_char)))
}

/// Rest of `input` after whitespace and `keyword`, if it is next.
fn followed_by<'a>(input: &'a str, keyword: &'static str) -> Option<&'a str> {
    preceded(ws, kw(keyword))(input).ok().map(|(rest, _)| rest)
}

fn word(input: &str) -> Res<&str> {
    take_while1(is_word_char)(input)
}

fn backquoted(input: &str) -> Res<&str> {
    recognize(delimited(
        char('`'),
        many0(alt((is_not("`"), tag("``")))),
        char('`'),
    ))(input)
}

fn quoted_with<'a>(quote: char) -> impl FnMut(&'a str) -> Res<'a, &'a str> {
    move |input| {
        recognize(delimited(
            char(quote),
            many0(alt((
                take_while1(move |c: char| c != quote && c != '\\'),
                recognize(pair(char('\\'), anychar)),
                recognize(pair(char(quote), char(quote))),
            ))),
            char(quote),
        ))(input)
    }
}

/// Single or double quoted string literal, quotes included.
fn string_literal(input: &str) -> Res<&str> {
    alt((quoted_with('\''), quoted_with('"')))(input)
}

/// Column or table identifier as written, quotes included.
fn identifier(input: &str) -> Res<&str> {
    alt((backquoted, quoted_with('"'), word))(input)
}

/// `name` or `schema.name`.
fn qualified_name(input: &str) -> Res<&str> {
    recognize(pair(identifier, many0(pair(char('.'), identifier))))(input)
}

/// A parenthesised group with nested groups and literals, parentheses included.
fn balanced_parens(input: &str) -> Res<&str> {
    recognize(delimited(
        char('('),
        many0(alt((
            balanced_parens,
            string_literal,
            backquoted,
            is_not("()'\"`"),
        ))),
        char(')'),
    ))(input)
}

/// Everything up to the next top-level `,` or `)`.
fn definition_tail(input: &str) -> Res<&str> {
    recognize(many0(alt((
        balanced_parens,
        string_literal,
        backquoted,
        is_not(",()'\"`"),
    ))))(input)
}

/// Everything up to the next `;` outside of literals.
fn statement_tail(input: &str) -> Res<&str> {
    recognize(many0(alt((string_literal, backquoted, is_not(";'\"`")))))(input)
}

// =============================================================================
// CREATE TABLE
// =============================================================================

fn create_table_head(input: &str) -> Res<()> {
    value(
        (),
        tuple((
            kw("CREATE"),
            opt(preceded(ws, kw("TEMPORARY"))),
            ws,
            kw("TABLE"),
            opt(tuple((ws, kw("IF"), ws, kw("NOT"), ws, kw("EXISTS")))),
        )),
    )(input)
}

/// Parse one `CREATE TABLE`. Returns `None` for forms without a column list
/// (`LIKE other`, `AS SELECT ...`).
fn create_table(input: &str) -> Res<Option<Node>> {
    let (input, _) = create_table_head(input)?;
    let (input, name) = cut(context("table name", preceded(ws, qualified_name)))(input)?;
    let (input, _) = ws(input)?;

    if !input.starts_with('(') {
        let (input, _) = statement_tail(input)?;
        return Ok((input, None));
    }

    let (input, mut children) = cut(create_definitions)(input)?;
    let (input, _) = ws(input)?;
    let (input, options) = statement_tail(input)?;
    let options = options.trim();
    if !options.is_empty() {
        children.push(Node::leaf(NodeKind::TableOption, options));
    }

    Ok((input, Some(Node::branch(NodeKind::CreateTable, name, children))))
}

fn create_definitions(input: &str) -> Res<Vec<Node>> {
    delimited(
        char('('),
        separated_list1(
            preceded(ws, char(',')),
            preceded(ws, context("column or key definition", create_definition)),
        ),
        preceded(ws, context("',' or ')'", char(')'))),
    )(input)
}

fn create_definition(input: &str) -> Res<Node> {
    alt((table_constraint, column_declaration))(input)
}

/// `PRIMARY KEY (...)`, `KEY idx (...)`, `CONSTRAINT fk FOREIGN KEY ...` and friends.
fn table_constraint(input: &str) -> Res<Node> {
    map(
        recognize(pair(
            alt((
                kw("PRIMARY"),
                kw("UNIQUE"),
                kw("KEY"),
                kw("INDEX"),
                kw("FULLTEXT"),
                kw("SPATIAL"),
                kw("CONSTRAINT"),
                kw("FOREIGN"),
                kw("CHECK"),
            )),
            definition_tail,
        )),
        |text: &str| Node::leaf(NodeKind::TableConstraint, text.trim()),
    )(input)
}

fn column_declaration(input: &str) -> Res<Node> {
    let (input, name) = identifier(input)?;
    let (input, data_type) = cut(context("data type", preceded(ws, data_type)))(input)?;
    let (input, constraints) = many0(preceded(ws, column_constraint))(input)?;

    let mut children = Vec::with_capacity(constraints.len() + 1);
    children.push(data_type);
    children.extend(constraints);
    Ok((input, Node::branch(NodeKind::ColumnDeclaration, name, children)))
}

// =============================================================================
// Data types
// =============================================================================

/// Category of a single-word type keyword.
fn type_keyword(upper: &str) -> Option<NodeKind> {
    let kind = match upper {
        "CHAR" | "CHARACTER" | "VARCHAR" | "NVARCHAR" | "NCHAR" | "TINYTEXT" | "TEXT"
        | "MEDIUMTEXT" | "LONGTEXT" => NodeKind::StringDataType,
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "MIDDLEINT" | "INT" | "INTEGER" | "BIGINT"
        | "INT1" | "INT2" | "INT3" | "INT4" | "INT8" | "REAL" | "DOUBLE" | "FLOAT4"
        | "FLOAT8" | "FLOAT" | "DECIMAL" | "DEC" | "FIXED" | "NUMERIC" | "BIT" | "TIME"
        | "TIMESTAMP" | "DATETIME" | "BINARY" | "VARBINARY" | "BLOB" | "YEAR" => {
            NodeKind::DimensionDataType
        }
        "DATE" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BOOL" | "BOOLEAN" | "SERIAL" => {
            NodeKind::SimpleDataType
        }
        "ENUM" | "SET" => NodeKind::CollectionDataType,
        "GEOMETRY" | "GEOMETRYCOLLECTION" | "GEOMCOLLECTION" | "LINESTRING"
        | "MULTILINESTRING" | "MULTIPOINT" | "MULTIPOLYGON" | "POINT" | "POLYGON" | "JSON" => {
            NodeKind::SpatialDataType
        }
        _ => return None,
    };
    Some(kind)
}

/// Type keyword(s) plus dimensions and modifiers. The node text is the
/// keyword part as written.
fn data_type(input: &str) -> Res<Node> {
    let (after_first, first) = word(input)?;
    let upper = first.to_ascii_uppercase();

    let (rest, kind) = match upper.as_str() {
        "NATIONAL" => {
            let (rest, _) = preceded(ws, alt((kw("VARCHAR"), kw("CHARACTER"), kw("CHAR"))))(after_first)?;
            match followed_by(rest, "VARYING") {
                Some(rest) => (rest, NodeKind::NationalVaryingStringDataType),
                None => (rest, NodeKind::NationalStringDataType),
            }
        }
        "NCHAR" => match followed_by(after_first, "VARCHAR") {
            Some(rest) => (rest, NodeKind::NationalStringDataType),
            None => (after_first, NodeKind::StringDataType),
        },
        "LONG" => {
            if let Some(rest) = followed_by(after_first, "VARBINARY") {
                (rest, NodeKind::LongVarbinaryDataType)
            } else {
                let rest = followed_by(after_first, "VARCHAR").unwrap_or(after_first);
                (rest, NodeKind::LongVarcharDataType)
            }
        }
        "DOUBLE" => (
            followed_by(after_first, "PRECISION").unwrap_or(after_first),
            NodeKind::DimensionDataType,
        ),
        "CHAR" | "CHARACTER" => (
            followed_by(after_first, "VARYING").unwrap_or(after_first),
            NodeKind::StringDataType,
        ),
        other => match type_keyword(other) {
            Some(kind) => (after_first, kind),
            None => {
                return Err(nom::Err::Error(VerboseError::from_error_kind(
                    input,
                    ErrorKind::Tag,
                )));
            }
        },
    };

    let text = &input[..input.len() - rest.len()];
    let (rest, _) = opt(preceded(ws, balanced_parens))(rest)?;
    let (rest, _) = many0(preceded(ws, type_modifier))(rest)?;
    Ok((rest, Node::leaf(kind, text)))
}

/// `UNSIGNED`, `ZEROFILL`, `CHARACTER SET x`, `COLLATE x` and similar.
fn type_modifier(input: &str) -> Res<&str> {
    alt((
        kw("UNSIGNED"),
        kw("SIGNED"),
        kw("ZEROFILL"),
        kw("BINARY"),
        kw("ASCII"),
        kw("UNICODE"),
        recognize(tuple((
            alt((
                recognize(tuple((kw("CHARACTER"), ws, kw("SET")))),
                recognize(tuple((kw("CHAR"), ws, kw("SET")))),
                kw("CHARSET"),
            )),
            ws,
            opt(char('=')),
            ws,
            identifier,
        ))),
        collate,
    ))(input)
}

fn collate(input: &str) -> Res<&str> {
    recognize(tuple((kw("COLLATE"), ws, opt(char('=')), ws, identifier)))(input)
}

// =============================================================================
// Column constraints
// =============================================================================

fn column_constraint(input: &str) -> Res<Node> {
    alt((
        map(recognize(tuple((kw("NOT"), ws, kw("NULL")))), |t: &str| {
            Node::leaf(NodeKind::NullConstraint, t)
        }),
        map(kw("NULL"), |t: &str| Node::leaf(NodeKind::NullConstraint, t)),
        map(
            preceded(pair(kw("DEFAULT"), ws), cut(context("default value", default_value))),
            |v: &str| Node::leaf(NodeKind::DefaultConstraint, v),
        ),
        map(
            preceded(pair(kw("COMMENT"), ws), cut(context("comment string", string_literal))),
            |c: &str| Node::leaf(NodeKind::CommentConstraint, c),
        ),
        map(alt((kw("AUTO_INCREMENT"), kw("AUTOINCREMENT"))), |t: &str| {
            Node::leaf(NodeKind::AutoIncrementConstraint, t)
        }),
        map(recognize(pair(opt(pair(kw("PRIMARY"), ws)), kw("KEY"))), |t: &str| {
            Node::leaf(NodeKind::PrimaryKeyConstraint, t)
        }),
        map(recognize(pair(kw("UNIQUE"), opt(pair(ws, kw("KEY"))))), |t: &str| {
            Node::leaf(NodeKind::UniqueKeyConstraint, t)
        }),
        map(other_constraint, |t: &str| Node::leaf(NodeKind::OtherColumnConstraint, t)),
    ))(input)
}

/// Column attributes that carry nothing for the model.
fn other_constraint(input: &str) -> Res<&str> {
    alt((
        recognize(tuple((kw("ON"), ws, kw("UPDATE"), ws, default_value))),
        collate,
        recognize(tuple((kw("COLUMN_FORMAT"), ws, word))),
        recognize(tuple((kw("STORAGE"), ws, word))),
        recognize(tuple((
            opt(tuple((kw("GENERATED"), ws, kw("ALWAYS"), ws))),
            kw("AS"),
            ws,
            balanced_parens,
            opt(preceded(ws, alt((kw("VIRTUAL"), kw("STORED"))))),
        ))),
        recognize(tuple((
            kw("REFERENCES"),
            ws,
            qualified_name,
            opt(preceded(ws, balanced_parens)),
            many0(preceded(ws, reference_action)),
        ))),
        recognize(tuple((
            opt(tuple((
                kw("CONSTRAINT"),
                ws,
                opt(terminated(preceded(not(kw("CHECK")), identifier), ws)),
            ))),
            kw("CHECK"),
            ws,
            balanced_parens,
        ))),
        recognize(tuple((kw("SERIAL"), ws, kw("DEFAULT"), ws, kw("VALUE")))),
        recognize(tuple((kw("SRID"), ws, digit1))),
        kw("INVISIBLE"),
        kw("VISIBLE"),
    ))(input)
}

/// `ON DELETE CASCADE`, `ON UPDATE SET NULL`, ...
fn reference_action(input: &str) -> Res<&str> {
    recognize(tuple((
        kw("ON"),
        ws,
        alt((kw("DELETE"), kw("UPDATE"))),
        ws,
        alt((
            recognize(tuple((kw("SET"), ws, kw("NULL")))),
            recognize(tuple((kw("SET"), ws, kw("DEFAULT")))),
            recognize(tuple((kw("NO"), ws, kw("ACTION")))),
            kw("RESTRICT"),
            kw("CASCADE"),
        )),
    )))(input)
}

/// A default value as written: literal, `NULL`, function call or `(expr)`.
fn default_value(input: &str) -> Res<&str> {
    alt((
        balanced_parens,
        // 'text', N'text', _utf8mb4'text', b'0101', x'ff'
        recognize(pair(opt(word), string_literal)),
        recognize_float,
        // NULL, TRUE, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP(3), now()
        recognize(pair(word, opt(balanced_parens))),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(sql: &str) -> Vec<Node> {
        parse(sql).unwrap().children
    }

    fn kinds(node: &Node) -> Vec<NodeKind> {
        node.children.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_simple_create_table() {
        let t = tables("CREATE TABLE t (id INT, name VARCHAR(20) COMMENT 'Name', created_at DATETIME DEFAULT NULL);");
        assert_eq!(t.len(), 1);
        let table = &t[0];
        assert_eq!(table.kind, NodeKind::CreateTable);
        assert_eq!(table.text, "t");
        assert_eq!(table.children.len(), 3);

        let id = &table.children[0];
        assert_eq!(id.text, "id");
        assert_eq!(id.children[0], Node::leaf(NodeKind::DimensionDataType, "INT"));

        let name = &table.children[1];
        assert_eq!(name.children[0], Node::leaf(NodeKind::StringDataType, "VARCHAR"));
        assert_eq!(name.children[1], Node::leaf(NodeKind::CommentConstraint, "'Name'"));

        let created = &table.children[2];
        assert_eq!(created.children[0].kind, NodeKind::DimensionDataType);
        assert_eq!(created.children[1], Node::leaf(NodeKind::DefaultConstraint, "NULL"));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let t = tables("create table IF not EXISTS `Users` (`Id` bigint unsigned not null)");
        assert_eq!(t[0].text, "`Users`");
        let col = &t[0].children[0];
        assert_eq!(col.text, "`Id`");
        assert_eq!(kinds(col), vec![NodeKind::DimensionDataType, NodeKind::NullConstraint]);
        assert_eq!(col.children[0].text, "bigint");
        assert_eq!(col.children[1].text, "not null");
    }

    #[test]
    fn test_qualified_table_name() {
        let t = tables("CREATE TABLE `shop`.`orders` (`order` int)");
        assert_eq!(t[0].text, "`shop`.`orders`");
        assert_eq!(t[0].children[0].text, "`order`");
    }

    #[test]
    fn test_mysqldump_output() {
        let sql = r#"
-- MySQL dump 10.13  Distrib 8.0.36
/*!40101 SET @OLD_CHARACTER_SET_CLIENT=@@CHARACTER_SET_CLIENT */;
DROP TABLE IF EXISTS `users`;
/*!40101 SET @saved_cs_client     = @@character_set_client */;
CREATE TABLE `users` (
  `id` bigint(20) unsigned NOT NULL AUTO_INCREMENT,
  `email` varchar(255) COLLATE utf8mb4_unicode_ci NOT NULL COMMENT 'login; email',
  `balance` decimal(10,2) NOT NULL DEFAULT '0.00',
  `status` enum('active','banned') DEFAULT 'active',
  `created_at` timestamp NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_email` (`email`),
  KEY `idx_status` (`status`,`created_at`)
) ENGINE=InnoDB AUTO_INCREMENT=3 DEFAULT CHARSET=utf8mb4 COMMENT='accounts';
INSERT INTO `users` VALUES (1,'a@b.c',0.00,'active','2024-01-01 00:00:00');
"#;
        let t = tables(sql);
        assert_eq!(t.len(), 1);
        let users = &t[0];
        assert_eq!(
            kinds(users),
            vec![
                NodeKind::ColumnDeclaration,
                NodeKind::ColumnDeclaration,
                NodeKind::ColumnDeclaration,
                NodeKind::ColumnDeclaration,
                NodeKind::ColumnDeclaration,
                NodeKind::TableConstraint,
                NodeKind::TableConstraint,
                NodeKind::TableConstraint,
                NodeKind::TableOption,
            ]
        );

        let id = &users.children[0];
        assert_eq!(
            kinds(id),
            vec![
                NodeKind::DimensionDataType,
                NodeKind::NullConstraint,
                NodeKind::AutoIncrementConstraint,
            ]
        );

        let email = &users.children[1];
        assert_eq!(email.children[2], Node::leaf(NodeKind::CommentConstraint, "'login; email'"));

        let balance = &users.children[2];
        assert_eq!(balance.children[2], Node::leaf(NodeKind::DefaultConstraint, "'0.00'"));

        let status = &users.children[3];
        assert_eq!(status.children[0], Node::leaf(NodeKind::CollectionDataType, "enum"));

        let created = &users.children[4];
        assert_eq!(
            kinds(created),
            vec![
                NodeKind::DimensionDataType,
                NodeKind::NullConstraint,
                NodeKind::DefaultConstraint,
                NodeKind::OtherColumnConstraint,
            ]
        );
        assert_eq!(created.children[2].text, "CURRENT_TIMESTAMP");

        assert_eq!(users.children[5].text, "PRIMARY KEY (`id`)");
        assert_eq!(
            users.children[8].text,
            "ENGINE=InnoDB AUTO_INCREMENT=3 DEFAULT CHARSET=utf8mb4 COMMENT='accounts'"
        );
    }

    #[test]
    fn test_multi_word_types() {
        let t = tables(
            "CREATE TABLE m (
                a NATIONAL VARCHAR(10),
                b NATIONAL CHAR VARYING(10),
                c NCHAR VARCHAR(5),
                d LONG VARBINARY,
                e LONG VARCHAR,
                f DOUBLE PRECISION(8,2),
                g POINT,
                h TINYBLOB,
                i NCHAR(3)
            )",
        );
        let types: Vec<(NodeKind, &str)> = t[0]
            .children
            .iter()
            .map(|c| (c.children[0].kind, c.children[0].text.as_str()))
            .collect();
        assert_eq!(
            types,
            vec![
                (NodeKind::NationalStringDataType, "NATIONAL VARCHAR"),
                (NodeKind::NationalVaryingStringDataType, "NATIONAL CHAR VARYING"),
                (NodeKind::NationalStringDataType, "NCHAR VARCHAR"),
                (NodeKind::LongVarbinaryDataType, "LONG VARBINARY"),
                (NodeKind::LongVarcharDataType, "LONG VARCHAR"),
                (NodeKind::DimensionDataType, "DOUBLE PRECISION"),
                (NodeKind::SpatialDataType, "POINT"),
                (NodeKind::SimpleDataType, "TINYBLOB"),
                (NodeKind::StringDataType, "NCHAR"),
            ]
        );
    }

    #[test]
    fn test_default_value_forms() {
        let t = tables(
            "CREATE TABLE d (
                a INT DEFAULT -1,
                b BIT(1) DEFAULT b'0',
                c VARCHAR(8) CHARACTER SET utf8mb4 DEFAULT _utf8mb4'x',
                d DATETIME(3) DEFAULT CURRENT_TIMESTAMP(3),
                e JSON DEFAULT (JSON_ARRAY()),
                f BOOL DEFAULT TRUE
            )",
        );
        let defaults: Vec<&str> = t[0]
            .children
            .iter()
            .map(|c| c.children[1].text.as_str())
            .collect();
        assert_eq!(
            defaults,
            vec!["-1", "b'0'", "_utf8mb4'x'", "CURRENT_TIMESTAMP(3)", "(JSON_ARRAY())", "TRUE"]
        );
    }

    #[test]
    fn test_column_references_and_checks() {
        let t = tables(
            "CREATE TABLE o (
                user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
                qty INT CHECK (qty > 0),
                total DECIMAL(10,2) GENERATED ALWAYS AS (qty * 2) STORED,
                CONSTRAINT fk_user FOREIGN KEY (user_id) REFERENCES users (id)
            )",
        );
        let o = &t[0];
        assert_eq!(o.children.len(), 4);
        assert_eq!(
            o.children[0].children[2],
            Node::leaf(
                NodeKind::OtherColumnConstraint,
                "REFERENCES users (id) ON DELETE CASCADE"
            )
        );
        assert_eq!(o.children[1].children[1].kind, NodeKind::OtherColumnConstraint);
        assert_eq!(o.children[2].children[1].kind, NodeKind::OtherColumnConstraint);
        assert_eq!(o.children[3].kind, NodeKind::TableConstraint);
    }

    #[test]
    fn test_multiple_tables_and_comments() {
        let sql = "# leading\nCREATE TABLE a (x INT); /* between */ CREATE TEMPORARY TABLE b (y DATE) -- trailing";
        let t = tables(sql);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].text, "a");
        assert_eq!(t[1].text, "b");
    }

    #[test]
    fn test_empty_input() {
        assert!(tables("").is_empty());
        assert!(tables("  -- nothing here\n;;").is_empty());
    }

    #[test]
    fn test_create_table_like_is_skipped() {
        let t = tables("CREATE TABLE copy LIKE original; CREATE TABLE real_one (id INT);");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].text, "real_one");
    }

    #[test]
    fn test_unknown_type_is_error() {
        let err = parse("CREATE TABLE t (id uuid)").unwrap_err();
        match err {
            GormError::Parse { position, message } => {
                assert_eq!(position, 19);
                assert!(message.contains("data type"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_table_is_error() {
        let err = parse("CREATE TABLE t (id INT").unwrap_err();
        assert!(matches!(err, GormError::Parse { .. }));
    }

    #[test]
    fn test_unterminated_literal_is_error() {
        let err = parse("INSERT INTO t VALUES ('oops").unwrap_err();
        assert!(matches!(err, GormError::Parse { .. }));
    }
}
