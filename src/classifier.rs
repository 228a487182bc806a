//! SQL type name to Go type mapping.
//!
//! Each data type category of the grammar owns a fixed [`RuleChain`]. A chain is
//! an ordered list of substring rules followed by a fallback, so classification
//! always yields a type.

/// Go type used for 64-bit integers.
pub const INT64: &str = "int64";
/// Go type used for floating point columns.
pub const FLOAT64: &str = "float64";
/// Go type used for boolean columns.
pub const BOOL: &str = "bool";
/// Go type used for text-like columns.
pub const STRING: &str = "string";
/// Go type used for date and time columns.
pub const TIME: &str = "time.Time";

const TIME_IMPORTS: &[&str] = &["time"];

/// One `(substring, type, imports)` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Matched against the lowercased type name. Empty matches anything.
    pub contains: &'static str,
    pub go_type: &'static str,
    pub imports: &'static [&'static str],
}

impl Rule {
    pub const fn new(contains: &'static str, go_type: &'static str) -> Self {
        Self {
            contains,
            go_type,
            imports: &[],
        }
    }

    pub const fn with_imports(
        contains: &'static str,
        go_type: &'static str,
        imports: &'static [&'static str],
    ) -> Self {
        Self {
            contains,
            go_type,
            imports,
        }
    }

    /// Unconditional rule, used as a chain fallback.
    pub const fn any(go_type: &'static str) -> Self {
        Self::new("", go_type)
    }

    fn matches(&self, type_name: &str) -> bool {
        type_name.contains(self.contains)
    }
}

/// Ordered rules evaluated first-match-wins, always ending in a fallback.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain {
    rules: &'static [Rule],
    fallback: Rule,
}

impl RuleChain {
    pub const fn new(rules: &'static [Rule], fallback: Rule) -> Self {
        Self { rules, fallback }
    }

    /// A chain that maps every name to the same type.
    pub const fn always(go_type: &'static str) -> Self {
        Self::new(&[], Rule::any(go_type))
    }

    /// Rules in evaluation order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }
}

const DIMENSION_LIST: &[Rule] = &[
    Rule::new("int", INT64),
    Rule::new("timestamp", INT64),
    Rule::with_imports("datetime", TIME, TIME_IMPORTS),
    Rule::with_imports("year", TIME, TIME_IMPORTS),
];

const SIMPLE_LIST: &[Rule] = &[
    Rule::with_imports("date", TIME, TIME_IMPORTS),
    Rule::new("bool", BOOL),
    Rule::new("serial", INT64),
];

/// Integer, fixed and floating point, temporal and binary types that take a
/// length or precision.
pub const DIMENSION_RULES: RuleChain = RuleChain::new(DIMENSION_LIST, Rule::any(FLOAT64));

/// Types without dimensions: `DATE`, blobs, booleans, `SERIAL`.
pub const SIMPLE_RULES: RuleChain = RuleChain::new(SIMPLE_LIST, Rule::any(STRING));

/// String, national string, collection, spatial and long types.
pub const STRING_RULES: RuleChain = RuleChain::always(STRING);

/// Data type categories the grammar distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    String,
    NationalString,
    NationalVaryingString,
    Dimension,
    Simple,
    Collection,
    Spatial,
    LongVarchar,
    LongVarbinary,
}

impl TypeCategory {
    /// The fixed rule chain for this category.
    pub fn rules(self) -> &'static RuleChain {
        match self {
            TypeCategory::Dimension => &DIMENSION_RULES,
            TypeCategory::Simple => &SIMPLE_RULES,
            TypeCategory::String
            | TypeCategory::NationalString
            | TypeCategory::NationalVaryingString
            | TypeCategory::Collection
            | TypeCategory::Spatial
            | TypeCategory::LongVarchar
            | TypeCategory::LongVarbinary => &STRING_RULES,
        }
    }
}

/// Resolve `type_name` against `chain`.
///
/// The name is lowercased before matching. Returns the first rule whose
/// substring occurs in the name, or the chain's fallback.
pub fn classify<'c>(type_name: &str, chain: &'c RuleChain) -> &'c Rule {
    let type_name = type_name.trim().to_lowercase();
    chain
        .iter()
        .find(|rule| rule.matches(&type_name))
        .unwrap_or(&chain.fallback)
}
