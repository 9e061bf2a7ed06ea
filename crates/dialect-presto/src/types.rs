use dialectql_core::{SemanticType, UnrecognizedTypeWarning};
use tracing::warn;

// Exact, case-sensitive base type names as printed by `SHOW COLUMNS`.
const TYPE_MAP: &[(&str, SemanticType)] = &[
    ("bigint", SemanticType::BigInteger),
    ("boolean", SemanticType::Boolean),
    ("date", SemanticType::Date),
    ("decimal", SemanticType::Numeric),
    ("double", SemanticType::Float),
    ("integer", SemanticType::Integer),
    ("json", SemanticType::Json),
    ("real", SemanticType::Float),
    ("smallint", SemanticType::SmallInteger),
    ("timestamp", SemanticType::Timestamp),
    ("tinyint", SemanticType::SmallInteger),
    ("varbinary", SemanticType::Binary),
    ("varchar", SemanticType::String),
];

/// Maps a raw engine type name to its semantic type. Parameterized types
/// such as `varchar(255)` are looked up by their base name. Unknown names
/// return `None`; callers decide how to report them.
pub fn lookup_type(raw_type: &str) -> Option<SemanticType> {
    let base = raw_type
        .split_once('(')
        .map_or(raw_type, |(base, _)| base)
        .trim_end();
    TYPE_MAP
        .iter()
        .find(|(name, _)| *name == base)
        .map(|(_, semantic)| *semantic)
}

/// Like [`lookup_type`], degrading unknown names to [`SemanticType::Unknown`]
/// with a warning instead of failing.
#[must_use]
pub fn map_type(raw_type: &str) -> SemanticType {
    lookup_type(raw_type).unwrap_or_else(|| {
        warn!(raw_type, "did not recognize type `{raw_type}`");
        SemanticType::Unknown
    })
}

pub(crate) fn map_column_type(column: &str, raw_type: &str) -> SemanticType {
    lookup_type(raw_type).unwrap_or_else(|| {
        let warning = UnrecognizedTypeWarning {
            column: column.to_string(),
            raw_type: raw_type.to_string(),
        };
        warn!(column, raw_type, "{warning}");
        SemanticType::Unknown
    })
}
