// Keyword set of the Presto statement grammar (presto-parser Statement.g).
// Lowercase and strictly sorted so lookups can binary search.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "all",
    "alter",
    "and",
    "approximate",
    "array",
    "as",
    "asc",
    "at",
    "bernoulli",
    "between",
    "bigint",
    "boolean",
    "by",
    "case",
    "cast",
    "catalog",
    "catalogs",
    "char",
    "character",
    "coalesce",
    "columns",
    "confidence",
    "constraint",
    "create",
    "cross",
    "current",
    "current_date",
    "current_time",
    "current_timestamp",
    "date",
    "day",
    "dec",
    "decimal",
    "desc",
    "describe",
    "distinct",
    "distributed",
    "double",
    "drop",
    "else",
    "end",
    "escape",
    "except",
    "exists",
    "explain",
    "extract",
    "false",
    "first",
    "following",
    "for",
    "format",
    "from",
    "full",
    "functions",
    "graphviz",
    "group",
    "having",
    "hour",
    "if",
    "in",
    "inner",
    "insert",
    "int",
    "integer",
    "intersect",
    "interval",
    "into",
    "is",
    "join",
    "json",
    "json_extract_scalar",
    "last",
    "left",
    "like",
    "limit",
    "localtime",
    "localtimestamp",
    "logical",
    "minute",
    "month",
    "natural",
    "not",
    "null",
    "nullif",
    "nulls",
    "number",
    "numeric",
    "on",
    "or",
    "order",
    "outer",
    "over",
    "partition",
    "partitions",
    "poissonized",
    "preceding",
    "range",
    "recursive",
    "rename",
    "replace",
    "rescaled",
    "right",
    "row",
    "rows",
    "schema",
    "schemas",
    "second",
    "select",
    "show",
    "stratify",
    "substring",
    "system",
    "table",
    "tables",
    "tablesample",
    "text",
    "then",
    "time",
    "timestamp",
    "to",
    "true",
    "try_cast",
    "type",
    "unbounded",
    "union",
    "use",
    "using",
    "values",
    "varchar",
    "varying",
    "view",
    "when",
    "where",
    "with",
    "year",
    "zone",
];
