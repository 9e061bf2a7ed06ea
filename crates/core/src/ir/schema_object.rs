use super::SemanticType;

/// One column as reported by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub raw_type: String,
    pub semantic_type: SemanticType,
    pub nullable: bool,
    /// Always `None` for engines without column defaults.
    pub default: Option<String>,
    pub is_partition_key: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub column_names: Vec<String>,
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyInfo {
    pub name: Option<String>,
    pub constrained_columns: Vec<String>,
    pub referred_schema: Option<String>,
    pub referred_table: String,
    pub referred_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryKeyConstraint {
    pub name: Option<String>,
    pub constrained_columns: Vec<String>,
}

impl PrimaryKeyConstraint {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constrained_columns.is_empty()
    }
}
