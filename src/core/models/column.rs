//! Semantic fields and their resolved column positions
//!
//! Exported headers differ between Jira locales and export configurations,
//! so each [`Field`] carries a list of header aliases. The resolver turns the
//! aliases into a [`ColumnMap`] once per CSV.

use std::collections::BTreeMap;

use serde::Serialize;

/// A semantic column of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Issue key
    Key,
    /// Issue summary
    Summary,
    /// Issue type
    Type,
    /// Assignee
    Assignee,
    /// Original estimate
    EstimateSeconds,
    /// Logged work
    WorkedSeconds,
    /// Workflow status
    Status,
    /// Resolution
    Resolution,
    /// Priority
    Priority,
    /// Creation date
    Created,
    /// Last update date
    Updated,
    /// Reporter
    Reporter,
}

impl Field {
    /// Number of semantic fields
    pub const COUNT: usize = 12;

    /// Every field, in resolution order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Key,
        Self::Summary,
        Self::Type,
        Self::Assignee,
        Self::EstimateSeconds,
        Self::WorkedSeconds,
        Self::Status,
        Self::Resolution,
        Self::Priority,
        Self::Created,
        Self::Updated,
        Self::Reporter,
    ];

    /// Field name as used in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Summary => "summary",
            Self::Type => "type",
            Self::Assignee => "assignee",
            Self::EstimateSeconds => "estimateSeconds",
            Self::WorkedSeconds => "workedSeconds",
            Self::Status => "status",
            Self::Resolution => "resolution",
            Self::Priority => "priority",
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Reporter => "reporter",
        }
    }

    /// Built-in header aliases, most specific first
    #[must_use]
    pub const fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Self::Key => &["Clave de incidencia", "Key", "Issue Key"],
            Self::Summary => &["Resumen", "Summary"],
            Self::Type => &["Tipo de Incidencia", "Issue Type", "Type"],
            Self::Assignee => &["Persona asignada", "Assignee"],
            Self::EstimateSeconds => &["Estimación original", "Original Estimate", "Time Estimate"],
            Self::WorkedSeconds => &["Tiempo Trabajado", "Time Spent", "Work Logged"],
            Self::Status => &["Estado", "Status"],
            Self::Resolution => &["Resolución", "Resolution"],
            Self::Priority => &["Prioridad", "Priority"],
            Self::Created => &["Creada", "Created"],
            Self::Updated => &["Actualizada", "Updated"],
            Self::Reporter => &["Informador", "Reporter"],
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    /// Accepts the report name (`estimateSeconds`) or its snake-case form
    /// (`estimate_seconds`), in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.name().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown column field: {s}"))
    }
}

/// Header aliases per field: the built-in ones plus user-supplied extras
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    extra: BTreeMap<Field, Vec<String>>,
}

impl AliasTable {
    /// Table with only the built-in aliases
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alias for a field, tried after the built-in ones
    ///
    /// Blank aliases are ignored.
    #[must_use]
    pub fn with_alias(mut self, field: Field, alias: impl Into<String>) -> Self {
        self.push(field, alias);
        self
    }

    /// Append an alias for a field in place
    pub fn push(&mut self, field: Field, alias: impl Into<String>) {
        let alias = alias.into();
        if alias.trim().is_empty() {
            return;
        }
        self.extra.entry(field).or_default().push(alias);
    }

    /// Aliases for a field in the order they are tried
    pub fn aliases(&self, field: Field) -> impl Iterator<Item = &str> {
        field
            .default_aliases()
            .iter()
            .copied()
            .chain(self.extra.get(&field).into_iter().flatten().map(String::as_str))
    }
}

/// The header cell a field resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    /// Zero-based column index
    pub index: usize,
    /// Header text of that column
    pub header: String,
}

/// Column position of every semantic field
///
/// Reads through an unresolved field, or past the end of a short row, yield
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<ResolvedColumn>; Field::COUNT],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            columns: std::array::from_fn(|_| None),
        }
    }
}

impl ColumnMap {
    /// Map with every field unresolved
    #[must_use]
    pub fn unresolved() -> Self {
        Self::default()
    }

    /// Record the column a field resolved to
    pub fn insert(&mut self, field: Field, index: usize, header: impl Into<String>) {
        self.columns[field.slot()] = Some(ResolvedColumn {
            index,
            header: header.into(),
        });
    }

    /// Resolved column for a field
    #[must_use]
    pub fn column(&self, field: Field) -> Option<&ResolvedColumn> {
        self.columns[field.slot()].as_ref()
    }

    /// Column index for a field
    #[must_use]
    pub fn index(&self, field: Field) -> Option<usize> {
        self.column(field).map(|c| c.index)
    }

    /// Whether a field was found in the header
    #[must_use]
    pub fn is_resolved(&self, field: Field) -> bool {
        self.column(field).is_some()
    }

    /// Fields that matched no header cell
    #[must_use]
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| !self.is_resolved(*f)).collect()
    }

    /// Read a field from a row
    #[must_use]
    pub fn get<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        self.index(field)
            .and_then(|i| row.get(i))
            .map_or("", String::as_str)
    }
}
