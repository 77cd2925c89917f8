//! Query plan value objects
//!
//! A [`QueryPlan`] is the structured form of one archive's document
//! query: fixed base columns, renamed index-field columns, the ordered
//! join collection, and the trailing lookup joins. Rendering to SQL is
//! deterministic; the same plan always yields byte-identical text.

use std::fmt;

/// One `source AS alias` expression in the SELECT list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedColumn {
    pub source: String,
    pub alias: String,
}

/// One required table join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    /// Bare table name within the index database
    pub table_name: String,
    /// Alias the table is joined under
    pub table_alias: String,
    /// Key column on the joined table
    pub local_key: String,
    /// Key column on the referenced table
    pub foreign_key: String,
    /// Alias of the referenced table
    pub foreign_alias: String,
}

impl JoinSpec {
    pub fn new(
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
        local_key: impl Into<String>,
        foreign_key: impl Into<String>,
        foreign_alias: impl Into<String>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            table_alias: table_alias.into(),
            local_key: local_key.into(),
            foreign_key: foreign_key.into(),
            foreign_alias: foreign_alias.into(),
        }
    }

    /// The ON clause, `alias.local = foreign_alias.foreign`
    fn condition(&self) -> String {
        format!(
            "{}.{} = {}.{}",
            self.table_alias, self.local_key, self.foreign_alias, self.foreign_key
        )
    }
}

/// Ordered join collection with unique table names
///
/// Inserting a table that is already present is a no-op, which is how
/// duplicate descriptor tables collapse into one join. A repeated table
/// must arrive with the same key pair; two descriptors claiming the same
/// table under different key conventions would silently produce a wrong
/// join, so that case asserts.
#[derive(Debug, Clone, Default)]
pub struct JoinSet {
    joins: Vec<JoinSpec>,
}

impl JoinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a join unless its table is already present.
    /// Returns whether the join was added.
    pub fn insert(&mut self, join: JoinSpec) -> bool {
        if let Some(existing) = self
            .joins
            .iter()
            .find(|j| j.table_name == join.table_name)
        {
            debug_assert!(
                existing.local_key == join.local_key && existing.foreign_key == join.foreign_key,
                "table '{}' joined with conflicting key pairs ({}/{} vs {}/{})",
                join.table_name,
                existing.local_key,
                existing.foreign_key,
                join.local_key,
                join.foreign_key,
            );
            return false;
        }

        self.joins.push(join);
        true
    }

    pub fn contains(&self, table_name: &str) -> bool {
        self.joins.iter().any(|j| j.table_name == table_name)
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JoinSpec> {
        self.joins.iter()
    }

    pub fn into_vec(self) -> Vec<JoinSpec> {
        self.joins
    }
}

/// Fixed columns every document row carries, independent of descriptors
const BASE_COLUMNS: [&str; 12] = [
    "d.DOCUMENTID",
    "d.DOCUMENTGUID",
    "so.PAGE_NR",
    "so.FILE_NR",
    "so.TYPE_ID",
    "t.FILE_TYPE",
    "d.STATUS",
    "d.GEBRUIKERID",
    "g.[NAAMVOLUIT] + ' (' + g.NAAM + ')' AS GEBRUIKER",
    "d.AANMAAKDATUM",
    "d.MUTATIEDATUM",
    "d.INDEXEERDATUM",
];

/// Trailing joins present in every plan: file-type lookup and author name
const FIXED_TRAILING_JOINS: [&str; 2] = [
    "OBJECTMANAGER.dbo.SUBOBJ_TYPE_LOOKUP t ON so.TYPE_ID = t.TYPE_ID",
    "X10DBASE.dbo.GEBRUIKER g ON d.GEBRUIKERID = g.GEBRUIKERID",
];

/// Number of fixed trailing joins in every plan
pub(crate) const FIXED_JOIN_COUNT: usize = FIXED_TRAILING_JOINS.len();

/// The structured document query for one archive
#[derive(Debug, Clone)]
pub struct QueryPlan {
    /// Archive the plan was built for
    pub archive_id: i32,
    /// `source AS alias` expressions, in descriptor order
    pub renamed_columns: Vec<RenamedColumn>,
    /// Seeded document-table join plus derived index-table joins,
    /// unique by table name, in insertion order
    pub joins: Vec<JoinSpec>,
}

impl QueryPlan {
    /// Joins derived from descriptors, excluding the seeded document join
    pub fn derived_joins(&self) -> &[JoinSpec] {
        self.joins.get(1..).unwrap_or(&[])
    }

    /// Total join count: collection joins plus the fixed trailing two
    pub fn join_count(&self) -> usize {
        self.joins.len() + FIXED_JOIN_COUNT
    }

    /// Render the plan to executable SQL
    pub fn to_sql(&self) -> String {
        let mut sql = String::with_capacity(512);

        sql.push_str("SELECT ");
        sql.push_str(&BASE_COLUMNS.join(", "));
        for column in &self.renamed_columns {
            sql.push_str(&format!(", [{}] AS [{}]", column.source, column.alias));
        }

        sql.push_str(&format!(
            " FROM OBJECTMANAGER.dbo.A{id}SUBOBJECT so \
             INNER JOIN OBJECTMANAGER.dbo.A{id}OBJECT o ON o.OBJ_ID = so.OBJ_ID",
            id = self.archive_id
        ));

        for join in &self.joins {
            sql.push_str(&format!(
                " INNER JOIN X10DBASE.dbo.{} {} ON {}",
                join.table_name,
                join.table_alias,
                join.condition()
            ));
        }

        for join in FIXED_TRAILING_JOINS {
            sql.push_str(" INNER JOIN ");
            sql.push_str(join);
        }

        // Descending on the first selected column, newest documents first
        sql.push_str(" ORDER BY 1 DESC");
        sql
    }
}

/// Display renders the executable SQL
impl fmt::Display for QueryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}
