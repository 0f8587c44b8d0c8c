use crate::error::DataError;
use crate::params::QueryStringParameters;
use crate::window::Window;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// SQL dialect; only affects the placeholder style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// `?` placeholders (SQLite, MySQL).
    #[default]
    Generic,
    /// `$1, $2, ...` placeholders.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Generic => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Like,
    Contains,
    GtEq,
    LtEq,
}

impl Op {
    fn as_sql(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Like | Op::Contains => "LIKE",
            Op::GtEq => ">=",
            Op::LtEq => "<=",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Op::Contains => " ESCAPE '\\'",
            _ => "",
        }
    }
}

#[derive(Debug, Clone)]
struct Condition {
    column: String,
    op: Op,
    value: String,
}

/// A fluent builder for the `COUNT` and windowed `SELECT` statements a SQL
/// pagination source runs.
///
/// # Example
///
/// ```
/// use paged_list::{QueryBuilder, Window};
///
/// let q = QueryBuilder::new("articles")
///     .where_like("title", "%rust%")
///     .order_by("id", true);
/// let (sql, params) = q.build_select("id, title", Window::for_page(2, 10));
/// assert_eq!(
///     sql,
///     "SELECT id, title FROM articles WHERE title LIKE ? ORDER BY id ASC LIMIT 10 OFFSET 10"
/// );
/// assert_eq!(params, vec!["%rust%"]);
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    conditions: Vec<Condition>,
    order: Vec<(String, bool)>,
    dialect: Dialect,
}

impl QueryBuilder {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            conditions: Vec::new(),
            order: Vec::new(),
            dialect: Dialect::Generic,
        }
    }

    pub fn new_with_dialect(table: &str, dialect: Dialect) -> Self {
        Self::new(table).dialect(dialect)
    }

    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn current_dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn where_eq(self, column: &str, value: &str) -> Self {
        self.condition(column, Op::Eq, value.to_string())
    }

    pub fn where_like(self, column: &str, pattern: &str) -> Self {
        self.condition(column, Op::Like, pattern.to_string())
    }

    /// Match rows whose `column` contains `text` literally. `%`, `_` and `\`
    /// in `text` are escaped, so they never act as wildcards.
    pub fn where_contains(self, column: &str, text: &str) -> Self {
        self.condition(column, Op::Contains, format!("%{}%", escape_like(text)))
    }

    pub fn where_gte(self, column: &str, value: &str) -> Self {
        self.condition(column, Op::GtEq, value.to_string())
    }

    pub fn where_lte(self, column: &str, value: &str) -> Self {
        self.condition(column, Op::LtEq, value.to_string())
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order.push((column.to_string(), ascending));
        self
    }

    /// Whether an `ORDER BY` has been set. Windows over an unordered query
    /// are not stable across calls.
    pub fn is_ordered(&self) -> bool {
        !self.order.is_empty()
    }

    /// Translate request parameters into conditions: the free-text query
    /// becomes a literal substring match on `search_column` (see
    /// [`where_contains`](Self::where_contains)), `from`/`to` become inclusive bounds
    /// on `date_column` (rendered as `YYYY-MM-DD HH:MM:SS`).
    pub fn apply_parameters(
        mut self,
        params: &QueryStringParameters,
        search_column: &str,
        date_column: &str,
    ) -> Self {
        if let Some(q) = params.query() {
            self = self.where_contains(search_column, q);
        }
        if let Some(from) = params.date_from() {
            self = self.where_gte(date_column, &from.format(DATE_FORMAT).to_string());
        }
        if let Some(to) = params.date_to() {
            self = self.where_lte(date_column, &to.format(DATE_FORMAT).to_string());
        }
        self
    }

    /// Build the `COUNT(*)` statement over the filtered table, returning `(sql, bind_values)`.
    pub fn build_count(&self) -> (String, Vec<String>) {
        let mut sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let params = self.append_where(&mut sql);
        (sql, params)
    }

    /// Build the windowed `SELECT`, returning `(sql, bind_values)`.
    ///
    /// The window is rendered verbatim; a negative offset or limit is handed
    /// to the database as-is.
    pub fn build_select(&self, columns: &str, window: Window) -> (String, Vec<String>) {
        let mut sql = format!("SELECT {columns} FROM {}", self.table);
        let params = self.append_where(&mut sql);
        self.append_order(&mut sql);
        sql.push_str(&format!(" LIMIT {} OFFSET {}", window.limit, window.offset));
        (sql, params)
    }

    /// Reject table, column and selected-column identifiers that are not
    /// plain (optionally dotted) SQL identifiers.
    pub fn validate(&self, columns: &str) -> Result<(), DataError> {
        check_identifier(&self.table, false, "table")?;
        for column in columns.split(',').map(str::trim) {
            check_identifier(column, true, "column")?;
        }
        for cond in &self.conditions {
            check_identifier(&cond.column, false, "column")?;
        }
        for (column, _) in &self.order {
            check_identifier(column, false, "column")?;
        }
        Ok(())
    }

    fn condition(mut self, column: &str, op: Op, value: String) -> Self {
        self.conditions.push(Condition {
            column: column.to_string(),
            op,
            value,
        });
        self
    }

    fn append_where(&self, sql: &mut String) -> Vec<String> {
        if self.conditions.is_empty() {
            return Vec::new();
        }
        let clauses: Vec<_> = self
            .conditions
            .iter()
            .enumerate()
            .map(|(idx, cond)| {
                let placeholder = self.dialect.placeholder(idx + 1);
                format!(
                    "{} {} {placeholder}{}",
                    cond.column,
                    cond.op.as_sql(),
                    cond.op.suffix()
                )
            })
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        self.conditions.iter().map(|c| c.value.clone()).collect()
    }

    fn append_order(&self, sql: &mut String) {
        if self.order.is_empty() {
            return;
        }
        let clauses: Vec<_> = self
            .order
            .iter()
            .map(|(col, asc)| format!("{col} {}", if *asc { "ASC" } else { "DESC" }))
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn check_identifier(ident: &str, allow_star: bool, kind: &str) -> Result<(), DataError> {
    if is_valid_identifier(ident, allow_star) {
        Ok(())
    } else {
        Err(DataError::InvalidQuery(format!("invalid {kind} identifier: {ident}")))
    }
}

fn is_valid_identifier(ident: &str, allow_star: bool) -> bool {
    if ident.is_empty() {
        return false;
    }
    let parts: Vec<&str> = ident.split('.').collect();
    let last = parts.len() - 1;
    parts.iter().enumerate().all(|(idx, part)| {
        (allow_star && *part == "*" && idx == last) || is_valid_segment(part)
    })
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
