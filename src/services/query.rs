//! Translates listing filters and pagination into SQL.
//!
//! A `ListQuery` yields two statements sharing one predicate: the windowed
//! select and an unwindowed count.

use crate::error::{FolioError, FolioResult};
use crate::models::Pagination;
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

pub const DEFAULT_PAGE: u32 = 1;

/// Which end of the creation timeline comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    OldestFirst,
    NewestFirst,
}

impl SortOrder {
    fn sql(&self) -> &'static str {
        // rowid follows insertion order and breaks ties between records
        // created within the same millisecond.
        match self {
            Self::OldestFirst => "created_at ASC, rowid ASC",
            Self::NewestFirst => "created_at DESC, rowid DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

impl ToSql for FilterValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => s.to_sql(),
            Self::Bool(b) => b.to_sql(),
        }
    }
}

/// A page request, already clamped to valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Reads raw `page`/`limit` query values.
    ///
    /// Missing, empty, non-numeric and zero values fall back to the defaults;
    /// negative values are rejected. `limit` is capped at `max_limit`.
    pub fn from_params(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u32,
        max_limit: u32,
    ) -> FolioResult<Self> {
        let page = parse_positive(page, "page")?.unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit, "limit")?
            .unwrap_or(default_limit)
            .min(max_limit);
        Ok(Self::new(page, limit))
    }

    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    pub fn pagination(&self, total: u64) -> Pagination {
        Pagination::new(self.page, self.limit, total)
    }
}

fn parse_positive(raw: Option<&str>, name: &str) -> FolioResult<Option<u32>> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(r) => r,
    };
    match raw.parse::<i64>() {
        Ok(n) if n < 0 => Err(FolioError::validation(format!(
            "{} must be at least 1",
            name
        ))),
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(u32::try_from(n).unwrap_or(u32::MAX))),
        Err(_) => Ok(None),
    }
}

/// Reads a boolean filter flag. Only `true` and `false` filter; anything else
/// means "do not filter".
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw.map(str::trim) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    table: &'static str,
    filters: Vec<(&'static str, FilterValue)>,
    order: SortOrder,
    window: Option<PageRequest>,
}

impl ListQuery {
    pub fn new(table: &'static str, order: SortOrder) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order,
            window: None,
        }
    }

    pub fn filter(mut self, column: &'static str, value: FilterValue) -> Self {
        self.filters.push((column, value));
        self
    }

    pub fn filter_opt(self, column: &'static str, value: Option<FilterValue>) -> Self {
        match value {
            Some(v) => self.filter(column, v),
            None => self,
        }
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.window = Some(page);
        self
    }

    fn where_clause(&self) -> String {
        let mut sql = String::from(" WHERE 1=1");
        for (column, _) in &self.filters {
            sql.push_str(" AND ");
            sql.push_str(column);
            sql.push_str(" = ?");
        }
        sql
    }

    pub fn select_sql(&self, columns: &str) -> String {
        let mut sql = format!("SELECT {} FROM {}", columns, self.table);
        sql.push_str(&self.where_clause());
        sql.push_str(" ORDER BY ");
        sql.push_str(self.order.sql());
        if self.window.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }
        sql
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}{}", self.table, self.where_clause())
    }

    pub fn filter_params(&self) -> Vec<&dyn ToSql> {
        self.filters.iter().map(|(_, v)| v as &dyn ToSql).collect()
    }

    /// Values for `select_sql`: filter values followed by the window.
    pub fn select_params(&self) -> Vec<Box<dyn ToSql + '_>> {
        let mut params: Vec<Box<dyn ToSql + '_>> = self
            .filters
            .iter()
            .map(|(_, v)| Box::new(v) as Box<dyn ToSql + '_>)
            .collect();
        if let Some(window) = self.window {
            params.push(Box::new(i64::from(window.limit)));
            params.push(Box::new(window.skip() as i64));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql_with_filters_and_window() {
        let query = ListQuery::new("blogs", SortOrder::NewestFirst)
            .filter("published", FilterValue::Bool(true))
            .paginate(PageRequest::new(2, 10));

        assert_eq!(
            query.select_sql("id, title"),
            "SELECT id, title FROM blogs WHERE 1=1 AND published = ? ORDER BY created_at DESC, rowid DESC LIMIT ? OFFSET ?"
        );
        assert_eq!(
            query.count_sql(),
            "SELECT COUNT(*) FROM blogs WHERE 1=1 AND published = ?"
        );
        assert_eq!(query.select_params().len(), 3);
        assert_eq!(query.filter_params().len(), 1);
    }

    #[test]
    fn test_select_sql_without_window() {
        let query = ListQuery::new("services", SortOrder::OldestFirst)
            .filter_opt("category", Some(FilterValue::Text("web-design".into())))
            .filter_opt("active", None);

        assert_eq!(
            query.select_sql("*"),
            "SELECT * FROM services WHERE 1=1 AND category = ? ORDER BY created_at ASC, rowid ASC"
        );
        assert_eq!(query.select_params().len(), 1);
    }

    #[test]
    fn test_page_request_defaults() {
        let page = PageRequest::from_params(None, None, 10, 100).unwrap();
        assert_eq!(page, PageRequest { page: 1, limit: 10 });

        let page = PageRequest::from_params(Some("abc"), Some("0"), 10, 100).unwrap();
        assert_eq!(page, PageRequest { page: 1, limit: 10 });

        let page = PageRequest::from_params(Some(""), Some(" "), 10, 100).unwrap();
        assert_eq!(page, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_page_request_caps_limit() {
        let page = PageRequest::from_params(Some("3"), Some("500"), 10, 100).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_page_request_rejects_negative() {
        assert!(matches!(
            PageRequest::from_params(Some("-1"), None, 10, 100),
            Err(FolioError::Validation(_))
        ));
        assert!(matches!(
            PageRequest::from_params(None, Some("-5"), 10, 100),
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn test_skip() {
        assert_eq!(PageRequest::new(1, 10).skip(), 0);
        assert_eq!(PageRequest::new(2, 10).skip(), 10);
        assert_eq!(PageRequest::new(4, 25).skip(), 75);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag(Some("true")), Some(true));
        assert_eq!(parse_flag(Some("false")), Some(false));
        assert_eq!(parse_flag(Some("yes")), None);
        assert_eq!(parse_flag(None), None);
    }
}
