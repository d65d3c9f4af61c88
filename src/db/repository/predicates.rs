//! Dynamic `WHERE` builder shared by the filtered list queries.

use rusqlite::types::ToSql;

/// Collects `AND` clauses with positional parameters. Absent or empty values add nothing.
pub(crate) struct Predicates {
    clauses: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl Predicates {
    pub(crate) fn new() -> Self {
        Self {
            clauses: Vec::new(),
            params: Vec::new(),
        }
    }

    pub(crate) fn exact(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = non_empty(value) {
            self.params.push(Box::new(value.to_string()));
            self.clauses.push(format!("{column} = ?{}", self.params.len()));
        }
    }

    /// Case-insensitive substring match.
    pub(crate) fn contains(&mut self, column: &str, value: Option<&str>) {
        if let Some(value) = non_empty(value) {
            self.params.push(Box::new(like_pattern(value)));
            self.clauses.push(format!(
                "LOWER({column}) LIKE LOWER(?{}) ESCAPE '\\'",
                self.params.len()
            ));
        }
    }

    /// `base` followed by every collected clause. `base` must already end in a `WHERE` condition.
    pub(crate) fn where_sql(&self, base: &str) -> String {
        let mut sql = base.to_string();
        for clause in &self.clauses {
            sql.push_str(" AND ");
            sql.push_str(clause);
        }
        sql
    }

    pub(crate) fn param_refs(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `%value%` with LIKE metacharacters escaped so they match literally.
fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_add_no_clause() {
        let mut predicates = Predicates::new();
        predicates.exact("county", None);
        predicates.exact("county", Some(""));
        predicates.contains("name", Some(""));
        assert_eq!(predicates.where_sql("SELECT 1 WHERE 1=1"), "SELECT 1 WHERE 1=1");
        assert!(predicates.param_refs().is_empty());
    }

    #[test]
    fn clauses_number_params_in_order() {
        let mut predicates = Predicates::new();
        predicates.exact("county", Some("Bong"));
        predicates.contains("name", Some("weah"));
        assert_eq!(
            predicates.where_sql("SELECT * FROM users WHERE 1=1"),
            "SELECT * FROM users WHERE 1=1 AND county = ?1 AND LOWER(name) LIKE LOWER(?2) ESCAPE '\\'"
        );
        assert_eq!(predicates.param_refs().len(), 2);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
