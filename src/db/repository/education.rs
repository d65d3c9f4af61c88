use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{now_utc, Predicates};
use crate::db::DatabaseError;
use crate::models::*;

const EDUCATION_COLUMNS: &str = "id, title, content, category, language, content_type, created_at";

fn education_from_row(row: &Row<'_>) -> rusqlite::Result<HealthEducation> {
    Ok(HealthEducation {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        category: row.get(3)?,
        language: row.get(4)?,
        content_type: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn insert_education(
    conn: &Connection,
    article: &NewEducation,
) -> Result<HealthEducation, DatabaseError> {
    let language = article
        .language
        .clone()
        .unwrap_or_else(|| DEFAULT_EDUCATION_LANGUAGE.to_string());
    let created_at = now_utc();

    conn.execute(
        "INSERT INTO health_education (title, content, category, language, content_type, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            article.title,
            article.content,
            article.category,
            language,
            article.content_type,
            created_at,
        ],
    )?;

    Ok(HealthEducation {
        id: conn.last_insert_rowid(),
        title: article.title.clone(),
        content: article.content.clone(),
        category: article.category.clone(),
        language,
        content_type: article.content_type.clone(),
        created_at,
    })
}

pub fn get_education(conn: &Connection, id: i64) -> Result<Option<HealthEducation>, DatabaseError> {
    let sql = format!("SELECT {EDUCATION_COLUMNS} FROM health_education WHERE id = ?1");
    let article = conn.query_row(&sql, params![id], education_from_row).optional()?;
    Ok(article)
}

/// Articles matching the category and language exactly. Empty filters are ignored.
pub fn get_education_filtered(
    conn: &Connection,
    filter: &EducationFilter,
) -> Result<Vec<HealthEducation>, DatabaseError> {
    let mut predicates = Predicates::new();
    predicates.exact("category", filter.category.as_deref());
    predicates.exact("language", filter.language.as_deref());

    let mut sql =
        predicates.where_sql(&format!("SELECT {EDUCATION_COLUMNS} FROM health_education WHERE 1=1"));
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(predicates.param_refs().as_slice(), education_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
