//! First-run baseline data: three referral hospitals and starter education articles.

use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::education::ScrapedArticle;
use crate::models::{EntityKind, NewEducation, NewFacility, DEFAULT_EDUCATION_LANGUAGE};

const MAX_SCRAPED_ARTICLES: usize = 5;
const MAX_TITLE_CHARS: usize = 200;

/// (name, county, address, contact, services)
const BASELINE_FACILITIES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "JFK Medical Center",
        "Montserrado",
        "Sinkor, Monrovia",
        "231-77-123-456",
        "Emergency, Surgery, Maternity, Pediatrics",
    ),
    (
        "Phebe Hospital",
        "Bong",
        "Suakoko, Bong County",
        "231-88-234-567",
        "General Medicine, Surgery, Mental Health",
    ),
    (
        "Ganta United Methodist Hospital",
        "Nimba",
        "Ganta, Nimba County",
        "231-77-345-678",
        "General Medicine, Maternity, Pediatrics",
    ),
];

/// (title, category, content)
const BASELINE_ARTICLES: &[(&str, &str, &str)] = &[
    (
        "Malaria Prevention in Liberia",
        "malaria",
        "Malaria is a serious disease in Liberia. Use mosquito nets, eliminate standing water, \
         and seek treatment immediately if you have symptoms.",
    ),
    (
        "Maternal Health Care",
        "maternal",
        "Proper prenatal care is essential for healthy pregnancies. Regular checkups and skilled \
         birth attendance save lives.",
    ),
    (
        "Mental Health Awareness",
        "mental",
        "Mental health is just as important as physical health. Don't hesitate to seek help if \
         you're struggling.",
    ),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub facilities: usize,
    pub articles: usize,
}

/// Populate empty facility and education tables. Tables that already hold rows are left alone.
pub fn seed_baseline(conn: &Connection, scraped: &[ScrapedArticle]) -> Result<SeedReport, DatabaseError> {
    let tx = conn.unchecked_transaction()?;
    let mut report = SeedReport::default();

    if db::count_entities(&tx, EntityKind::HealthFacility)? == 0 {
        for (name, county, address, contact, services) in BASELINE_FACILITIES {
            db::insert_facility(&tx, &NewFacility {
                name: name.to_string(),
                county: county.to_string(),
                facility_type: Some("hospital".to_string()),
                address: Some(address.to_string()),
                contact: Some(contact.to_string()),
                services: Some(services.to_string()),
                ..Default::default()
            })?;
            report.facilities += 1;
        }
    }

    if db::count_entities(&tx, EntityKind::HealthEducation)? == 0 {
        for (title, category, content) in BASELINE_ARTICLES {
            db::insert_education(&tx, &NewEducation {
                title: title.to_string(),
                content: content.to_string(),
                category: Some(category.to_string()),
                language: Some(DEFAULT_EDUCATION_LANGUAGE.to_string()),
                content_type: None,
            })?;
            report.articles += 1;
        }
        for item in scraped.iter().take(MAX_SCRAPED_ARTICLES) {
            db::insert_education(&tx, &NewEducation {
                title: item.title.chars().take(MAX_TITLE_CHARS).collect(),
                content: item.content.clone(),
                category: Some(item.category.clone()),
                language: Some(DEFAULT_EDUCATION_LANGUAGE.to_string()),
                content_type: Some("article".to_string()),
            })?;
            report.articles += 1;
        }
    }

    tx.commit()?;
    if report != SeedReport::default() {
        tracing::info!(facilities = report.facilities, articles = report.articles, "Baseline data seeded");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::directory::find_facilities;
    use crate::education::list_education;
    use crate::models::{EducationFilter, FacilityFilter};

    fn scraped(n: usize) -> Vec<ScrapedArticle> {
        (0..n)
            .map(|i| ScrapedArticle {
                title: format!("NPHIL Health Update {i}"),
                content: "Vaccination week begins Monday at all county health centers.".into(),
                category: "public-health".into(),
                source: "NPHIL".into(),
            })
            .collect()
    }

    #[test]
    fn empty_database_gets_baseline() {
        let conn = open_memory_database().unwrap();
        let report = seed_baseline(&conn, &[]).unwrap();
        assert_eq!(report, SeedReport { facilities: 3, articles: 3 });

        let jfk = find_facilities(&conn, &FacilityFilter {
            service: Some("surg".into()),
            county: Some("Montserrado".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(jfk.len(), 1);
        assert_eq!(jfk[0].name, "JFK Medical Center");
    }

    #[test]
    fn at_most_five_scraped_articles_are_added() {
        let conn = open_memory_database().unwrap();
        let report = seed_baseline(&conn, &scraped(8)).unwrap();
        assert_eq!(report.articles, 8);

        let imported = list_education(&conn, &EducationFilter {
            category: Some("public-health".into()),
            language: None,
        })
        .unwrap();
        assert_eq!(imported.len(), 5);
        assert!(imported.iter().all(|a| a.content_type.as_deref() == Some("article")));
    }

    #[test]
    fn long_titles_are_truncated() {
        let conn = open_memory_database().unwrap();
        let mut items = scraped(1);
        items[0].title = "é".repeat(300);
        seed_baseline(&conn, &items).unwrap();

        let imported = list_education(&conn, &EducationFilter {
            category: Some("public-health".into()),
            language: None,
        })
        .unwrap();
        assert_eq!(imported[0].title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn seeding_is_idempotent() {
        let conn = open_memory_database().unwrap();
        seed_baseline(&conn, &[]).unwrap();
        let again = seed_baseline(&conn, &scraped(2)).unwrap();
        assert_eq!(again, SeedReport::default());
        assert_eq!(db::count_entities(&conn, EntityKind::HealthFacility).unwrap(), 3);
        assert_eq!(db::count_entities(&conn, EntityKind::HealthEducation).unwrap(), 3);
    }
}
