use rusqlite::{params, Connection, OptionalExtension, Row};

use super::now_utc;
use crate::db::DatabaseError;
use crate::models::*;

const PRESCRIPTION_COLUMNS: &str =
    "id, patient_id, professional_id, medication, dosage, instructions, prescribed_date";

fn prescription_from_row(row: &Row<'_>) -> rusqlite::Result<Prescription> {
    Ok(Prescription {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        professional_id: row.get(2)?,
        medication: row.get(3)?,
        dosage: row.get(4)?,
        instructions: row.get(5)?,
        prescribed_date: row.get(6)?,
    })
}

pub fn insert_prescription(
    conn: &Connection,
    rx: &NewPrescription,
) -> Result<Prescription, DatabaseError> {
    let prescribed_date = now_utc();

    conn.execute(
        "INSERT INTO prescriptions (patient_id, professional_id, medication, dosage,
         instructions, prescribed_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rx.patient_id,
            rx.professional_id,
            rx.medication,
            rx.dosage,
            rx.instructions,
            prescribed_date,
        ],
    )?;

    Ok(Prescription {
        id: conn.last_insert_rowid(),
        patient_id: rx.patient_id,
        professional_id: rx.professional_id,
        medication: rx.medication.clone(),
        dosage: rx.dosage.clone(),
        instructions: rx.instructions.clone(),
        prescribed_date,
    })
}

pub fn get_prescription(conn: &Connection, id: i64) -> Result<Option<Prescription>, DatabaseError> {
    let sql = format!("SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE id = ?1");
    let rx = conn.query_row(&sql, params![id], prescription_from_row).optional()?;
    Ok(rx)
}

pub fn list_prescriptions_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Prescription>, DatabaseError> {
    let sql = format!(
        "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE patient_id = ?1 ORDER BY id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![patient_id], prescription_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::insert_user;
    use crate::db::sqlite::open_memory_database;

    #[test]
    fn prescriptions_listed_per_patient() {
        let conn = open_memory_database().unwrap();
        let a = insert_user(&conn, &NewUser::new("Musu", "musu@x.lr", "h", UserRole::Patient)).unwrap();
        let b = insert_user(&conn, &NewUser::new("Kollie", "kollie@x.lr", "h", UserRole::Patient)).unwrap();
        let prof = insert_user(&conn, &NewUser::new("Dr. Weah", "weah@x.lr", "h", UserRole::Professional)).unwrap();

        let saved = insert_prescription(&conn, &NewPrescription {
            patient_id: a.id,
            professional_id: prof.id,
            medication: "Artemether-Lumefantrine".into(),
            dosage: Some("80/480mg".into()),
            instructions: Some("Twice daily for 3 days".into()),
        })
        .unwrap();
        insert_prescription(&conn, &NewPrescription {
            patient_id: b.id,
            professional_id: prof.id,
            medication: "Paracetamol".into(),
            ..Default::default()
        })
        .unwrap();

        let for_a = list_prescriptions_for_patient(&conn, a.id).unwrap();
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].medication, "Artemether-Lumefantrine");
        assert_eq!(get_prescription(&conn, saved.id).unwrap().unwrap().dosage.as_deref(), Some("80/480mg"));
    }
}
