use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(UserRole {
    Patient => "patient",
    Professional => "professional",
});

str_enum!(AppointmentType {
    InPerson => "in-person",
    Virtual => "virtual",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Tables owned by the record store, for cardinality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Appointment,
    MentalHealthAssessment,
    HealthFacility,
    HealthEducation,
    Prescription,
}

impl EntityKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Appointment => "appointments",
            Self::MentalHealthAssessment => "mental_health_assessments",
            Self::HealthFacility => "health_facilities",
            Self::HealthEducation => "health_education",
            Self::Prescription => "prescriptions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn user_role_parses_stored_values() {
        assert_eq!(UserRole::from_str("patient").unwrap(), UserRole::Patient);
        assert_eq!(UserRole::from_str("professional").unwrap(), UserRole::Professional);
        assert_eq!(UserRole::Professional.as_str(), "professional");
    }

    #[test]
    fn appointment_type_uses_hyphenated_form() {
        assert_eq!(AppointmentType::InPerson.as_str(), "in-person");
        assert_eq!(AppointmentType::from_str("virtual").unwrap(), AppointmentType::Virtual);
        let json = serde_json::to_string(&AppointmentType::InPerson).unwrap();
        assert_eq!(json, "\"in-person\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(UserRole::from_str("admin").is_err());
        assert!(AppointmentType::from_str("in_person").is_err());
        assert!(AppointmentStatus::from_str("").is_err());
    }

    #[test]
    fn entity_kind_maps_to_tables() {
        assert_eq!(EntityKind::User.table_name(), "users");
        assert_eq!(EntityKind::HealthFacility.table_name(), "health_facilities");
    }
}
