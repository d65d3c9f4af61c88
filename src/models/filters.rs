use serde::Deserialize;

/// Professional directory filters. `specialty` and `profession` both narrow
/// on the specialty column and are applied independently.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfessionalFilter {
    pub county: Option<String>,
    pub specialty: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FacilityFilter {
    pub county: Option<String>,
    pub facility_type: Option<String>,
    pub service: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct EducationFilter {
    pub category: Option<String>,
    pub language: Option<String>,
}
