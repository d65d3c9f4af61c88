//! Static UI phrase tables for the languages spoken in Liberia.
//!
//! Lookups fall back to English, then to the key itself.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LIBERIAN_LANGUAGES: &[Language] = &[
    Language { code: "english", name: "English" },
    Language { code: "kpelle", name: "Kpelle" },
    Language { code: "bassa", name: "Bassa" },
    Language { code: "gio", name: "Gio (Dan)" },
    Language { code: "kru", name: "Kru" },
    Language { code: "grebo", name: "Grebo" },
    Language { code: "mano", name: "Mano" },
    Language { code: "krahn", name: "Krahn" },
    Language { code: "gola", name: "Gola" },
    Language { code: "gbandi", name: "Gbandi" },
    Language { code: "loma", name: "Loma" },
    Language { code: "kissi", name: "Kissi" },
    Language { code: "vai", name: "Vai" },
    Language { code: "belle", name: "Belle" },
    Language { code: "dey", name: "Dey" },
    Language { code: "mende", name: "Mende" },
    Language { code: "mandingo", name: "Mandingo" },
    Language { code: "arabic", name: "Arabic" },
    Language { code: "liberian_english", name: "Liberian English" },
    Language { code: "koloqua", name: "Koloqua" },
];

const ENGLISH: &[(&str, &str)] = &[
    ("welcome", "Welcome to CareNet Liberia"),
    ("health_for_all", "Digital Health Platform for All 15 Counties"),
    ("book_appointment", "Book Appointment"),
    ("find_doctor", "Find Doctor"),
    ("emergency", "Emergency"),
    ("mental_health", "Mental Health"),
    ("facilities", "Health Facilities"),
    ("education", "Health Education"),
    ("login", "Login"),
    ("register", "Register"),
    ("dashboard", "Dashboard"),
    ("prescriptions", "Prescriptions"),
    ("telemedicine", "Telemedicine"),
    ("ai_assistant", "AI Health Assistant"),
    ("name", "Name"),
    ("email", "Email"),
    ("password", "Password"),
    ("county", "County"),
    ("phone", "Phone Number"),
    ("submit", "Submit"),
    ("cancel", "Cancel"),
    ("fever", "Fever"),
    ("headache", "Headache"),
    ("malaria", "Malaria"),
    ("doctor", "Doctor"),
    ("nurse", "Nurse"),
    ("hospital", "Hospital"),
    ("clinic", "Clinic"),
    ("symptoms", "Symptoms"),
    ("treatment", "Treatment"),
    ("medication", "Medication"),
    ("appointment", "Appointment"),
    ("health_tip", "Health Tip"),
    ("prevention", "Prevention"),
];

const KPELLE: &[(&str, &str)] = &[
    ("welcome", "Kɛ CareNet Liberia kɛ"),
    ("health_for_all", "Yee koli gbogbo maa county 15 kɛ"),
    ("book_appointment", "Yee koli bɛrɛ sii"),
    ("find_doctor", "Dokita kɛrɛ"),
    ("emergency", "Maa yii"),
    ("mental_health", "Sueii yee"),
    ("facilities", "Yee koli ma"),
    ("education", "Yee kɛlɛng"),
    ("login", "Kɔ kɛ"),
    ("register", "Yuu tari"),
    ("dashboard", "Gbɛlɛng kɛ"),
    ("prescriptions", "Kɛɛn sɛbɛ"),
    ("telemedicine", "Mɛni yii kɛɛn"),
    ("ai_assistant", "Kɛɛn yuu maa"),
    ("name", "Yuu"),
    ("email", "Sɛbɛ kɛɛ"),
    ("password", "Koli gbɛlɛ"),
    ("county", "Kɔ"),
    ("phone", "Telefon"),
    ("submit", "Kɛ"),
    ("cancel", "Gbɛlɛ"),
    ("fever", "Mɛni yii"),
    ("headache", "Wuumɛni"),
    ("malaria", "Malaria"),
    ("doctor", "Dokita"),
    ("nurse", "Nɛsɛ"),
    ("hospital", "Yee koli ma baa"),
    ("clinic", "Yee koli ma"),
    ("symptoms", "Mɛni kɛrɛng"),
    ("treatment", "Kɛɛn"),
    ("medication", "Kɛɛn"),
    ("appointment", "Yee koli bɛrɛ"),
    ("health_tip", "Yee kɛlɛng"),
    ("prevention", "Kɔɔng"),
];

const BASSA: &[(&str, &str)] = &[
    ("welcome", "Nyɔnmɔ CareNet Liberia ke"),
    ("health_for_all", "Wɛn gbɛdii county 15 kɛ"),
    ("book_appointment", "Wɛn gbɛdii kɛ"),
    ("find_doctor", "Dokita nyɔn"),
    ("emergency", "Maa kɛ"),
    ("mental_health", "Sueii wɛn"),
    ("facilities", "Wɛn gbɛdii ma"),
    ("education", "Kɛlɛng"),
    ("login", "Kɔ"),
    ("register", "Yuu ke"),
    ("dashboard", "Gbɛlɛng"),
    ("prescriptions", "Kɛɛn sɛbɛ"),
    ("telemedicine", "Kɛɛn telefon kɛ"),
    ("ai_assistant", "Kɛɛn yuu"),
    ("name", "Yuu"),
    ("email", "Sɛbɛ"),
    ("password", "Koli gbɛlɛ"),
    ("county", "Kɔ"),
    ("phone", "Telefon"),
    ("submit", "Kɛ"),
    ("cancel", "Kpɛlɛ"),
    ("fever", "Mɛni yii"),
    ("headache", "Wuu mɛni"),
    ("malaria", "Malaria"),
    ("doctor", "Dokita"),
    ("nurse", "Nɛsɛ"),
    ("hospital", "Wɛn gbɛdii ma baa"),
    ("clinic", "Wɛn gbɛdii ma"),
    ("symptoms", "Mɛni kɛrɛng"),
    ("treatment", "Kɛɛn"),
    ("medication", "Kɛɛn"),
    ("appointment", "Wɛn gbɛdii"),
    ("health_tip", "Wɛn kɛlɛng"),
    ("prevention", "Kɔɔng"),
];

const GIO: &[(&str, &str)] = &[
    ("welcome", "Yɛ CareNet Liberia po"),
    ("health_for_all", "Yɛɛ geɛng county 15 kɛ"),
    ("book_appointment", "Yɛɛ geɛng woo"),
    ("find_doctor", "Dokita nyɔn"),
    ("emergency", "Maa klɛɛ"),
    ("mental_health", "Sueii yɛɛ"),
    ("facilities", "Yɛɛ geɛng ma"),
    ("education", "Kɛlɛɛng"),
    ("login", "Kɔ blɔng"),
    ("register", "Yuu taa"),
    ("dashboard", "Gbɛlɛɛng"),
    ("prescriptions", "Kɛɛn sɛbɛ"),
    ("telemedicine", "Kɛɛn telefon"),
    ("ai_assistant", "Kɛɛn yuu"),
    ("name", "Yuu"),
    ("email", "Sɛbɛ"),
    ("password", "Koli gbɛlɛ"),
    ("county", "Kɔ"),
    ("phone", "Telefon"),
    ("submit", "Kɛ"),
    ("cancel", "Kpɛɛlɛ"),
    ("fever", "Mɛni yii"),
    ("headache", "Wuu mɛni"),
    ("malaria", "Malaria"),
    ("doctor", "Dokita"),
    ("nurse", "Nɛɛsɛ"),
    ("hospital", "Yɛɛ geɛng ma baa"),
    ("clinic", "Yɛɛ geɛng ma"),
    ("symptoms", "Mɛni kɛrɛɛng"),
    ("treatment", "Kɛɛn"),
    ("medication", "Kɛɛn"),
    ("appointment", "Yɛɛ geɛng"),
    ("health_tip", "Yɛɛ kɛlɛɛng"),
    ("prevention", "Kɔɔɔng"),
];

const LIBERIAN_ENGLISH: &[(&str, &str)] = &[
    ("welcome", "Welcome to CareNet Liberia o"),
    ("health_for_all", "Health for all de 15 counties dem"),
    ("book_appointment", "Book your appointment"),
    ("find_doctor", "Find doctor"),
    ("emergency", "Emergency o"),
    ("mental_health", "Mental health"),
    ("facilities", "Health facilities dem"),
    ("education", "Health education"),
    ("login", "Login"),
    ("register", "Register"),
    ("dashboard", "Dashboard"),
    ("prescriptions", "Your medicine dem"),
    ("telemedicine", "Doctor call"),
    ("ai_assistant", "AI helper"),
    ("name", "Your name"),
    ("email", "Email"),
    ("password", "Password"),
    ("county", "County"),
    ("phone", "Phone number"),
    ("submit", "Submit"),
    ("cancel", "Cancel"),
    ("fever", "Fever"),
    ("headache", "Headache"),
    ("malaria", "Malaria"),
    ("doctor", "Doctor"),
    ("nurse", "Nurse"),
    ("hospital", "Hospital"),
    ("clinic", "Clinic"),
    ("symptoms", "Symptoms dem"),
    ("treatment", "Treatment"),
    ("medication", "Medicine"),
    ("appointment", "Appointment"),
    ("health_tip", "Health tip"),
    ("prevention", "Prevention"),
];

/// Languages that have a UI phrase table.
const PHRASE_TABLES: &[(&str, &[(&str, &str)])] = &[
    ("english", ENGLISH),
    ("kpelle", KPELLE),
    ("bassa", BASSA),
    ("gio", GIO),
    ("liberian_english", LIBERIAN_ENGLISH),
];
/// Basic conversational phrases: (source text, [(language, translation)]).
const BASIC_PHRASES: &[(&str, &[(&str, &str)])] = &[
    ("Hello", &[
        ("kpelle", "Kɛ"),
        ("bassa", "Nyɔnmɔ"),
        ("gio", "Yɛ"),
        ("liberian_english", "Hello o"),
    ]),
    ("How can I help you?", &[
        ("kpelle", "Na kɛ yuu kɛrɛ maa?"),
        ("bassa", "Na ke yuu nyɔn maa?"),
        ("gio", "Na kɛ yuu nyɔɔn maa?"),
        ("liberian_english", "How I can help you?"),
    ]),
    ("Thank you", &[
        ("kpelle", "Gbɛlɛ kɛ"),
        ("bassa", "Gbɛlɛ ke"),
        ("gio", "Gbɛlɛɛ kɛ"),
        ("liberian_english", "Thank you o"),
    ]),
];

fn lookup<'a>(table: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn phrase_table(language: &str) -> Option<&'static [(&'static str, &'static str)]> {
    PHRASE_TABLES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, table)| *table)
}

pub fn is_known_language(code: &str) -> bool {
    LIBERIAN_LANGUAGES.iter().any(|l| l.code == code)
}

/// UI string for `key` in `language`.
pub fn translation<'a>(key: &'a str, language: &str) -> &'a str {
    phrase_table(language)
        .and_then(|table| lookup(table, key))
        .or_else(|| lookup(ENGLISH, key))
        .unwrap_or(key)
}

/// Every UI string in `language`, keyed like the English table.
pub fn ui_strings(language: &str) -> BTreeMap<&'static str, &'static str> {
    ENGLISH
        .iter()
        .map(|(key, _)| (*key, translation(*key, language)))
        .collect()
}

/// Translate one of the basic phrases; anything else is returned unchanged.
pub fn translate_text<'a>(text: &'a str, target_language: &str) -> &'a str {
    BASIC_PHRASES
        .iter()
        .find(|(source, _)| *source == text)
        .and_then(|(_, targets)| lookup(targets, target_language))
        .unwrap_or(text)
}
