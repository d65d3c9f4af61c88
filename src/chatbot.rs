//! Scripted health assistant ("Wilmot").
//!
//! Replies are keyed by keyword and language. Keywords are checked in
//! table order and the first one contained in the message wins.

use crate::session::DEFAULT_LANGUAGE;

type Replies = &'static [(&'static str, &'static str)];

const KEYWORD_REPLIES: &[(&str, Replies)] = &[
    ("hello", &[
        ("english", "Hello! I'm Wilmot, your AI health assistant. How can I help you today?"),
        ("kpelle", "Kɛ! Ma Wilmot ma, yee kɛɛn yuu. Na kɛ yuu kɛrɛ maa?"),
        ("bassa", "Nyɔnmɔ! Ma Wilmot ma, wɛn kɛɛn yuu. Na ke yuu nyɔn maa?"),
        ("gio", "Yɛ! Ma Wilmot ma, yɛɛ kɛɛn yuu. Na kɛ yuu nyɔɔn maa?"),
        ("liberian_english", "Hello o! I Wilmot, your health helper. How I can help you today?"),
    ]),
    ("fever", &[
        ("english", "For fever, rest and drink plenty of fluids. If fever persists above 101°F for more than 2 days, please consult a healthcare professional."),
        ("kpelle", "Mɛni yii kɛ, gbɛɛ bɛrɛ kɛɛ nyu maa. Mɛni yii kɛ sɔɔng wulu fɛɛli kɛ, dokita nyɔn."),
        ("bassa", "Mɛni yii ke, gbɛɛ bɛrɛ kɛɛ nyu maa. Mɛni yii ke sɔɔng wulu fɛɛli kɛ, dokita nyɔn."),
        ("gio", "Mɛni yii kɛ, gbɛɛ bɛrɛ kɛɛ nyu maa. Mɛni yii kɛ sɔɔng wulu fɛɛli kɛ, dokita nyɔɔn."),
        ("liberian_english", "For fever, rest and drink plenty water. If fever stay pass 2 days, go see doctor."),
    ]),
    ("malaria", &[
        ("english", "Malaria symptoms include fever, chills, and flu-like illness. If you suspect malaria, seek immediate medical attention."),
        ("kpelle", "Malaria kɛrɛng: mɛni yii, kɔlɔng, kɛɛ nɛɛng. Malaria bɛɛ kɛ, dokita nyɔn maa bɔ."),
        ("bassa", "Malaria kɛrɛng: mɛni yii, kɔlɔng, kɛɛ nɛɛng. Malaria bɛɛ ke, dokita nyɔn maa bɔ."),
        ("gio", "Malaria kɛrɛɛng: mɛni yii, kɔlɔɔng, kɛɛ nɛɛng. Malaria bɛɛ kɛ, dokita nyɔɔn maa bɔ."),
        ("liberian_english", "Malaria signs: fever, cold, body pain. If you think malaria, go hospital quick quick."),
    ]),
];

const DEFAULT_REPLIES: Replies = &[
    ("english", "I'm here to help! Could you please provide more details about your health concern?"),
    ("kpelle", "Ma kɛ yuu bɔɔlɔ! Yuu yee kɛɛ kɛrɛng mɔɔ sɛbɛ?"),
    ("bassa", "Ma ke yuu bɔɔlɔ! Yuu wɛn kɛɛ kɛrɛng mɔɔ sɛbɛ?"),
    ("gio", "Ma kɛ yuu bɔɔlɔ! Yuu yɛɛ kɛɛ kɛrɛɛng mɔɔ sɛbɛ?"),
    ("liberian_english", "I here to help you! Tell me more about your health problem."),
];

fn in_language(replies: Replies, language: &str) -> &'static str {
    let pick = |code: &str| replies.iter().find(|(c, _)| *c == code).map(|(_, text)| *text);
    pick(language).or_else(|| pick(DEFAULT_LANGUAGE)).unwrap_or_default()
}

/// Reply to a free-text message in the given language.
pub fn reply(message: &str, language: &str) -> &'static str {
    let message = message.to_lowercase();
    let replies = KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map_or(DEFAULT_REPLIES, |(_, replies)| *replies);
    in_language(replies, language)
}
