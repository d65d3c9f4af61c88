//! Assistant and language endpoints.
//!
//! - `POST /api/chat`: scripted reply in the caller's language
//! - `POST /api/translate`: basic phrase translation
//! - `GET /api/languages`: supported languages and UI strings
//! - `POST /api/language/:language`: set the session language

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, Identity};
use crate::chatbot;
use crate::phrases::{self, Language, LIBERIAN_LANGUAGES};
use crate::session::DEFAULT_LANGUAGE;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: &'static str,
    pub language: String,
}

/// `POST /api/chat`: anonymous callers get English.
pub async fn send(
    Extension(identity): Extension<Identity>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let language = identity.language().to_string();
    Ok(Json(ChatResponse {
        response: chatbot::reply(&request.message, &language),
        language,
    }))
}

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original: String,
    pub translated: String,
    pub language: String,
}

/// `POST /api/translate`
pub async fn translate(
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload?;
    let language = request
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let translated = phrases::translate_text(&request.text, &language).to_string();
    Ok(Json(TranslateResponse {
        success: true,
        original: request.text,
        translated,
        language,
    }))
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub current: String,
    pub languages: &'static [Language],
    pub strings: BTreeMap<&'static str, &'static str>,
}

/// `GET /api/languages`
pub async fn languages(Extension(identity): Extension<Identity>) -> Json<LanguagesResponse> {
    let current = identity.language().to_string();
    Json(LanguagesResponse {
        strings: phrases::ui_strings(&current),
        current,
        languages: LIBERIAN_LANGUAGES,
    })
}

#[derive(Serialize)]
pub struct LanguageResponse {
    pub language: String,
}

/// `POST /api/language/:language`: only listed languages are accepted.
pub async fn set_language(
    State(ctx): State<ApiContext>,
    Extension(identity): Extension<Identity>,
    Path(language): Path<String>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let token = identity.require_token()?;
    if !phrases::is_known_language(&language) {
        return Err(ApiError::BadRequest(format!("unsupported language: {language}")));
    }
    ctx.core.set_session_language(token, &language)?;
    Ok(Json(LanguageResponse { language }))
}
