use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Result together with the HTTP status and response headers.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub result: T,
}

// region    --- translate
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub word_count: u64,
    pub character_count: u64,
    /// Only set when `source` was omitted and had to be detected.
    pub detected_language: Option<String>,
    pub detected_language_confidence: Option<f64>,
    pub translations: Vec<Translation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Translation {
    pub translation: String,
}
// endregion --- translate

// region    --- identify
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentifiedLanguages {
    pub languages: Vec<IdentifiedLanguage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentifiedLanguage {
    pub language: String,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentifiableLanguages {
    pub languages: Vec<IdentifiableLanguage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentifiableLanguage {
    pub language: String,
    pub name: String,
}
// endregion --- identify

// region    --- languages
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Languages {
    pub languages: Vec<Language>,
}

#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Language {
    pub language: Option<String>,
    pub language_name: Option<String>,
    pub native_language_name: Option<String>,
    pub country_code: Option<String>,
    pub words_separated: Option<bool>,
    /// `left_to_right` or `right_to_left`
    pub direction: Option<String>,
    pub supported_as_source: Option<bool>,
    pub supported_as_target: Option<bool>,
    pub identifiable: Option<bool>,
}
// endregion --- languages

// region    --- models
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationModel {
    pub model_id: String,
    pub name: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub base_model_id: Option<String>,
    pub domain: Option<String>,
    pub customizable: Option<bool>,
    pub default_model: Option<bool>,
    pub owner: Option<String>,
    /// uploading, uploaded, dispatching, queued, training, trained, publishing,
    /// available, deleted, error
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslationModels {
    pub models: Vec<TranslationModel>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteModelResult {
    pub status: String,
}
// endregion --- models

// region    --- documents
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentStatus {
    pub document_id: String,
    pub filename: String,
    /// processing, available, failed
    pub status: String,
    pub model_id: String,
    pub base_model_id: Option<String>,
    pub source: String,
    pub detected_language_confidence: Option<f64>,
    pub target: String,
    pub created: String,
    pub completed: Option<String>,
    pub word_count: Option<u64>,
    pub character_count: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentList {
    pub documents: Vec<DocumentStatus>,
}
// endregion --- documents
