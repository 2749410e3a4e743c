//! Resource models for the Lokalise API.
//!
//! # Design
//! Each model is an attribute bag mirroring one JSON object returned by the
//! API. Anything the API may leave out is an `Option` or defaults to empty, and
//! unknown fields are ignored so new server-side attributes do not break
//! hydration. Fields whose shape varies between endpoints stay `Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A localization project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    #[serde(default)]
    pub project_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub base_language_id: Option<u64>,
    #[serde(default)]
    pub base_language_iso: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub statistics: Option<Value>,
}

/// Request payload for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_lang_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

/// Request payload for updating a project. The API requires `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A translation key together with its optional embedded translations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub key_id: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    /// Either a plain string or a per-platform object.
    #[serde(default)]
    pub key_name: Value,
    #[serde(default)]
    pub filenames: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<KeyComment>,
    #[serde(default)]
    pub screenshots: Vec<Value>,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub is_plural: bool,
    #[serde(default)]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub base_words: Option<u64>,
    #[serde(default)]
    pub char_limit: Option<u64>,
    #[serde(default)]
    pub custom_attributes: Option<Value>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub modified_at_timestamp: Option<i64>,
    #[serde(default)]
    pub translations_modified_at: Option<String>,
    #[serde(default)]
    pub translations_modified_at_timestamp: Option<i64>,
}

/// A comment attached to a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyComment {
    pub comment_id: u64,
    pub comment: String,
    #[serde(default)]
    pub added_by: Option<u64>,
    #[serde(default)]
    pub added_by_email: Option<String>,
    #[serde(default)]
    pub added_at: Option<String>,
    #[serde(default)]
    pub added_at_timestamp: Option<i64>,
}

/// One key's value in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub translation_id: u64,
    #[serde(default)]
    pub key_id: Option<u64>,
    pub language_iso: String,
    /// Plural translations arrive JSON-encoded inside this string.
    pub translation: String,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub modified_at_timestamp: Option<i64>,
    #[serde(default)]
    pub modified_by: Option<u64>,
    #[serde(default)]
    pub modified_by_email: Option<String>,
    #[serde(default)]
    pub is_unverified: bool,
    #[serde(default)]
    pub is_reviewed: bool,
    #[serde(default)]
    pub reviewed_by: Option<u64>,
    #[serde(default)]
    pub words: Option<u64>,
    #[serde(default)]
    pub custom_translation_statuses: Vec<Value>,
    #[serde(default)]
    pub task_id: Option<u64>,
    #[serde(default)]
    pub segment_number: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: u64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub quota_usage: Option<Value>,
    #[serde(default)]
    pub quota_allowed: Option<Value>,
}

/// A user's membership in a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamUser {
    pub user_id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub group_id: u64,
    pub name: String,
    #[serde(default)]
    pub permissions: Option<GroupPermissions>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    #[serde(default)]
    pub team_id: Option<u64>,
    /// Project ids; the API mixes strings and numbers here.
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub members: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPermissions {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_reviewer: bool,
    #[serde(default)]
    pub admin_rights: Vec<String>,
    #[serde(default)]
    pub languages: Vec<GroupLanguage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLanguage {
    pub lang_id: u64,
    pub lang_iso: String,
    #[serde(default)]
    pub lang_name: Option<String>,
    #[serde(default)]
    pub is_writable: bool,
}

/// A professional translation vendor available to a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationProvider {
    pub provider_id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub price_pair_min: Option<f64>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tiers: Vec<ProviderTier>,
    #[serde(default)]
    pub pairs: Vec<ProviderPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderTier {
    pub tier_id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPair {
    pub tier_id: u64,
    pub from_lang_iso: String,
    #[serde(default)]
    pub from_lang_name: Option<String>,
    pub to_lang_iso: String,
    #[serde(default)]
    pub to_lang_name: Option<String>,
    pub price_per_word: f64,
}

/// A file known to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub filename: String,
    #[serde(default)]
    pub key_count: u64,
}

/// A background job started by an endpoint such as file upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedProcess {
    pub process_id: String,
    #[serde(rename = "type")]
    pub process_type: String,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub created_by_email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    #[serde(default)]
    pub details: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_hydrates_with_embedded_translations() {
        let key: Key = serde_json::from_value(json!({
            "key_id": 331223,
            "key_name": {"ios": "welcome", "web": "welcome.title"},
            "platforms": ["ios", "web"],
            "translations": [
                {"translation_id": 1, "key_id": 331223, "language_iso": "en", "translation": "Welcome"}
            ],
            "some_future_field": 1
        }))
        .unwrap();
        assert_eq!(key.key_id, 331223);
        assert_eq!(key.key_name["web"], "welcome.title");
        assert_eq!(key.translations.len(), 1);
        assert_eq!(key.translations[0].translation, "Welcome");
        assert!(key.tags.is_empty());
        assert!(!key.is_plural);
    }

    #[test]
    fn key_rejects_missing_id() {
        let result: Result<Key, _> = serde_json::from_value(json!({"key_name": "a"}));
        assert!(result.is_err());
    }

    #[test]
    fn queued_process_maps_type_field() {
        let process: QueuedProcess = serde_json::from_value(json!({
            "process_id": "ab12",
            "type": "file-import",
            "status": "queued",
        }))
        .unwrap();
        assert_eq!(process.process_type, "file-import");
        let back = serde_json::to_value(&process).unwrap();
        assert_eq!(back["type"], "file-import");
    }

    #[test]
    fn user_group_accepts_mixed_project_ids() {
        let group: UserGroup = serde_json::from_value(json!({
            "group_id": 9,
            "name": "Translators",
            "permissions": {
                "is_admin": false,
                "is_reviewer": true,
                "admin_rights": [],
                "languages": [{"lang_id": 640, "lang_iso": "en", "is_writable": true}]
            },
            "projects": ["803826145ba90b42d5d860.46800099", 42],
            "members": [1, 2]
        }))
        .unwrap();
        assert_eq!(group.projects.len(), 2);
        let permissions = group.permissions.unwrap();
        assert!(permissions.is_reviewer);
        assert!(permissions.languages[0].is_writable);
    }

    #[test]
    fn create_project_skips_absent_fields() {
        let body = serde_json::to_value(CreateProject {
            name: "Website".to_string(),
            description: None,
            team_id: Some(5),
            base_lang_iso: None,
            project_type: None,
        })
        .unwrap();
        assert_eq!(body, json!({"name": "Website", "team_id": 5}));
    }
}
