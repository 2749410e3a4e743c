//! Entry point that owns the configuration and transport and hands out
//! collections.
//!
//! # Design
//! `LokaliseApi` holds no mutable state. Collections borrow the config and
//! transport for the duration of a call chain, so creating one is free and
//! nothing is shared between calls apart from that read-only data.

use crate::collections::{
    Files, Keys, Projects, TeamUsers, Teams, TranslationProviders, Translations, UserGroups,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{ReqwestTransport, Transport};

/// Client for the Lokalise API.
///
/// ```no_run
/// # async fn run() -> lokalise_core::Result<()> {
/// use lokalise_core::{params, ClientConfig, LokaliseApi};
///
/// let api = LokaliseApi::new(ClientConfig::from_env()?)?;
/// let keys = api
///     .keys()
///     .list(&params(serde_json::json!({"project_id": "803826145ba90b42d5d860.46800099", "limit": 100})))
///     .await?;
/// for key in keys.items() {
///     println!("{}", key.key_id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LokaliseApi<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl LokaliseApi<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> LokaliseApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn projects(&self) -> Projects<'_, T> {
        Projects::new(&self.config, &self.transport)
    }

    pub fn keys(&self) -> Keys<'_, T> {
        Keys::new(&self.config, &self.transport)
    }

    pub fn translations(&self) -> Translations<'_, T> {
        Translations::new(&self.config, &self.transport)
    }

    pub fn teams(&self) -> Teams<'_, T> {
        Teams::new(&self.config, &self.transport)
    }

    pub fn team_users(&self) -> TeamUsers<'_, T> {
        TeamUsers::new(&self.config, &self.transport)
    }

    pub fn user_groups(&self) -> UserGroups<'_, T> {
        UserGroups::new(&self.config, &self.transport)
    }

    pub fn translation_providers(&self) -> TranslationProviders<'_, T> {
        TranslationProviders::new(&self.config, &self.transport)
    }

    pub fn files(&self) -> Files<'_, T> {
        Files::new(&self.config, &self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::transport::MockTransport;
    use crate::uri::{params, Params};
    use serde_json::json;

    const HOST: &str = "http://localhost:3000/api2";

    fn api(transport: MockTransport) -> LokaliseApi<MockTransport> {
        LokaliseApi::with_transport(
            ClientConfig::builder().api_key("token").host(HOST).build(),
            transport,
        )
    }

    fn expect(
        method: HttpMethod,
        path: &'static str,
        body: Option<serde_json::Value>,
        response: serde_json::Value,
    ) -> MockTransport {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(move |req: &HttpRequest| {
                let sent = req
                    .body
                    .as_deref()
                    .and_then(|b| serde_json::from_str::<serde_json::Value>(b).ok());
                req.method == method && req.path == path && sent == body
            })
            .times(1)
            .returning(move |_| {
                Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: response.to_string(),
                })
            });
        transport
    }

    #[tokio::test]
    async fn teams_list_hits_teams_endpoint() {
        let api = api(expect(
            HttpMethod::Get,
            "http://localhost:3000/api2/teams",
            None,
            json!({"teams": [{"team_id": 1, "name": "Acme"}]}),
        ));
        let teams = api.teams().list(&Params::new()).await.unwrap();
        assert_eq!(teams.items()[0].name, "Acme");
    }

    #[tokio::test]
    async fn project_get_is_not_root_wrapped() {
        let api = api(expect(
            HttpMethod::Get,
            "http://localhost:3000/api2/projects/p.1",
            None,
            json!({"project_id": "p.1", "name": "Website"}),
        ));
        let project = api.projects().get("p.1", &Params::new()).await.unwrap();
        assert_eq!(project.name, "Website");
    }

    #[tokio::test]
    async fn project_empty_uses_its_own_uri() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/projects/p.1/empty",
            None,
            json!({"project_id": "p.1", "keys_deleted": true}),
        ));
        let ack = api.projects().empty("p.1", &Params::new()).await.unwrap();
        assert_eq!(ack["keys_deleted"], true);
    }

    #[tokio::test]
    async fn key_create_returns_bulk_result() {
        let api = api(expect(
            HttpMethod::Post,
            "http://localhost:3000/api2/projects/p.1/keys",
            Some(json!({"keys": [{"key_name": "a"}, {"key_name": "a"}]})),
            json!({
                "project_id": "p.1",
                "keys": [{"key_id": 10, "key_name": "a"}],
                "errors": [{"message": "This key name is already taken", "code": 400}]
            }),
        ));
        let created = api
            .keys()
            .create(
                &json!({"keys": [{"key_name": "a"}, {"key_name": "a"}]}),
                &params(json!({"project_id": "p.1"})),
            )
            .await
            .unwrap();
        assert_eq!(created.items.len(), 1);
        assert_eq!(created.errors[0]["code"], 400);
    }

    #[tokio::test]
    async fn key_bulk_delete_sends_ids_in_body() {
        let api = api(expect(
            HttpMethod::Delete,
            "http://localhost:3000/api2/projects/p.1/keys",
            Some(json!({"keys": [1, 2]})),
            json!({"project_id": "p.1", "keys_removed": true, "keys_locked": 0}),
        ));
        let ack = api
            .keys()
            .bulk_delete(&[1, 2], &params(json!({"project_id": "p.1"})))
            .await
            .unwrap();
        assert_eq!(ack["keys_removed"], true);
    }

    #[tokio::test]
    async fn key_bulk_update_uses_put_on_collection_uri() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/projects/p.1/keys",
            Some(json!({"keys": [{"key_id": 10, "description": "x"}]})),
            json!({"keys": [{"key_id": 10, "description": "x"}], "errors": []}),
        ));
        let updated = api
            .keys()
            .bulk_update(
                &json!({"keys": [{"key_id": 10, "description": "x"}]}),
                &params(json!({"project_id": "p.1"})),
            )
            .await
            .unwrap();
        assert_eq!(updated.items[0].description.as_deref(), Some("x"));
        assert_eq!(updated.errors, json!([]));
    }

    #[tokio::test]
    async fn user_group_members_are_added_with_put() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/teams/3/groups/9/members/add",
            Some(json!({"users": [5, 6]})),
            json!({"team_id": 3, "group": {"group_id": 9, "name": "Reviewers", "members": [5, 6]}}),
        ));
        let group = api
            .user_groups()
            .add_members(9, &[5, 6], &params(json!({"team_id": 3})))
            .await
            .unwrap();
        assert_eq!(group.members, vec![json!(5), json!(6)]);
    }

    #[tokio::test]
    async fn file_upload_returns_queued_process() {
        let api = api(expect(
            HttpMethod::Post,
            "http://localhost:3000/api2/projects/p.1/files/upload",
            Some(json!({"data": "e30=", "filename": "en.json", "lang_iso": "en"})),
            json!({
                "project_id": "p.1",
                "process": {"process_id": "q1", "type": "file-import", "status": "queued"}
            }),
        ));
        let process = api
            .files()
            .upload(
                &json!({"data": "e30=", "filename": "en.json", "lang_iso": "en"}),
                &params(json!({"project_id": "p.1"})),
            )
            .await
            .unwrap();
        assert_eq!(process.process_type, "file-import");
    }

    #[tokio::test]
    async fn translation_get_unwraps_translation_root() {
        let api = api(expect(
            HttpMethod::Get,
            "http://localhost:3000/api2/projects/p.1/translations/344412",
            None,
            json!({
                "project_id": "p.1",
                "translation": {
                    "translation_id": 344412,
                    "key_id": 553662,
                    "language_iso": "en_US",
                    "translation": "Hello, world!",
                    "modified_by": 420,
                    "modified_by_email": "user@mycompany.com",
                    "is_unverified": false,
                    "is_reviewed": true,
                    "reviewed_by": 420,
                    "words": 2,
                    "custom_translation_statuses": [],
                    "task_id": null
                }
            }),
        ));
        let translation = api
            .translations()
            .get(344412, &params(json!({"project_id": "p.1"})))
            .await
            .unwrap();
        assert_eq!(translation.key_id, Some(553662));
        assert_eq!(translation.language_iso, "en_US");
        assert_eq!(translation.translation, "Hello, world!");
        assert!(translation.is_reviewed);
        assert_eq!(translation.words, Some(2));
        assert_eq!(translation.task_id, None);
    }

    #[tokio::test]
    async fn translation_update_sends_body_with_put() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/projects/p.1/translations/7",
            Some(json!({"translation": "Bonjour", "is_unverified": true})),
            json!({
                "project_id": "p.1",
                "translation": {
                    "translation_id": 7,
                    "language_iso": "fr",
                    "translation": "Bonjour",
                    "is_unverified": true
                }
            }),
        ));
        let translation = api
            .translations()
            .update(
                7,
                &json!({"translation": "Bonjour", "is_unverified": true}),
                &params(json!({"project_id": "p.1"})),
            )
            .await
            .unwrap();
        assert_eq!(translation.translation_id, 7);
        assert!(translation.is_unverified);
        assert!(!translation.is_reviewed);
    }

    #[tokio::test]
    async fn translation_providers_list_hydrates_tiers_and_pairs() {
        let api = api(expect(
            HttpMethod::Get,
            "http://localhost:3000/api2/teams/3/translation_providers",
            None,
            json!({
                "translation_providers": [{
                    "provider_id": 1,
                    "name": "Gengo",
                    "slug": "gengo",
                    "price_pair_min": 0.0,
                    "website_url": "https://gengo.com",
                    "description": "Human translation",
                    "tiers": [{"tier_id": 1, "title": "Native speaker"}],
                    "pairs": [{
                        "tier_id": 1,
                        "from_lang_iso": "en",
                        "from_lang_name": "English",
                        "to_lang_iso": "lv",
                        "to_lang_name": "Latvian",
                        "price_per_word": 0.07
                    }]
                }]
            }),
        ));
        let providers = api
            .translation_providers()
            .list(&params(json!({"team_id": 3})))
            .await
            .unwrap();
        let provider = &providers.items()[0];
        assert_eq!(provider.slug, "gengo");
        assert_eq!(provider.tiers[0].title, "Native speaker");
        assert_eq!(provider.pairs[0].to_lang_iso, "lv");
        assert_eq!(provider.pairs[0].price_per_word, 0.07);
    }

    #[tokio::test]
    async fn translation_provider_get_unwraps_singular_root() {
        let api = api(expect(
            HttpMethod::Get,
            "http://localhost:3000/api2/teams/3/translation_providers/1",
            None,
            json!({"translation_provider": {"provider_id": 1, "name": "Gengo", "slug": "gengo"}}),
        ));
        let provider = api
            .translation_providers()
            .get(1, &params(json!({"team_id": 3})))
            .await
            .unwrap();
        assert_eq!(provider.name, "Gengo");
        assert!(provider.tiers.is_empty());
    }

    #[tokio::test]
    async fn user_group_create_unwraps_group_root() {
        let api = api(expect(
            HttpMethod::Post,
            "http://localhost:3000/api2/teams/3/groups",
            Some(json!({"name": "Reviewers", "is_reviewer": true})),
            json!({
                "team_id": 3,
                "group": {
                    "group_id": 9,
                    "name": "Reviewers",
                    "permissions": {
                        "is_admin": false,
                        "is_reviewer": true,
                        "admin_rights": [],
                        "languages": [{"lang_id": 640, "lang_iso": "en", "is_writable": true}]
                    },
                    "team_id": 3
                }
            }),
        ));
        let group = api
            .user_groups()
            .create(
                &json!({"name": "Reviewers", "is_reviewer": true}),
                &params(json!({"team_id": 3})),
            )
            .await
            .unwrap();
        assert_eq!(group.group_id, 9);
        let permissions = group.permissions.unwrap();
        assert!(permissions.is_reviewer);
        assert_eq!(permissions.languages[0].lang_iso, "en");
        assert!(permissions.languages[0].is_writable);
    }

    #[tokio::test]
    async fn user_group_members_are_removed_with_put() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/teams/3/groups/9/members/remove",
            Some(json!({"users": [5]})),
            json!({"team_id": 3, "group": {"group_id": 9, "name": "Reviewers", "members": [6]}}),
        ));
        let group = api
            .user_groups()
            .remove_members(9, &[5], &params(json!({"team_id": 3})))
            .await
            .unwrap();
        assert_eq!(group.members, vec![json!(6)]);
    }

    #[tokio::test]
    async fn user_group_projects_are_added_with_put() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/teams/3/groups/9/projects/add",
            Some(json!({"projects": ["p.1", "p.2"]})),
            json!({"team_id": 3, "group": {"group_id": 9, "name": "Reviewers", "projects": ["p.1", "p.2"]}}),
        ));
        let group = api
            .user_groups()
            .add_projects(9, &["p.1", "p.2"], &params(json!({"team_id": 3})))
            .await
            .unwrap();
        assert_eq!(group.projects, vec![json!("p.1"), json!("p.2")]);
    }

    #[tokio::test]
    async fn user_group_projects_are_removed_with_put() {
        let api = api(expect(
            HttpMethod::Put,
            "http://localhost:3000/api2/teams/3/groups/9/projects/remove",
            Some(json!({"projects": ["p.2"]})),
            json!({"team_id": 3, "group": {"group_id": 9, "name": "Reviewers", "projects": ["p.1"]}}),
        ));
        let group = api
            .user_groups()
            .remove_projects(9, &["p.2"], &params(json!({"team_id": 3})))
            .await
            .unwrap();
        assert_eq!(group.projects, vec![json!("p.1")]);
    }

    #[tokio::test]
    async fn translation_providers_need_team_id() {
        let api = api(MockTransport::new());
        let err = api
            .translation_providers()
            .list(&Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingParam(name) if name == "team_id"));
    }
}
