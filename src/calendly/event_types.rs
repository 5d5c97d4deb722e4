use anyhow::{Context, Result};
use serde::Deserialize;

use super::CalendlyClient;

#[derive(Debug, Deserialize)]
pub struct EventTypesResponse {
    pub collection: Option<Vec<EventType>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventType {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub profile: Option<EventTypeProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventTypeProfile {
    #[serde(default)]
    pub owner: Option<String>,
}

/// First event type with a matching slug that is owned by `owner`.
/// Entries without a `uri` never match.
pub fn find_event_type<'a>(
    event_types: &'a [EventType],
    slug: &str,
    owner: &str,
) -> Option<&'a EventType> {
    event_types.iter().find(|event_type| {
        event_type.uri.is_some()
            && event_type.slug.as_deref() == Some(slug)
            && event_type
                .profile
                .as_ref()
                .and_then(|p| p.owner.as_deref())
                == Some(owner)
    })
}

impl CalendlyClient {
    /// List the event types belonging to `user_uri`.
    /// curl -H "Authorization: Bearer $TOKEN" "https://api.calendly.com/event_types?user=$USER_URI"
    pub async fn list_event_types(&self, user_uri: &str) -> Result<Vec<EventType>> {
        let res = self
            .get("/event_types")
            .query(&[("user", user_uri)])
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("Event types fetch failed: {} ({})", status, text);
        }
        let resp: EventTypesResponse = serde_json::from_str(&text)?;
        resp.collection
            .context("Event types response is missing 'collection'")
    }

    /// Resolve the URI of the event type with `slug` owned by `user_uri`.
    pub async fn event_type_uri(&self, slug: &str, user_uri: &str) -> Result<String> {
        let event_types = self.list_event_types(user_uri).await?;
        find_event_type(&event_types, slug, user_uri)
            .and_then(|event_type| event_type.uri.clone())
            .with_context(|| format!("No event type '{}' owned by {}", slug, user_uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    const OWNER: &str = "https://api.calendly.com/users/ABC";

    fn event_type(uri: &str, slug: &str, owner: &str) -> EventType {
        EventType {
            uri: Some(uri.to_string()),
            slug: Some(slug.to_string()),
            profile: Some(EventTypeProfile {
                owner: Some(owner.to_string()),
            }),
        }
    }

    #[test]
    fn it_requires_slug_and_owner_to_match() {
        let event_types = vec![
            event_type("wrong-owner", "new", "https://api.calendly.com/users/XYZ"),
            event_type("wrong-slug", "old", OWNER),
            event_type("match", "new", OWNER),
        ];
        let found = find_event_type(&event_types, "new", OWNER).unwrap();
        assert_eq!(found.uri.as_deref(), Some("match"));
    }

    #[test]
    fn it_returns_the_first_match() {
        let event_types = vec![
            event_type("first", "new", OWNER),
            event_type("second", "new", OWNER),
        ];
        let found = find_event_type(&event_types, "new", OWNER).unwrap();
        assert_eq!(found.uri.as_deref(), Some("first"));
    }

    #[test]
    fn it_skips_entries_without_profile_or_slug() {
        let event_types = vec![
            EventType {
                uri: Some("no-profile".to_string()),
                slug: Some("new".to_string()),
                profile: None,
            },
            EventType {
                uri: Some("no-slug".to_string()),
                slug: None,
                profile: Some(EventTypeProfile {
                    owner: Some(OWNER.to_string()),
                }),
            },
        ];
        assert!(find_event_type(&event_types, "new", OWNER).is_none());
        assert!(find_event_type(&[], "new", OWNER).is_none());
    }

    #[tokio::test]
    async fn it_fetches_the_event_type_uri() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/event_types")
            .match_query(Matcher::UrlEncoded("user".to_string(), OWNER.to_string()))
            .match_header("authorization", "Bearer test_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"collection": [
                    {"uri": "https://api.calendly.com/event_types/OTHER", "slug": "intro", "profile": {"owner": "https://api.calendly.com/users/ABC"}},
                    {"uri": "https://api.calendly.com/event_types/NEW", "slug": "new", "profile": {"type": "User", "owner": "https://api.calendly.com/users/ABC"}}
                ], "pagination": {"count": 2}}"#,
            )
            .create_async()
            .await;

        let client = CalendlyClient::new(&server.url(), "test_token", Duration::from_secs(5)).unwrap();
        let uri = client.event_type_uri("new", OWNER).await.unwrap();

        assert_eq!(uri, "https://api.calendly.com/event_types/NEW");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_skips_entries_without_uri() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/event_types")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"collection": [
                    {"slug": "draft", "profile": {"owner": "https://api.calendly.com/users/ABC"}},
                    {"slug": "new", "profile": {"owner": "https://api.calendly.com/users/ABC"}},
                    {"uri": "https://api.calendly.com/event_types/NEW", "slug": "new", "profile": {"owner": "https://api.calendly.com/users/ABC"}}
                ]}"#,
            )
            .create_async()
            .await;

        let client = CalendlyClient::new(&server.url(), "test_token", Duration::from_secs(5)).unwrap();
        let uri = client.event_type_uri("new", OWNER).await.unwrap();

        assert_eq!(uri, "https://api.calendly.com/event_types/NEW");
    }

    #[tokio::test]
    async fn it_fails_without_collection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/event_types")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"pagination": {}}"#)
            .create_async()
            .await;

        let client = CalendlyClient::new(&server.url(), "test_token", Duration::from_secs(5)).unwrap();
        assert!(client.event_type_uri("new", OWNER).await.is_err());
    }

    #[tokio::test]
    async fn it_fails_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/event_types")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"title": "Permission Denied"}"#)
            .create_async()
            .await;

        let client = CalendlyClient::new(&server.url(), "test_token", Duration::from_secs(5)).unwrap();
        assert!(client.event_type_uri("new", OWNER).await.is_err());
    }
}
