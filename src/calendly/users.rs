use anyhow::Result;
use serde::Deserialize;

use super::CalendlyClient;

#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub resource: UserResource,
}

#[derive(Debug, Deserialize)]
pub struct UserResource {
    pub uri: String,
}

impl CalendlyClient {
    /// Resolve the account that owns the token.
    /// curl -H "Authorization: Bearer $TOKEN" https://api.calendly.com/users/me
    pub async fn current_user_uri(&self) -> Result<String> {
        let res = self.get("/users/me").send().await?;
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("User fetch failed: {} ({})", status, text);
        }
        let user: CurrentUserResponse = serde_json::from_str(&text)?;
        Ok(user.resource.uri)
    }
}
