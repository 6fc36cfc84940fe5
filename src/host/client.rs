use super::HostApi;
use crate::errors::{AppError, AppResult};
use crate::models::state::{EntityState, HistoryRecord};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking REST client for the Home Assistant `/api` endpoints.
pub struct HassClient {
    base_url: String,
    token: String,
    http: Client,
}

impl HassClient {
    pub fn new(base_url: &str, token: &str) -> AppResult<Self> {
        if base_url.trim().is_empty() {
            return Err(AppError::HostNotConfigured("missing host url".into()));
        }
        if token.trim().is_empty() {
            return Err(AppError::HostNotConfigured("missing access token".into()));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn send(&self, path: &str, req: RequestBuilder) -> AppResult<Response> {
        let resp = req.bearer_auth(&self.token).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::HostStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(resp)
    }
}

fn iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl HostApi for HassClient {
    fn states(&self) -> AppResult<Vec<EntityState>> {
        let resp = self.send("states", self.http.get(self.url("states")))?;
        Ok(resp.json()?)
    }

    fn render_template(&self, template: &str) -> AppResult<String> {
        let req = self
            .http
            .post(self.url("template"))
            .json(&json!({ "template": template }));
        Ok(self.send("template", req)?.text()?)
    }

    fn history(
        &self,
        entity_ids: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Vec<HistoryRecord>>> {
        let path = format!("history/period/{}", iso(start));
        let req = self.http.get(self.url(&path)).query(&[
            ("filter_entity_id", entity_ids.join(",")),
            ("end_time", iso(end)),
        ]);
        let resp = self.send(&path, req)?;
        Ok(resp.json()?)
    }
}
