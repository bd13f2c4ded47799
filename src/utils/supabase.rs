use hyper::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use urlencoding::encode;

#[derive(Debug)]
pub enum Error {
    RequestFailed,
    ErrorResponse(StatusCode),
    MalformedResponse,
}

#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: String,
    headers: HeaderMap,
}

impl SupabaseClient {
    pub fn new(project_url: &str, api_key: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            api_key.try_into().expect("Invalid SUPABASE_KEY value"),
        );
        headers.insert(
            "Authorization",
            format!("Bearer {}", api_key)
                .try_into()
                .expect("Invalid SUPABASE_KEY value"),
        );
        headers.insert(
            "Content-Type",
            "application/json"
                .try_into()
                .expect("Invalid content type header value"),
        );

        Self {
            http: Client::new(),
            rest_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            headers,
        }
    }

    pub async fn select_eq<T>(&self, table: &str, column: &str, value: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/{}?select=*&{}=eq.{}",
            self.rest_url,
            table,
            column,
            encode(value)
        );

        let res = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach Supabase: {}", err);
                Error::RequestFailed
            })?;

        Self::parse_rows(res, table).await
    }

    pub async fn update_eq<T>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        patch: serde_json::Value,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}?{}=eq.{}", self.rest_url, table, column, encode(value));

        let mut headers = self.headers.clone();
        // Without this header PostgREST replies 204 with an empty body.
        headers.insert(
            "Prefer",
            "return=representation"
                .try_into()
                .expect("Invalid prefer header value"),
        );

        let res = self
            .http
            .patch(url)
            .headers(headers)
            .json(&patch)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Failed to reach Supabase: {}", err);
                Error::RequestFailed
            })?;

        Self::parse_rows(res, table).await
    }

    async fn parse_rows<T>(res: reqwest::Response, table: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        if !res.status().is_success() {
            tracing::error!(
                "Supabase returned status {} for table {}",
                res.status(),
                table
            );
            return Err(Error::ErrorResponse(res.status()));
        }

        res.json::<Vec<T>>().await.map_err(|err| {
            tracing::error!("Failed to deserialize Supabase response: {}", err);
            Error::MalformedResponse
        })
    }
}
