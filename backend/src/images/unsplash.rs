//! Minimal photo-search client: one query in, the first result's display
//! URL out. Callers treat any failure as "no photo for this keyword".

use log::debug;
use serde_json::Value;

#[derive(Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    access_key: String,
    api_base: String,
}

impl UnsplashClient {
    pub fn new(access_key: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_key,
            api_base,
        }
    }

    /// Search for `query` and return the first photo's URL, or an error
    /// string when the search failed or came back empty.
    pub async fn first_photo(&self, query: &str) -> Result<String, String> {
        let endpoint = format!("{}/search/photos", self.api_base);
        debug!("searching photos for '{}'", query);

        let response = self
            .http
            .get(&endpoint)
            .query(&[("query", query), ("per_page", "1")])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("photo search returned {}", response.status()));
        }

        let payload: Value = response.json().await.map_err(|e| e.to_string())?;
        payload
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .and_then(|photo| photo.get("urls"))
            .and_then(|urls| urls.get("regular"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| format!("no results for '{query}'"))
    }
}
