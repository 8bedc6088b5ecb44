use anyhow::anyhow;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::AppResult,
    models::{NewMovie, PLACEHOLDER_REVIEW, SearchCandidate},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    access_token: String,
    base_url: String,
    image_base_url: String,
    language: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        let out = Self {
            client,
            api_key: config.tmdb_api_key.trim().to_string(),
            access_token: bearer_token(&config.tmdb_access_token).to_string(),
            base_url: config.tmdb_base_url.trim_end_matches('/').to_string(),
            image_base_url: config.tmdb_image_base_url.clone(),
            language: config.tmdb_language.clone(),
        };
        // Requests still go out; TMDB answers 401 and the handler fails.
        if out.api_key.is_empty() && out.access_token.is_empty() {
            tracing::warn!("no TMDB_API_KEY or TMDB_ACCESS_TOKEN provided");
        }
        out
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url);
        if !self.access_token.is_empty() {
            req = req.bearer_auth(&self.access_token);
        }
        if !self.api_key.is_empty() {
            req = req.query(&[("api_key", self.api_key.as_str())]);
        }
        req
    }

    pub async fn search_movies(&self, title: &str) -> AppResult<Vec<SearchCandidate>> {
        debug!(query = %title, "searching TMDB");
        let resp: SearchResponse = self
            .get(format!("{}/search/movie", self.base_url))
            .query(&[("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %title, results = resp.results.len(), "TMDB search finished");
        Ok(resp.results)
    }

    pub async fn movie_details(&self, tmdb_id: i64) -> AppResult<MovieDetails> {
        debug!(tmdb_id = tmdb_id, "fetching TMDB movie details");
        let details = self
            .get(format!("{}/movie/{}", self.base_url, tmdb_id))
            .query(&[("language", self.language.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<MovieDetails>()
            .await?;
        Ok(details)
    }

    /// Fetches the detail record and turns it into an unrated movie.
    pub async fn fetch_new_movie(&self, tmdb_id: i64) -> AppResult<NewMovie> {
        self.movie_details(tmdb_id).await?.into_new_movie(&self.image_base_url)
    }
}

/// Accepts both a raw token and a full `Bearer ...` header value.
fn bearer_token(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix("Bearer ").map(str::trim).unwrap_or(raw)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchCandidate>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

impl MovieDetails {
    /// A missing poster leaves `img_url` empty and the listing shows no image.
    pub fn into_new_movie(self, image_base_url: &str) -> AppResult<NewMovie> {
        let release_date = self.release_date.unwrap_or_default();
        let year = release_date.get(..4).and_then(|y| y.parse::<i32>().ok()).ok_or_else(|| {
            anyhow!("{:?} has no usable release year ({release_date:?})", self.title)
        })?;

        Ok(NewMovie {
            title: self.title,
            year,
            description: self.overview.unwrap_or_default(),
            rating: 0.0,
            ranking: 0,
            review: PLACEHOLDER_REVIEW.to_string(),
            img_url: self
                .poster_path
                .map(|path| format!("{image_base_url}{path}"))
                .unwrap_or_default(),
        })
    }
}
