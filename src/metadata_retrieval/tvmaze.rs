/// TVMaze metadata provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{Episode, FALLBACK_IMAGE_URL, MetadataRetrievalError, Show, ShowSource};
use serde::de::DeserializeOwned;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Client for the TVMaze API.
///
/// This client searches shows through https://api.tvmaze.com/search/shows
/// and lists episodes through https://api.tvmaze.com/shows/{id}/episodes.
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a new client talking to the public TVMaze endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client talking to a different endpoint (mirrors, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    /// The endpoint this client sends its requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// The body is read as text first so the raw payload is still around
    /// for logging when it does not match the expected shape.
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(T, String), MetadataRetrievalError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataRetrievalError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        let decoded = serde_json::from_str(&body).map_err(|e| {
            debug!(%url, payload = %body, "unexpected response shape");
            MetadataRetrievalError::ParseError(e.to_string())
        })?;

        Ok((decoded, body))
    }

    /// Converts a TVMaze show to our internal Show structure.
    fn convert_show(tvmaze_show: TvMazeShow) -> Show {
        let image_url = tvmaze_show
            .image
            .and_then(|image| image.medium)
            .unwrap_or_else(|| FALLBACK_IMAGE_URL.to_string());

        Show {
            id: tvmaze_show.id,
            name: tvmaze_show.name,
            summary: tvmaze_show.summary,
            image_url,
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(tvmaze_episode: TvMazeEpisode) -> Episode {
        Episode {
            id: tvmaze_episode.id,
            name: tvmaze_episode.name,
            season: tvmaze_episode.season.into_label(),
            number: tvmaze_episode.number.map(|n| n.into_label()),
        }
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowSource for TvMazeClient {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, MetadataRetrievalError> {
        let url = format!("{}/search/shows", self.base_url);
        debug!(%term, "searching shows");

        let (results, _): (Vec<TvMazeSearchResult>, _) = self.get_json(&url, &[("q", term)])?;

        Ok(results
            .into_iter()
            .map(|result| Self::convert_show(result.show))
            .collect())
    }

    fn list_episodes(&self, show_id: u64) -> Result<Vec<Episode>, MetadataRetrievalError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let (episodes, raw): (Vec<TvMazeEpisode>, _) = self.get_json(&url, &[])?;
        debug!(show_id, payload = %raw, "fetched episodes");

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GIRLS_SEARCH: &str = r#"[
        {"score": 0.91, "show": {"id": 1, "name": "Girls", "summary": "<p>Four friends.</p>", "image": null}},
        {"score": 0.55, "show": {"id": 2, "name": "Gilmore Girls", "summary": null,
            "image": {"medium": "https://static.tvmaze.com/m/2.jpg", "original": "https://static.tvmaze.com/o/2.jpg"}}}
    ]"#;

    /// Runs a blocking client call off the async test runtime.
    async fn run_blocking<T, F>(f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        tokio::task::spawn_blocking(f).await.unwrap()
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = TvMazeClient::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_convert_show_falls_back_without_medium_image() {
        let json = r#"{"id": 5, "name": "No Art", "image": {"medium": null, "original": "https://x/o.jpg"}}"#;
        let show = TvMazeClient::convert_show(serde_json::from_str(json).unwrap());

        assert_eq!(show.image_url, FALLBACK_IMAGE_URL);
        assert_eq!(show.summary, None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_via_http() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "girls"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GIRLS_SEARCH))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let shows = run_blocking(move || TvMazeClient::with_base_url(base_url).search_shows("girls"))
            .await
            .unwrap();

        assert_eq!(
            shows,
            vec![
                Show {
                    id: 1,
                    name: "Girls".to_string(),
                    summary: Some("<p>Four friends.</p>".to_string()),
                    image_url: FALLBACK_IMAGE_URL.to_string(),
                },
                Show {
                    id: 2,
                    name: "Gilmore Girls".to_string(),
                    summary: None,
                    image_url: "https://static.tvmaze.com/m/2.jpg".to_string(),
                },
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_search_shows_passes_empty_term_through() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let shows = run_blocking(move || TvMazeClient::with_base_url(base_url).search_shows(""))
            .await
            .unwrap();

        assert!(shows.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_episodes_via_http() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/1/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id": 10, "name": "Pilot", "season": 1, "number": 1, "airdate": "2012-04-15"},
                    {"id": 11, "name": "Behind the Scenes", "season": 1, "number": null}]"#,
            ))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let episodes = run_blocking(move || TvMazeClient::with_base_url(base_url).list_episodes(1))
            .await
            .unwrap();

        assert_eq!(
            episodes,
            vec![
                Episode {
                    id: 10,
                    name: Some("Pilot".to_string()),
                    season: "1".to_string(),
                    number: Some("1".to_string()),
                },
                Episode {
                    id: 11,
                    name: Some("Behind the Scenes".to_string()),
                    season: "1".to_string(),
                    number: None,
                },
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_episodes_keeps_untitled_episodes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/1/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id": 10, "name": "Pilot", "season": 1, "number": 1},
                    {"id": 11, "name": null, "season": 1, "number": 2}]"#,
            ))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let episodes = run_blocking(move || TvMazeClient::with_base_url(base_url).list_episodes(1))
            .await
            .unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].name.as_deref(), Some("Pilot"));
        assert_eq!(
            episodes[1],
            Episode {
                id: 11,
                name: None,
                season: "1".to_string(),
                number: Some("2".to_string()),
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unexpected_shape_is_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/7/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name": "Not Found"}"#))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let result = run_blocking(move || TvMazeClient::with_base_url(base_url).list_episodes(7)).await;

        assert!(matches!(result, Err(MetadataRetrievalError::ParseError(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_non_success_status_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/404/episodes"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let result = run_blocking(move || TvMazeClient::with_base_url(base_url).list_episodes(404)).await;

        assert_eq!(
            result,
            Err(MetadataRetrievalError::HttpStatus {
                status: 404,
                reason: "Not Found".to_string(),
            })
        );
    }

    #[test]
    fn test_unreachable_host_is_request_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client = TvMazeClient::with_base_url("http://127.0.0.1:9");
        let result = client.search_shows("girls");

        assert!(matches!(result, Err(MetadataRetrievalError::RequestError(_))));
    }
}
