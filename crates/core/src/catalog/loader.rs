use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    error::CatalogError,
    models::{Catalog, Player, PlayerCatalog, TeamCatalog},
};

/// The subset of the FPL bootstrap payload this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapDocument {
    teams: Vec<TeamEntry>,
    #[serde(default)]
    elements: Vec<ElementEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct TeamEntry {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ElementEntry {
    id: u32,
    web_name: String,
}

impl Catalog {
    /// Project a bootstrap document into sorted teams and source-ordered players.
    pub fn from_bootstrap(document: BootstrapDocument) -> Self {
        let teams = TeamCatalog::from_names(document.teams.into_iter().map(|team| team.name));
        let players = document
            .elements
            .into_iter()
            .map(|element| Player {
                id: element.id,
                web_name: element.web_name,
            })
            .collect();
        Self {
            teams,
            players: PlayerCatalog::new(players),
        }
    }
}

/// One-shot reader for the catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: Client,
    url: String,
}

impl CatalogLoader {
    /// Build a loader for an explicit endpoint.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build a loader for the endpoint named in configuration.
    pub fn from_config(client: Client, config: &AppConfig) -> Self {
        Self::new(client, config.catalog_url.clone())
    }

    /// Endpoint this loader reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and project the catalog, surfacing every failure.
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let document: BootstrapDocument = serde_json::from_str(&body)?;
        Ok(Catalog::from_bootstrap(document))
    }

    /// Fetch the catalog, degrading to an empty one on failure.
    pub async fn load(&self) -> Catalog {
        match self.fetch().await {
            Ok(catalog) => {
                info!(
                    url = %self.url,
                    teams = catalog.teams.len(),
                    players = catalog.players.len(),
                    "Catalog loaded"
                );
                catalog
            }
            Err(err) => {
                warn!(url = %self.url, %err, "Catalog load failed; continuing without options");
                Catalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn bootstrap_body() -> serde_json::Value {
        json!({
            "events": [{"id": 1}],
            "teams": [
                {"id": 12, "name": "Liverpool", "short_name": "LIV"},
                {"id": 1, "name": "Arsenal", "short_name": "ARS"},
                {"id": 7, "name": "Chelsea", "short_name": "CHE"}
            ],
            "elements": [
                {"id": 328, "web_name": "M.Salah", "team": 12},
                {"id": 3, "web_name": "Ødegaard", "team": 1}
            ]
        })
    }

    async fn loader_for(server: &MockServer) -> CatalogLoader {
        CatalogLoader::new(Client::new(), format!("{}/api/bootstrap-static/", server.uri()))
    }

    #[tokio::test]
    async fn fetch_projects_teams_and_players() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bootstrap_body()))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = loader_for(&server).await.fetch().await.expect("catalog");
        assert_eq!(catalog.teams.names(), ["Arsenal", "Chelsea", "Liverpool"]);
        let names: Vec<_> = catalog
            .players
            .players()
            .iter()
            .map(|player| (player.id, player.web_name.as_str()))
            .collect();
        assert_eq!(names, [(328, "M.Salah"), (3, "Ødegaard")]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = loader_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn load_degrades_to_empty_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = loader_for(&server).await.load().await;
        assert!(catalog.teams.is_empty());
        assert!(catalog.players.is_empty());
    }

    #[test]
    fn missing_elements_yields_no_players() {
        let document: BootstrapDocument =
            serde_json::from_value(json!({"teams": [{"name": "Spurs"}]})).unwrap();
        let catalog = Catalog::from_bootstrap(document);
        assert_eq!(catalog.teams.names(), ["Spurs"]);
        assert!(catalog.players.is_empty());
    }

    #[test]
    fn missing_teams_is_rejected() {
        let result = serde_json::from_value::<BootstrapDocument>(json!({"elements": []}));
        assert!(result.is_err());
    }
}
