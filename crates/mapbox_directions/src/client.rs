use async_trait::async_trait;
use model::LngLat;
use tracking::provider::{DirectionsProvider, RouteCandidate};
use tracking::ResolveError;

use crate::model::DirectionsResponse;
use crate::DirectionsError;

pub const MAPBOX_API_URL: &str = "https://api.mapbox.com/directions/v5";

#[derive(Debug, Clone, Copy)]
pub enum Profile {
    Walking,
}

impl Profile {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Walking => "mapbox/walking",
        }
    }
}

/// Thin client for the Mapbox Directions API.
pub struct DirectionsClient {
    access_token: String,
    http: reqwest::Client,
}

impl DirectionsClient {
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Query directions along the given waypoints, geometry in GeoJSON
    /// coordinate-list form.
    pub async fn get_directions(
        &self,
        profile: Profile,
        waypoints: &[LngLat],
    ) -> Result<DirectionsResponse, DirectionsError> {
        let coordinates = waypoints
            .iter()
            .map(|w| format!("{},{}", w.lng, w.lat))
            .collect::<Vec<_>>()
            .join(";");
        // the access token travels as a query parameter, kept out of the
        // url used for error reporting
        let url = format!("{MAPBOX_API_URL}/{}/{coordinates}", profile.path());
        log::debug!("requesting directions: {url}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("geometries", "geojson"),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                Ok(serde_json::from_str(&response.text().await?)?)
            }
            other => match response.text().await {
                Ok(text) => Err(DirectionsError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(text),
                }),
                Err(_) => Err(DirectionsError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn walking_route(
        &self,
        from: LngLat,
        to: LngLat,
    ) -> Result<Vec<RouteCandidate>, ResolveError> {
        let response = self
            .get_directions(Profile::Walking, &[from, to])
            .await
            .map_err(|e| {
                log::warn!("directions request failed: {e}");
                ResolveError::Service(e.to_string())
            })?;

        Ok(response
            .routes
            .into_iter()
            .map(|route| RouteCandidate {
                distance_m: route.distance,
                coordinates: route
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(LngLat::from)
                    .collect(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_profile_path() {
        assert_eq!(Profile::Walking.path(), "mapbox/walking");
    }

    #[test]
    fn an_unparseable_body_is_a_json_error() {
        let parse_failure = serde_json::from_str::<DirectionsResponse>("not json")
            .expect_err("garbage should not parse");
        let error = DirectionsError::from(parse_failure);
        assert!(matches!(error, DirectionsError::JsonError(_)));
        assert!(error.to_string().contains("JSON parse error"));
    }
}
