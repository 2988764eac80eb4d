use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::model::event::{perceived_strength, Event};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeltReportResponse {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub properties: Properties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Properties {
    pub title: String,
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub felt: Option<i64>,
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn fetch_body(url: &str) -> Result<String> {
    log::info!("[USGS API] fetch_body, url={url}");
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::api::UA)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(anyhow!("status is not success: {}", resp.status()));
    }

    Ok(resp.text().await?)
}

/// Builds an [`Event`] from the first feature of a GeoJSON felt-report
/// body. `Ok(None)` means the result set was empty; malformed bodies are
/// an `Err`.
pub fn extract_first_event(body: &str) -> Result<Option<Event>> {
    let resp: FeltReportResponse = serde_json::from_str(body)?;

    let Some(feature) = resp.features.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(Event {
        title: feature.properties.title,
        num_of_people: feature.properties.felt.unwrap_or(0),
        perceived_strength: perceived_strength(feature.properties.mag),
    }))
}
