use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::records::{parse_feedback_payload, FeedbackRecord, FeedbackSubmission, SelectionSet};
use crate::settings::PanelSettings;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Backend returned HTTP {0}: {1}")]
    BadStatus(reqwest::StatusCode, String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP client for the feedback backend. One instance is shared by all
/// commands; every call builds its own request, so concurrent actions never
/// step on each other.
#[derive(Clone)]
pub struct FeedbackApiClient {
    client: Client,
    base_url: String,
}

impl FeedbackApiClient {
    pub fn new(settings: &PanelSettings) -> Result<Self> {
        let base_url = settings.api_base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self { client, base_url })
    }

    /// GET `getallcontents` and parse the body. A malformed body degrades to
    /// an empty record list; transport and HTTP-level failures are errors.
    pub async fn fetch_all_contents(&self) -> Result<Vec<FeedbackRecord>> {
        let url = self.contents_url();
        info!("Fetching all feedback records from {}", url);

        let body = self.dispatch(&url).await?;
        Ok(parse_feedback_payload(&body))
    }

    /// GET `predictsentiment` for the selected record IDs.
    pub async fn predict_sentiment(&self, selection: &SelectionSet) -> Result<()> {
        info!(
            "Requesting sentiment prediction for ids [{}]",
            selection.to_query_value()
        );
        let url = self.sentiment_url(selection)?;
        self.dispatch(url.as_str()).await?;
        Ok(())
    }

    /// GET `identifygender` for the selected record IDs.
    pub async fn identify_gender(&self, selection: &SelectionSet) -> Result<()> {
        info!(
            "Requesting gender identification for ids [{}]",
            selection.to_query_value()
        );
        let url = self.gender_url(selection)?;
        self.dispatch(url.as_str()).await?;
        Ok(())
    }

    /// GET `enterfeedback` with the new entry in the query string. The
    /// submission must already be validated.
    pub async fn enter_feedback(&self, submission: &FeedbackSubmission) -> Result<()> {
        info!(
            "Submitting feedback entry for {} {}",
            submission.first_name, submission.last_name
        );
        let url = self.entry_url(submission);
        self.dispatch(&url).await?;
        Ok(())
    }

    pub fn contents_url(&self) -> String {
        format!("{}/getallcontents", self.base_url)
    }

    pub fn sentiment_url(&self, selection: &SelectionSet) -> Result<Url> {
        self.action_url("predictsentiment", selection)
    }

    pub fn gender_url(&self, selection: &SelectionSet) -> Result<Url> {
        self.action_url("identifygender", selection)
    }

    pub fn entry_url(&self, submission: &FeedbackSubmission) -> String {
        format!(
            "{}/enterfeedback?FirstName={}&LastName={}&Feedback={}",
            self.base_url,
            urlencoding::encode(&submission.first_name),
            urlencoding::encode(&submission.last_name),
            urlencoding::encode(&submission.feedback)
        )
    }

    fn action_url(&self, endpoint: &str, selection: &SelectionSet) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", self.base_url, e)))?;
        url.query_pairs_mut()
            .append_pair("Id", &selection.to_query_value());
        Ok(url)
    }

    // All four endpoints are plain GETs; send one and return the body text.
    async fn dispatch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("GET {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus(status, body));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(format!("reading {} body: {}", url, e)))
    }
}
