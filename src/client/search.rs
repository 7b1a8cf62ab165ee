//! Search, statistics and name analysis.

use crate::client::core::{expect_status, json_body, NamexClient};
use crate::error::normalize_error;
use crate::session::keys;
use crate::types::{AdvancedSearch, AdvancedSearchResults, AnalysisJson, NameAnalysisQuery, Stats};
use crate::{Error, Result};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tracing::error;

/// Name analysis runs a full examination server-side and can take minutes.
pub const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(3 * 60);

/// Row count requested from the search endpoint; 0 when only the match count
/// is wanted.
const SEARCH_ROWS: u32 = 1000;

impl NamexClient {
    /// Search name requests. `is_count_check` requests zero rows, returning
    /// only the match count. Errors are forwarded to the reporter only when
    /// `handle_error` is set.
    pub async fn search_name_requests(
        &self,
        params: &AdvancedSearch,
        handle_error: bool,
        is_count_check: bool,
    ) -> Option<AdvancedSearchResults> {
        match self.try_search_name_requests(params, is_count_check).await {
            Ok(results) => Some(results),
            Err(err) => {
                if handle_error {
                    self.fail(
                        "search_name_requests",
                        "search-name-request-error",
                        &err,
                        "Could not find Name Requests.",
                    )
                    .await;
                }
                None
            }
        }
    }

    pub async fn try_search_name_requests(
        &self,
        params: &AdvancedSearch,
        is_count_check: bool,
    ) -> Result<AdvancedSearchResults> {
        let token = self
            .session
            .get(keys::AUTH_TOKEN)
            .ok_or_else(|| Error::Precondition("missing bearer token for search".to_string()))?;

        let rows = if is_count_check { 0 } else { SEARCH_ROWS };

        let request = self
            .transport
            .request(Method::GET, "/requests")?
            .query(&[("rows", rows)])
            .query(params)
            .bearer_auth(token);
        let response = self.transport.send(request).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        json_body(response).await
    }

    /// Fetch daily processing statistics. Failures are logged but not
    /// forwarded to the reporter.
    pub async fn fetch_stats(&self) -> Option<Stats> {
        match self.try_fetch_stats().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                let msg = normalize_error(&err, "Could not fetch stats");
                error!(target: "namex_client", "fetch_stats() = {msg}");
                None
            }
        }
    }

    pub async fn try_fetch_stats(&self) -> Result<Stats> {
        let request = self.transport.request(Method::GET, "/statistics")?;
        let response = self.transport.send(request).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        json_body(response).await
    }

    /// Run name analysis. Unlike its siblings this propagates errors to the
    /// caller instead of reporting them.
    //
    // TODO: decide whether analysis failures should go through the reporter
    // like every other operation; callers currently handle them directly.
    pub async fn name_analysis(
        &self,
        params: &NameAnalysisQuery,
        xpro: bool,
    ) -> Result<AnalysisJson> {
        let path = if xpro {
            "/xpro-name-analysis"
        } else {
            "/name-analysis"
        };

        let request = self
            .transport
            .request(Method::GET, path)?
            .query(params)
            .timeout(ANALYSIS_TIMEOUT);
        let response = self.transport.send(request).await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        json_body(response).await
    }
}
