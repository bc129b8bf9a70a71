//! Catalog-driven indicator fetch.

use macrodata_core::{
    IndicatorQuery, NormalizedResult, OutputFormat, RawParams, catalog, series_result, to_series,
};
use tracing::{info, instrument};

use super::error::GatewayError;
use super::upstream::UpstreamClient;

/// Resolves a logical indicator against the catalog, calls the upstream and normalizes
/// the response. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct IndicatorGateway {
    upstream: UpstreamClient,
}

impl IndicatorGateway {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.upstream
    }

    #[instrument(skip(self, params))]
    pub async fn fetch_indicator(
        &self,
        logical_name: &str,
        params: &RawParams,
    ) -> Result<NormalizedResult, GatewayError> {
        let spec = catalog::require(logical_name)?;
        let query = IndicatorQuery::resolve(spec, params);

        info!(
            country = %query.country_code,
            from = %query.from_year,
            to = %query.to_year,
            database_id = spec.database_id,
            indicator_code = spec.indicator_code,
            "Fetching indicator"
        );

        let upstream = self.upstream.fetch(&query.upstream_params(spec)).await?;
        let normalized = spec.normalization.apply(upstream);

        Ok(match params.output_format() {
            OutputFormat::Raw => normalized,
            OutputFormat::Series => series_result(to_series(spec, &normalized)),
        })
    }
}
