//! Static indicator catalog.
//!
//! The catalog maps a public route name (e.g. `gdp-per-capita`) to the upstream
//! identifiers for the statistic. Upstream codes are external, versionless strings and
//! are stored verbatim.

use serde::Serialize;

use crate::error::{CoreError, Result};

/// Start year used by every indicator when the caller omits `from`.
pub const DEFAULT_FROM_YEAR: &str = "1960";

/// Response-shape policy applied to an indicator's upstream payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Normalization {
    /// Unwrap `data` when present, otherwise wrap the whole body.
    Direct,
    /// Accept `data` only when it is a list, then fall back to `value`, then to `[]`.
    ListOrValue,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSpec {
    pub logical_name: &'static str,
    pub database_id: &'static str,
    pub indicator_code: &'static str,
    pub default_from_year: &'static str,
    pub default_to_year: &'static str,
    pub normalization: Normalization,
    /// Whether the series view carries `UNIT_MEASURE` through as `unit`.
    pub unit_in_series: bool,
    pub description: &'static str,
}

static CATALOG: [IndicatorSpec; 5] = [
    IndicatorSpec {
        logical_name: "gdp-per-capita",
        database_id: "WB_WDI",
        indicator_code: "WB_WDI_NY_GDP_PCAP_CD",
        default_from_year: DEFAULT_FROM_YEAR,
        default_to_year: "2023",
        normalization: Normalization::Direct,
        unit_in_series: false,
        description: "GDP per capita (current US$)",
    },
    IndicatorSpec {
        logical_name: "credit-card-usage",
        database_id: "IMF_FAS",
        indicator_code: "IMF_FAS_FCCCC",
        default_from_year: DEFAULT_FROM_YEAR,
        default_to_year: "2023",
        normalization: Normalization::ListOrValue,
        unit_in_series: true,
        description: "Credit cards in circulation",
    },
    IndicatorSpec {
        logical_name: "inflation",
        database_id: "WB_WDI",
        indicator_code: "WB_WDI_FP_CPI_TOTL_ZG",
        default_from_year: DEFAULT_FROM_YEAR,
        default_to_year: "2023",
        normalization: Normalization::Direct,
        unit_in_series: false,
        description: "Inflation, consumer prices (annual %)",
    },
    IndicatorSpec {
        logical_name: "cpi",
        database_id: "WB_WDI",
        indicator_code: "WB_WDI_FP_CPI_TOTL",
        default_from_year: DEFAULT_FROM_YEAR,
        default_to_year: "2023",
        normalization: Normalization::Direct,
        unit_in_series: false,
        description: "Consumer price index (2010 = 100)",
    },
    IndicatorSpec {
        logical_name: "mobile-internet-banking",
        database_id: "IMF_FAS",
        indicator_code: "IMF_FAS_FCMIBT",
        default_from_year: DEFAULT_FROM_YEAR,
        default_to_year: "2024",
        normalization: Normalization::ListOrValue,
        unit_in_series: true,
        description: "Mobile and internet banking transactions",
    },
];

/// Looks up an indicator by its public name.
pub fn lookup(logical_name: &str) -> Option<&'static IndicatorSpec> {
    CATALOG.iter().find(|spec| spec.logical_name == logical_name)
}

/// Like [`lookup`], but reports a miss as [`CoreError::UnknownIndicator`].
pub fn require(logical_name: &str) -> Result<&'static IndicatorSpec> {
    lookup(logical_name).ok_or_else(|| CoreError::unknown_indicator(logical_name))
}

/// All indicators in catalog order.
pub fn all() -> &'static [IndicatorSpec] {
    &CATALOG
}

/// Public description of a catalog entry, as served by the listing endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSummary {
    pub name: &'static str,
    pub database_id: &'static str,
    pub indicator: &'static str,
    pub default_from: &'static str,
    pub default_to: &'static str,
    pub normalization: Normalization,
    pub description: &'static str,
}

impl From<&IndicatorSpec> for IndicatorSummary {
    fn from(spec: &IndicatorSpec) -> Self {
        Self {
            name: spec.logical_name,
            database_id: spec.database_id,
            indicator: spec.indicator_code,
            default_from: spec.default_from_year,
            default_to: spec.default_to_year,
            normalization: spec.normalization,
            description: spec.description,
        }
    }
}
