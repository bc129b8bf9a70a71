//! Request parameter resolution and upstream query construction.

use crate::catalog::IndicatorSpec;

/// Country used when the caller omits `country`.
pub const DEFAULT_COUNTRY: &str = "MYS";

/// Constant page offset; only the first upstream page is ever requested.
pub const UPSTREAM_SKIP: &str = "0";

/// Raw inbound query parameters. `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub country: Option<String>,
    pub format: Option<String>,
}

impl RawParams {
    /// Collects parameters from decoded key/value pairs.
    ///
    /// The first occurrence of a key wins and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "from" => &mut params.from,
                "to" => &mut params.to,
                "country" => &mut params.country,
                "format" => &mut params.format,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.format.as_deref() {
            Some("series") => OutputFormat::Series,
            _ => OutputFormat::Raw,
        }
    }
}

/// How the normalized payload is presented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Raw,
    Series,
}

/// Fully resolved parameters for one upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorQuery {
    pub from_year: String,
    pub to_year: String,
    pub country_code: String,
}

impl IndicatorQuery {
    /// Applies the indicator's defaults. Values are not validated; a present value,
    /// even an empty one, is passed through as given (country upper-cased).
    pub fn resolve(spec: &IndicatorSpec, params: &RawParams) -> Self {
        let country = params.country.as_deref().unwrap_or(DEFAULT_COUNTRY);
        Self {
            from_year: params
                .from
                .clone()
                .unwrap_or_else(|| spec.default_from_year.to_string()),
            to_year: params
                .to
                .clone()
                .unwrap_or_else(|| spec.default_to_year.to_string()),
            country_code: country.to_uppercase(),
        }
    }

    /// Query string pairs for the upstream request, in wire order.
    pub fn upstream_params(&self, spec: &IndicatorSpec) -> Vec<(&'static str, String)> {
        vec![
            ("DATABASE_ID", spec.database_id.to_string()),
            ("INDICATOR", spec.indicator_code.to_string()),
            ("REF_AREA", self.country_code.clone()),
            ("timePeriodFrom", self.from_year.clone()),
            ("timePeriodTo", self.to_year.clone()),
            ("skip", UPSTREAM_SKIP.to_string()),
        ]
    }
}
