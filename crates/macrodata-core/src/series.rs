//! Tidy `{year, value, unit}` view over normalized upstream observations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::IndicatorSpec;
use crate::normalize::NormalizedResult;

const TIME_PERIOD: &str = "TIME_PERIOD";
const OBS_VALUE: &str = "OBS_VALUE";
const UNIT_MEASURE: &str = "UNIT_MEASURE";

/// One observation in the series view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Converts a normalized payload into a sorted series.
///
/// Non-array payloads yield an empty series. Items without a numeric `OBS_VALUE` or
/// without a `TIME_PERIOD` are dropped.
pub fn to_series(spec: &IndicatorSpec, normalized: &NormalizedResult) -> Vec<SeriesPoint> {
    let Some(items) = normalized.data.as_array() else {
        return Vec::new();
    };

    let mut points: Vec<SeriesPoint> = items
        .iter()
        .filter_map(|item| {
            let value = item.get(OBS_VALUE).and_then(numeric)?;
            let year = item.get(TIME_PERIOD).and_then(period)?;
            let unit = if spec.unit_in_series {
                item.get(UNIT_MEASURE)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            } else {
                None
            };
            Some(SeriesPoint { year, value, unit })
        })
        .collect();

    points.sort_by_key(|p| sort_key(&p.year));
    points
}

/// Wraps a series in the response envelope.
pub fn series_result(points: Vec<SeriesPoint>) -> NormalizedResult {
    let data = points
        .into_iter()
        .filter_map(|p| serde_json::to_value(p).ok())
        .collect();
    NormalizedResult::new(Value::Array(data))
}

fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

fn period(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// Years sort by their leading integer, so "2020-Q1" sorts as 2020. Years without
// leading digits sort after every numeric year.
fn sort_key(year: &str) -> (bool, i64) {
    let trimmed = year.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    match rest[..digits].parse::<i64>() {
        Ok(y) => (false, sign * y),
        Err(_) => (true, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::lookup;
    use serde_json::json;

    #[test]
    fn test_filters_converts_and_sorts() {
        let spec = lookup("cpi").unwrap();
        let normalized = NormalizedResult::new(json!([
            {"TIME_PERIOD": "2021", "OBS_VALUE": "121.5", "UNIT_MEASURE": "IX"},
            {"TIME_PERIOD": "2019", "OBS_VALUE": 118.0},
            {"TIME_PERIOD": "2020", "OBS_VALUE": null},
            {"TIME_PERIOD": "2018", "OBS_VALUE": "n/a"},
            {"OBS_VALUE": 3.0},
        ]));

        let series = to_series(spec, &normalized);
        assert_eq!(
            series,
            vec![
                SeriesPoint { year: "2019".into(), value: 118.0, unit: None },
                SeriesPoint { year: "2021".into(), value: 121.5, unit: None },
            ]
        );
    }

    #[test]
    fn test_unit_kept_for_list_or_value_indicators() {
        let spec = lookup("mobile-internet-banking").unwrap();
        let normalized = NormalizedResult::new(json!([
            {"TIME_PERIOD": 2022, "OBS_VALUE": "12", "UNIT_MEASURE": "NUM"},
        ]));
        let series = to_series(spec, &normalized);
        assert_eq!(series[0].year, "2022");
        assert_eq!(series[0].unit.as_deref(), Some("NUM"));
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        let spec = lookup("gdp-per-capita").unwrap();
        let normalized = NormalizedResult::new(json!({"foo": "bar"}));
        assert!(to_series(spec, &normalized).is_empty());
    }

    #[test]
    fn test_years_sort_by_leading_integer() {
        let spec = lookup("inflation").unwrap();
        let normalized = NormalizedResult::new(json!([
            {"TIME_PERIOD": "2021", "OBS_VALUE": 1},
            {"TIME_PERIOD": "FY", "OBS_VALUE": 4},
            {"TIME_PERIOD": "2020-Q1", "OBS_VALUE": 2},
            {"TIME_PERIOD": " 1999", "OBS_VALUE": 3},
        ]));
        let years: Vec<_> = to_series(spec, &normalized)
            .into_iter()
            .map(|p| p.year)
            .collect();
        assert_eq!(years, vec![" 1999", "2020-Q1", "2021", "FY"]);
    }

    #[test]
    fn test_sort_key_reads_leading_digits() {
        assert_eq!(sort_key("2020-Q1"), (false, 2020));
        assert_eq!(sort_key("  1960"), (false, 1960));
        assert_eq!(sort_key("-5"), (false, -5));
        assert_eq!(sort_key("Q1-2020"), (true, 0));
        assert_eq!(sort_key(""), (true, 0));
    }

    #[test]
    fn test_series_result_envelope() {
        let result = series_result(vec![SeriesPoint {
            year: "2000".into(),
            value: 1.5,
            unit: None,
        }]);
        assert_eq!(result.data, json!([{"year": "2000", "value": 1.5}]));
    }
}
