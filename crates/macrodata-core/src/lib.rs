pub mod catalog;
pub mod error;
pub mod normalize;
pub mod query;
pub mod region;
pub mod series;

pub use catalog::{IndicatorSpec, IndicatorSummary, Normalization};
pub use error::{CoreError, Result};
pub use normalize::NormalizedResult;
pub use query::{IndicatorQuery, OutputFormat, RawParams};
pub use region::{ASEAN_COUNTRIES, Country};
pub use series::{SeriesPoint, series_result, to_series};
