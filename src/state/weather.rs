#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::net::types::ForecastItem;

/// Hourly temperature, in degrees Celsius.
pub const CATEGORY_TEMPERATURE: &str = "TMP";
/// Relative humidity, in percent.
pub const CATEGORY_HUMIDITY: &str = "REH";
/// Precipitation probability, in percent.
pub const CATEGORY_PRECIP_PROBABILITY: &str = "POP";

/// Parameters for one short-term forecast request.
///
/// Defaults match the village-forecast grid cell for Incheon and the
/// 05:00 issue time; `num_of_rows` is large enough to fetch the whole
/// batch in one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastQuery {
    pub page_no: u32,
    pub num_of_rows: u32,
    pub base_date: String,
    pub base_time: String,
    pub nx: i32,
    pub ny: i32,
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self {
            page_no: 1,
            num_of_rows: 10_000,
            base_date: "20250816".to_owned(),
            base_time: "0500".to_owned(),
            nx: 55,
            ny: 125,
        }
    }
}

impl ForecastQuery {
    /// Query string for the `getVilageFcst` endpoint.
    pub fn query_string(&self, service_key: &str) -> String {
        format!(
            "serviceKey={service_key}&pageNo={}&numOfRows={}&dataType=JSON&base_date={}&base_time={}&nx={}&ny={}",
            self.page_no, self.num_of_rows, self.base_date, self.base_time, self.nx, self.ny,
        )
    }
}

/// State for the weather page.
#[derive(Clone, Debug, Default)]
pub struct WeatherState {
    pub items: Vec<ForecastItem>,
    pub loading: bool,
    pub error: Option<String>,
}

/// One point of a rendered forecast series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Forecast date and time, `"YYYYMMDD HHMM"`.
    pub label: String,
    pub value: f64,
}

/// Extract one category's chronological series from the flat item list.
///
/// Items whose value does not parse as a number (sky-condition codes and
/// the like) are skipped.
pub fn series(items: &[ForecastItem], category: &str) -> Vec<SeriesPoint> {
    let mut matching: Vec<&ForecastItem> =
        items.iter().filter(|i| i.category == category).collect();
    matching.sort_by(|a, b| {
        (&a.fcst_date, &a.fcst_time).cmp(&(&b.fcst_date, &b.fcst_time))
    });

    matching
        .into_iter()
        .filter_map(|i| {
            let value = i.fcst_value.parse::<f64>().ok()?;
            Some(SeriesPoint {
                label: format!("{} {}", i.fcst_date, i.fcst_time),
                value,
            })
        })
        .collect()
}
