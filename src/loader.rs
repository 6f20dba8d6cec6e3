//! Load batches of scenario requests from CSV
//!
//! Columns: `label,mode,balance,apr,payment,extra_payment,include_compounding,min_percent,floor_amount,max_months`.
//! Only `label` is required; blank or missing columns take the request defaults.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use serde::Deserialize;

use crate::config::{RequestMode, ScenarioRequest};
use crate::error::Result;

/// A request with the name it was given in the batch file
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledRequest {
    pub label: String,
    pub request: ScenarioRequest,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    label: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    apr: Option<f64>,
    #[serde(default)]
    payment: Option<f64>,
    #[serde(default)]
    extra_payment: Option<f64>,
    #[serde(default)]
    include_compounding: Option<bool>,
    #[serde(default)]
    min_percent: Option<f64>,
    #[serde(default)]
    floor_amount: Option<f64>,
    #[serde(default)]
    max_months: Option<u32>,
}

impl CsvRow {
    fn into_labelled(self) -> Result<LabelledRequest> {
        let defaults = ScenarioRequest::default();
        let mode = match self.mode.as_deref().map(str::trim) {
            None | Some("") => defaults.mode,
            Some(raw) => raw.parse::<RequestMode>()?,
        };

        let request = ScenarioRequest {
            mode,
            balance: self.balance.unwrap_or(defaults.balance),
            apr: self.apr.unwrap_or(defaults.apr),
            payment: self.payment.unwrap_or(defaults.payment),
            extra_payment: self.extra_payment.unwrap_or(defaults.extra_payment),
            include_compounding: self.include_compounding.unwrap_or(defaults.include_compounding),
            min_percent: self.min_percent.unwrap_or(defaults.min_percent),
            floor_amount: self.floor_amount.unwrap_or(defaults.floor_amount),
            max_months: self.max_months.unwrap_or(defaults.max_months),
        };
        request.validate()?;

        Ok(LabelledRequest {
            label: self.label,
            request,
        })
    }
}

/// Read requests from any CSV source
pub fn load_requests<R: Read>(source: R) -> Result<Vec<LabelledRequest>> {
    let mut reader = Reader::from_reader(source);
    let mut requests = Vec::new();

    for row in reader.deserialize() {
        let row: CsvRow = row?;
        requests.push(row.into_labelled()?);
    }

    Ok(requests)
}

/// Read requests from a CSV file
pub fn load_requests_csv(path: &Path) -> Result<Vec<LabelledRequest>> {
    let file = File::open(path)?;
    load_requests(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayoffError;

    #[test]
    fn test_load_with_blank_columns() {
        let data = "\
label,mode,balance,apr,payment,extra_payment,include_compounding,min_percent,floor_amount,max_months
starter,fixed,1000,24,50,,true,,,
issuer,minimum,1900,24.99,,,,2,25,600
";
        let requests = load_requests(data.as_bytes()).unwrap();
        assert_eq!(requests.len(), 2);

        assert_eq!(requests[0].label, "starter");
        assert_eq!(requests[0].request.payment, 50.0);
        assert_eq!(requests[0].request.extra_payment, 25.0);
        assert_eq!(requests[0].request.max_months, 600);

        assert_eq!(requests[1].request.mode, RequestMode::Minimum);
        assert_eq!(requests[1].request.min_percent, 2.0);
    }

    #[test]
    fn test_load_with_missing_columns() {
        let data = "label,balance\nsmall,250\n";
        let requests = load_requests(data.as_bytes()).unwrap();
        assert_eq!(requests[0].request.balance, 250.0);
        assert_eq!(requests[0].request.apr, 24.99);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let data = "label,mode\nbad,weekly\n";
        assert!(matches!(
            load_requests(data.as_bytes()),
            Err(PayoffError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_bad_number_is_csv_error() {
        let data = "label,balance\nbad,lots\n";
        assert!(matches!(load_requests(data.as_bytes()), Err(PayoffError::Csv(_))));
    }
}
