//! Builds a [`RecordStore`] from county demographics JSON.
//!
//! The expected shape is an array of county objects:
//!
//! ```text
//! [
//!   {
//!     "County": "Autauga County",
//!     "State": "AL",
//!     "Population": { "2014 Population": 55395, ... },
//!     "Age": { "Percent 65 and Older": 13.8, ... },
//!     "Education": { ... },
//!     "Ethnicities": { ... },
//!     "Income": { "Persons Below Poverty Level": 12.1, ... },
//!     ...
//!   }
//! ]
//! ```
//!
//! Sections other than the four category maps and the population are ignored.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::StoreError,
    record::{Record, RecordStore},
};

#[derive(Debug, Deserialize)]
struct RawCounty {
    #[serde(rename = "County")]
    county: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Population")]
    population: RawPopulation,
    #[serde(rename = "Age", default)]
    age: BTreeMap<String, f64>,
    #[serde(rename = "Education", default)]
    education: BTreeMap<String, f64>,
    #[serde(rename = "Ethnicities", default)]
    ethnicities: BTreeMap<String, f64>,
    #[serde(rename = "Income", default)]
    income: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RawPopulation {
    #[serde(rename = "2014 Population")]
    population_2014: u64,
}

impl TryFrom<RawCounty> for Record {
    type Error = StoreError;

    fn try_from(raw: RawCounty) -> Result<Self, Self::Error> {
        let record = Record {
            region_id: raw.county,
            state_code: raw.state,
            population: raw.population.population_2014,
            age: raw.age,
            education: raw.education,
            ethnicities: raw.ethnicities,
            income: raw.income,
        };
        if record.poverty_rate().is_none() {
            return Err(StoreError::MissingPovertyRate(record.region_id));
        }
        Ok(record)
    }
}

impl RecordStore {
    /// Parse a JSON array of counties.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a missing `2014 Population`, or a county
    /// without a poverty rate.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let raw: Vec<RawCounty> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = records.len(), "parsed county records");
        Ok(RecordStore::new(records))
    }

    /// Read and parse a JSON file of counties.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), records = store.len(), "record store loaded");
        Ok(store)
    }
}
