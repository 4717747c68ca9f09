use std::collections::BTreeMap;
use std::fmt;

/// Income key holding the share of persons below the poverty level.
pub const POVERTY_KEY: &str = "Persons Below Poverty Level";

const AGE_KEYS: &[&str] = &[
    "Percent 65 and Older",
    "Percent Under 18 Years",
    "Percent Under 5 Years",
];

const EDUCATION_KEYS: &[&str] = &["Bachelor's Degree or Higher", "High School or Higher"];

const ETHNICITY_KEYS: &[&str] = &[
    "American Indian and Alaska Native Alone",
    "Asian Alone",
    "Black Alone",
    "Hispanic or Latino",
    "Native Hawaiian and Other Pacific Islander Alone",
    "Two or More Races",
    "White Alone",
    "White Alone, not Hispanic or Latino",
];

const INCOME_KEYS: &[&str] = &[POVERTY_KEY];

/// One of the four category maps carried by every [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Age,
    Education,
    Ethnicities,
    Income,
}

impl Domain {
    /// Parse the domain token used in scripts (`Education` in `Education.High School or Higher`).
    ///
    /// Matching is exact: `education` or `Educations` are not domains.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Age" => Some(Domain::Age),
            "Education" => Some(Domain::Education),
            "Ethnicities" => Some(Domain::Ethnicities),
            "Income" => Some(Domain::Income),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Domain::Age => "Age",
            Domain::Education => "Education",
            Domain::Ethnicities => "Ethnicities",
            Domain::Income => "Income",
        }
    }

    /// Keys of this domain that hold a percentage and can be measured or filtered on.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Domain::Age => AGE_KEYS,
            Domain::Education => EDUCATION_KEYS,
            Domain::Ethnicities => ETHNICITY_KEYS,
            Domain::Income => INCOME_KEYS,
        }
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demographic figures for a single county.
///
/// Category maps go from a label to a percentage (0-100), except the
/// dollar-valued income figures that are carried for display only.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub region_id: String,
    pub state_code: String,
    /// 2014 population count.
    pub population: u64,
    pub age: BTreeMap<String, f64>,
    pub education: BTreeMap<String, f64>,
    pub ethnicities: BTreeMap<String, f64>,
    pub income: BTreeMap<String, f64>,
}

impl Record {
    pub fn new(region_id: impl Into<String>, state_code: impl Into<String>, population: u64) -> Self {
        Record {
            region_id: region_id.into(),
            state_code: state_code.into(),
            population,
            age: BTreeMap::new(),
            education: BTreeMap::new(),
            ethnicities: BTreeMap::new(),
            income: BTreeMap::new(),
        }
    }

    /// Builder pattern: add a figure to the given domain
    pub fn with(mut self, domain: Domain, key: impl Into<String>, value: f64) -> Self {
        self.category_mut(domain).insert(key.into(), value);
        self
    }

    pub fn with_age(self, key: impl Into<String>, value: f64) -> Self {
        self.with(Domain::Age, key, value)
    }

    pub fn with_education(self, key: impl Into<String>, value: f64) -> Self {
        self.with(Domain::Education, key, value)
    }

    pub fn with_ethnicity(self, key: impl Into<String>, value: f64) -> Self {
        self.with(Domain::Ethnicities, key, value)
    }

    pub fn with_income(self, key: impl Into<String>, value: f64) -> Self {
        self.with(Domain::Income, key, value)
    }

    /// Builder pattern: set the poverty rate
    pub fn with_poverty_rate(self, value: f64) -> Self {
        self.with(Domain::Income, POVERTY_KEY, value)
    }

    pub fn category(&self, domain: Domain) -> &BTreeMap<String, f64> {
        match domain {
            Domain::Age => &self.age,
            Domain::Education => &self.education,
            Domain::Ethnicities => &self.ethnicities,
            Domain::Income => &self.income,
        }
    }

    fn category_mut(&mut self, domain: Domain) -> &mut BTreeMap<String, f64> {
        match domain {
            Domain::Age => &mut self.age,
            Domain::Education => &mut self.education,
            Domain::Ethnicities => &mut self.ethnicities,
            Domain::Income => &mut self.income,
        }
    }

    /// Value of `key` in `domain`, if this record carries it.
    pub fn figure(&self, domain: Domain, key: &str) -> Option<f64> {
        self.category(domain).get(key).copied()
    }

    pub fn poverty_rate(&self) -> Option<f64> {
        self.figure(Domain::Income, POVERTY_KEY)
    }
}

/// The full, ordered record collection. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        RecordStore { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        RecordStore::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
