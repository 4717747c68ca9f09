//! Command language reference for the CLI

/// Get the command language reference
pub fn get_grammar_reference() -> &'static str {
    r#"COUNTY-QUERY SCRIPTS

A script holds one command per line. Lines run top to bottom against a
working set of county records that starts as the whole data file. Filters
replace the working set with a narrower one; every later command sees the
result. A line that fails prints an error and the run continues.

OPERATIONS

  population-total                      Total 2014 population of the working set
  display                               Dump every record in the working set
  population:<Domain>.<key>             Number of people under <key>
  percent:<Domain>.<key>                Share of the population under <key>
  filter-state:<code>                   Keep counties of a two-letter state code
  filter-gt:<Domain>.<key>:<threshold>  Keep counties where <key> > threshold
  filter-lt:<Domain>.<key>:<threshold>  Keep counties where <key> < threshold

DOMAINS AND KEYS

  Age           Percent 65 and Older, Percent Under 18 Years,
                Percent Under 5 Years
  Education     Bachelor's Degree or Higher, High School or Higher
  Ethnicities   American Indian and Alaska Native Alone, Asian Alone,
                Black Alone, Hispanic or Latino,
                Native Hawaiian and Other Pacific Islander Alone,
                Two or More Races, White Alone,
                White Alone, not Hispanic or Latino
  Income        Persons Below Poverty Level (the domain may be omitted)

EXAMPLE

  filter-state:CA
  filter-gt:Education.Bachelor's Degree or Higher:30   # well-educated counties
  population-total
  percent:Persons Below Poverty Level
"#
}
