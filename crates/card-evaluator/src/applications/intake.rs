use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::CreditCardApplication;

/// Read applications from a CSV export with `Income`, `Age`,
/// `FrequentFlyerNumber` and `LastName` columns. Blank cells are absent values.
pub fn parse_applications<R: Read>(reader: R) -> Result<Vec<CreditCardApplication>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for record in csv_reader.deserialize::<ApplicationRow>() {
        applications.push(record?.into());
    }

    Ok(applications)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(rename = "Income")]
    income: u32,
    #[serde(rename = "Age")]
    age: u16,
    #[serde(
        rename = "FrequentFlyerNumber",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    frequent_flyer_number: Option<String>,
    #[serde(rename = "LastName", default, deserialize_with = "empty_string_as_none")]
    last_name: Option<String>,
}

impl From<ApplicationRow> for CreditCardApplication {
    fn from(row: ApplicationRow) -> Self {
        CreditCardApplication {
            gross_annual_income: row.income,
            age: row.age,
            frequent_flyer_number: row.frequent_flyer_number,
            last_name: row.last_name,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
