//! CSV loaders for market data kept in flat files: par quotes, bond quotes,
//! index fixings and holiday lists. Dates are ISO `yyyy-mm-dd`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use dqproto::analytics::ParCurvePillar;
use dqproto::datetime::Date;
use dqproto::market::TimeSeries;

use crate::analytics::create_par_curve_pillar;
use crate::datetime::to_date;
use crate::error::{DqError, Result};
use crate::market::create_time_series;

fn open_reader(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file)))
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| DqError::InvalidInput(format!("csv is missing column '{}'", name)))
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &str, line: usize) -> Result<&'r str> {
    record
        .get(idx)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            DqError::InvalidInput(format!("missing '{}' value at csv line {}", name, line))
        })
}

fn parse_iso_date(text: &str, line: usize) -> Result<Date> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
        DqError::InvalidInput(format!("bad date '{}' at csv line {}: {}", text, line, e))
    })?;
    Ok(to_date(date))
}

fn parse_number(text: &str, name: &str, line: usize) -> Result<f64> {
    text.parse::<f64>().map_err(|e| {
        DqError::InvalidInput(format!("bad '{}' value '{}' at csv line {}: {}", name, text, line, e))
    })
}

/// Loads par curve pillars from a csv with columns
/// `instrument,type,tenor,quote,start_convention`.
pub fn load_par_quotes(path: impl AsRef<Path>) -> Result<Vec<ParCurvePillar>> {
    let mut rdr = open_reader(path.as_ref())?;
    let headers = rdr.headers()?.clone();
    let instrument = column(&headers, "instrument")?;
    let kind = column(&headers, "type")?;
    let tenor = column(&headers, "tenor")?;
    let quote = column(&headers, "quote")?;
    let start = column(&headers, "start_convention")?;

    let mut pillars = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = result?;
        pillars.push(create_par_curve_pillar(
            field(&record, instrument, "instrument", line)?,
            field(&record, kind, "type", line)?,
            field(&record, tenor, "tenor", line)?,
            parse_number(field(&record, quote, "quote", line)?, "quote", line)?,
            field(&record, start, "start_convention", line)?,
        )?);
    }
    Ok(pillars)
}

/// Loads bond quotes from a csv with columns `instrument,quote`. The quote
/// type is uniform across the file and supplied by the caller downstream.
pub fn load_bond_quotes(path: impl AsRef<Path>) -> Result<Vec<(String, f64)>> {
    let mut rdr = open_reader(path.as_ref())?;
    let headers = rdr.headers()?.clone();
    let instrument = column(&headers, "instrument")?;
    let quote = column(&headers, "quote")?;

    let mut quotes = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = result?;
        quotes.push((
            field(&record, instrument, "instrument", line)?.to_uppercase(),
            parse_number(field(&record, quote, "quote", line)?, "quote", line)?,
        ));
    }
    Ok(quotes)
}

/// Loads index fixings from a csv with columns `date,value` into a
/// forward-mode time series named after the index.
pub fn load_fixings(path: impl AsRef<Path>, index_name: &str) -> Result<TimeSeries> {
    let mut rdr = open_reader(path.as_ref())?;
    let headers = rdr.headers()?.clone();
    let date = column(&headers, "date")?;
    let value = column(&headers, "value")?;

    let mut dates = Vec::new();
    let mut values = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = result?;
        dates.push(parse_iso_date(field(&record, date, "date", line)?, line)?);
        values.push(parse_number(field(&record, value, "value", line)?, "value", line)?);
    }
    create_time_series(dates, &values, "TS_FORWARD_MODE", index_name)
}

/// Loads a holiday list from a csv with a single `date` column.
pub fn load_holidays(path: impl AsRef<Path>) -> Result<Vec<Date>> {
    let mut rdr = open_reader(path.as_ref())?;
    let headers = rdr.headers()?.clone();
    let date = column(&headers, "date")?;

    let mut holidays = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let line = idx + 2;
        let record = result?;
        holidays.push(parse_iso_date(field(&record, date, "date", line)?, line)?);
    }
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dqproto::market::InstrumentType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_par_quotes() {
        let file = write_csv(
            "instrument,type,tenor,quote,start_convention\n\
             cny_shibor_3m_3m,deposit,3m,0.023,SPOT_START\n\
             cny_shibor_3m_1y,ir_vanilla_swap,1y,0.0256,SPOT_START\n",
        );
        let pillars = load_par_quotes(file.path()).unwrap();
        assert_eq!(pillars.len(), 2);
        assert_eq!(pillars[0].instrument_name, "CNY_SHIBOR_3M_3M");
        assert_eq!(pillars[0].instrument_type, InstrumentType::Deposit as i32);
        assert_eq!(pillars[1].quote, 0.0256);
    }

    #[test]
    fn loads_fixings_as_time_series() {
        let file = write_csv("date,value\n2022-03-03,0.0232\n2022-03-04,0.0231\n");
        let series = load_fixings(file.path(), "shibor_3m").unwrap();
        assert_eq!(series.name, "SHIBOR_3M");
        assert_eq!(series.dates.len(), 2);
        assert_eq!(series.dates[0].day, 3);
        assert_eq!(series.values.as_ref().unwrap().to_values(), vec![0.0232, 0.0231]);
    }

    #[test]
    fn missing_column_is_reported() {
        let file = write_csv("instrument,tenor\nx,3m\n");
        let err = load_par_quotes(file.path()).unwrap_err();
        assert!(matches!(err, DqError::InvalidInput(msg) if msg.contains("type")));
    }

    #[test]
    fn bad_number_is_reported_with_line() {
        let file = write_csv("instrument,quote\ncny_treas_1y,abc\n");
        let err = load_bond_quotes(file.path()).unwrap_err();
        assert!(matches!(err, DqError::InvalidInput(msg) if msg.contains("line 2")));
    }
}
