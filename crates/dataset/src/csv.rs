use thiserror::Error;

use crate::record::CampaignRecord;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("file is empty; expected a header row")]
    EmptyFile,
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: expected at least {expected} fields, got {got}")]
    ShortRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}, column '{column}': {value} is negative")]
    NegativeValue {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

// Column names are matched case-sensitively against the header row
const CAMPAIGN: &str = "Campaign";
const SPEND: &str = "Spend";
const REVENUE: &str = "Revenue";
const CONVERSIONS: &str = "Conversions";

/// Parse campaign CSV content into records.
///
/// The header row must carry `Campaign`, `Spend`, `Revenue` and
/// `Conversions`; extra columns are ignored. Fields may be double-quoted
/// (embedded newlines are not supported). Numeric cells must parse as
/// non-negative floats.
pub fn parse_campaign_csv(content: &str) -> Result<Vec<CampaignRecord>, DatasetError> {
    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or(DatasetError::EmptyFile)?;
    let columns = split_fields(header);

    let campaign_idx = find_column(&columns, CAMPAIGN)?;
    let spend_idx = find_column(&columns, SPEND)?;
    let revenue_idx = find_column(&columns, REVENUE)?;
    let conversions_idx = find_column(&columns, CONVERSIONS)?;

    let width = [campaign_idx, spend_idx, revenue_idx, conversions_idx]
        .into_iter()
        .max()
        .unwrap()
        + 1;

    let mut records = Vec::new();

    for (line_idx, line) in lines {
        let row = line_idx + 1; // 1-based, header is row 1
        let fields = split_fields(line);

        if fields.len() < width {
            return Err(DatasetError::ShortRow {
                row,
                expected: width,
                got: fields.len(),
            });
        }

        records.push(CampaignRecord {
            campaign_id: fields[campaign_idx].clone(),
            spend: parse_amount(&fields[spend_idx], row, SPEND)?,
            revenue: parse_amount(&fields[revenue_idx], row, REVENUE)?,
            conversions: parse_amount(&fields[conversions_idx], row, CONVERSIONS)?,
        });
    }

    Ok(records)
}

fn find_column(columns: &[String], name: &'static str) -> Result<usize, DatasetError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or(DatasetError::MissingColumn(name))
}

fn parse_amount(value: &str, row: usize, column: &'static str) -> Result<f64, DatasetError> {
    let parsed: f64 = value.parse().map_err(|_| DatasetError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })?;

    if parsed < 0.0 {
        return Err(DatasetError::NegativeValue {
            row,
            column,
            value: parsed,
        });
    }

    Ok(parsed)
}

/// Split one CSV line into fields, honoring double quotes. A doubled quote
/// inside a quoted field is an escaped quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }

    fields.push(field.trim().to_string());
    fields
}
