use crate::error::{CustomError, Result};
use std::path::{Path, PathBuf};

/// One raw pedigree row, parsed but not yet validated against the rest
/// of the table.
#[derive(Debug, Clone)]
pub struct PersonRecord {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub observed_trait: Option<bool>,
}

const REQUIRED_COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

pub fn load_pedigree(path: impl AsRef<Path>) -> Result<Vec<PersonRecord>> {
    let csv_path = path.as_ref().to_path_buf();
    // Flexible so that short rows surface as a missing-field error
    // instead of a generic CSV error.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&csv_path)
        .map_err(|source| CustomError::CsvRead {
            source,
            path: csv_path.clone(),
        })?;

    let headers = reader
        .headers()
        .map_err(|source| CustomError::CsvRead {
            source,
            path: csv_path.clone(),
        })?
        .clone();
    let columns = REQUIRED_COLUMNS
        .map(|column| find_column(&headers, column, &csv_path));
    let [name_col, mother_col, father_col, trait_col] = columns;
    let (name_col, mother_col, father_col, trait_col) =
        (name_col?, mother_col?, father_col?, trait_col?);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 2; // 1-based, counting the header line
        let record = result.map_err(|source| CustomError::CsvRead {
            source,
            path: csv_path.clone(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let name = field(&record, name_col, "name", row)?;
        if name.is_empty() {
            return Err(CustomError::EmptyName { row });
        }

        let mother = optional(field(&record, mother_col, "mother", row)?);
        let father = optional(field(&record, father_col, "father", row)?);
        let observed_trait = match field(&record, trait_col, "trait", row)? {
            "" => None,
            "1" => Some(true),
            "0" => Some(false),
            other => {
                return Err(CustomError::TraitValue {
                    name: name.to_string(),
                    value: other.to_string(),
                });
            }
        };

        records.push(PersonRecord {
            name: name.to_string(),
            mother,
            father,
            observed_trait,
        });
    }
    Ok(records)
}

fn find_column(headers: &csv::StringRecord, column: &'static str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| CustomError::MissingColumn {
            column,
            path: path.to_path_buf(),
        })
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or(CustomError::MissingField { column, row })
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
