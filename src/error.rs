use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to CSV")]
    CsvWrite(#[from] csv::Error),

    #[error("could not write JSON output")]
    JsonWrite(#[from] serde_json::Error),

    #[error("missing required column {column:?} in {path}")]
    MissingColumn {
        column: &'static str,
        path: std::path::PathBuf,
    },

    #[error("missing {column:?} field in row {row}")]
    MissingField { column: &'static str, row: usize },

    #[error("empty name in row {row}")]
    EmptyName { row: usize },

    #[error("duplicate name {name:?}")]
    DuplicateName { name: String },

    #[error("invalid trait value {value:?} for {name} (expected \"1\", \"0\", or empty)")]
    TraitValue { name: String, value: String },

    #[error("{name} has one recorded parent; mother and father must both be present or both be absent")]
    SingleParent { name: String },

    #[error("parent {parent:?} of {name} is not in the pedigree")]
    UnknownParent { name: String, parent: String },

    #[error("parent links of {name} form a cycle")]
    ParentCycle { name: String },

    #[error("pedigree contains no people")]
    EmptyPedigree,

    #[error("pedigree has {n_people} people; exact enumeration supports at most {max}")]
    PedigreeTooLarge { n_people: usize, max: usize },

    #[error("distribution for {name} has zero total weight")]
    ZeroWeight { name: String },

    #[error("could not build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, CustomError>;
