use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub csv_path: PathBuf,
    pub dir: PathBuf,
}

pub fn write_dataset(label: &str, contents: &str) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join("pedprob-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    fs::create_dir_all(&dir)?;

    let csv_path = dir.join("pedigree.csv");
    let mut file = File::create(&csv_path)?;
    file.write_all(contents.as_bytes())?;

    Ok(Dataset { csv_path, dir })
}

/// Child with an affected father and an unaffected mother.
pub const FAMILY_CSV: &str = "name,mother,father,trait\n\
                              Harry,Lily,James,\n\
                              James,,,1\n\
                              Lily,,,0\n";

pub const SINGLE_FOUNDER_WITH_TRAIT_CSV: &str = "name,mother,father,trait\nArthur,,,1\n";

pub const SINGLE_FOUNDER_UNOBSERVED_CSV: &str = "name,mother,father,trait\nArthur,,,\n";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectedPosterior {
    /// Gene probabilities indexed by copies.
    pub gene: [f64; 3],
    pub trait_true: f64,
    pub trait_false: f64,
}

pub fn expected_family() -> Vec<(&'static str, ExpectedPosterior, f64)> {
    // Hand-computed from the fixed probability tables; the third field
    // is the comparison tolerance (looser for Harry, whose posterior
    // mixes all nine parent-bucket combinations).
    vec![
        (
            "Harry",
            ExpectedPosterior {
                gene: [0.5326, 0.4582, 0.0093],
                trait_true: 0.2679,
                trait_false: 0.7321,
            },
            1e-3,
        ),
        (
            "James",
            ExpectedPosterior {
                gene: [0.2918, 0.5106, 0.1976],
                trait_true: 1.0,
                trait_false: 0.0,
            },
            5e-4,
        ),
        (
            "Lily",
            ExpectedPosterior {
                gene: [0.9827, 0.0136, 0.0036],
                trait_true: 0.0,
                trait_false: 1.0,
            },
            5e-4,
        ),
    ]
}
