use crate::error::{CustomError, Result};
use crate::model::GeneCount;
use crate::posterior::Posteriors;
use std::path::Path;

/// Print every person's normalized distributions to stdout, gene block
/// first, four decimal places.
pub fn print_posteriors(posteriors: &Posteriors) {
    for (idx, name) in posteriors.names().iter().enumerate() {
        let gene = posteriors.gene_distribution(idx);
        let traits = posteriors.trait_distribution(idx);
        println!("{name}:");
        println!("  Gene:");
        for bucket in GeneCount::ALL.iter().rev() {
            println!("    {}: {:.4}", bucket.copies(), gene[bucket.copies()]);
        }
        println!("  Trait:");
        println!("    true: {:.4}", traits[1]);
        println!("    false: {:.4}", traits[0]);
    }
}

pub fn write_posteriors_csv(posteriors: &Posteriors, path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    wtr.write_record([
        "name",
        "gene_2",
        "gene_1",
        "gene_0",
        "trait_true",
        "trait_false",
    ])?;

    for (idx, name) in posteriors.names().iter().enumerate() {
        let gene = posteriors.gene_distribution(idx);
        let traits = posteriors.trait_distribution(idx);
        wtr.serialize((name.as_str(), gene[2], gene[1], gene[0], traits[1], traits[0]))?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    Ok(())
}

pub fn write_posteriors_json(posteriors: &Posteriors, path: impl AsRef<Path>) -> Result<()> {
    let mut report = serde_json::Map::new();
    for (idx, name) in posteriors.names().iter().enumerate() {
        let gene = posteriors.gene_distribution(idx);
        let traits = posteriors.trait_distribution(idx);
        report.insert(
            name.clone(),
            serde_json::json!({
                "gene": { "2": gene[2], "1": gene[1], "0": gene[0] },
                "trait": { "true": traits[1], "false": traits[0] },
            }),
        );
    }

    let file = std::fs::File::create(path.as_ref()).map_err(|e| CustomError::Write {
        source: e,
        path: path.as_ref().to_path_buf(),
    })?;
    serde_json::to_writer_pretty(file, &serde_json::Value::Object(report))?;
    Ok(())
}
