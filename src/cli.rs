use crate::Args;
use crate::error::{CustomError, Result};
use crate::hypothesis::MAX_PEOPLE;
use crate::model::Pedigree;
use crate::output::{print_posteriors, write_posteriors_csv, write_posteriors_json};
use crate::posterior::Posteriors;
use crate::probs::InheritanceModel;
use crate::reader::load_pedigree;
use itertools::Itertools;
use rayon::ThreadPoolBuilder;

pub fn run(args: &Args) -> Result<()> {
    let records = load_pedigree(&args.data)?;
    let pedigree = Pedigree::from_records(records)?;
    if pedigree.len() > MAX_PEOPLE {
        return Err(CustomError::PedigreeTooLarge {
            n_people: pedigree.len(),
            max: MAX_PEOPLE,
        });
    }
    print_summary(&pedigree);

    let model = InheritanceModel::default();
    let posteriors = infer(&pedigree, &model, args.threads)?;

    print_posteriors(&posteriors);

    if let Some(path) = &args.output {
        println!();
        println!("Writing posteriors to {path}...");
        if args.json {
            write_posteriors_json(&posteriors, path)?;
        } else {
            write_posteriors_csv(&posteriors, path)?;
        }
    }
    Ok(())
}

pub fn infer(
    pedigree: &Pedigree,
    model: &InheritanceModel,
    threads: Option<usize>,
) -> Result<Posteriors> {
    // Below this the hypothesis space is small enough that thread
    // startup costs more than it saves.
    const PARALLEL_THRESHOLD: usize = 8;

    let mut posteriors = Posteriors::new(pedigree.names());
    if (threads.is_none() && pedigree.len() < PARALLEL_THRESHOLD) || threads == Some(1) {
        posteriors = posteriors.consume_hypotheses(pedigree, model);
    } else if let Some(n) = threads {
        let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
        posteriors = pool.install(|| posteriors.consume_hypotheses_parallel(pedigree, model));
    } else {
        posteriors = posteriors.consume_hypotheses_parallel(pedigree, model);
    }
    posteriors.normalize()?;
    Ok(posteriors)
}

fn print_summary(pedigree: &Pedigree) {
    println!("People  : {}", pedigree.len());
    println!("Founders: {}", pedigree.founder_names().iter().join(", "));
    println!();
}
