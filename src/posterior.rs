use crate::error::{CustomError, Result};
use crate::hypothesis::{Evidence, Hypothesis, Hypotheses, decode_genes, n_gene_codes};
use crate::joint::joint_probability;
use crate::model::Pedigree;
use crate::probs::InheritanceModel;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Per-person gene and trait weight tables, unnormalized until
/// `normalize` runs.
pub struct Posteriors {
    names: Vec<String>,
    gene: Vec<[f64; 3]>,
    traits: Vec<[f64; 2]>,
}

impl Posteriors {
    pub fn new(names: Vec<String>) -> Self {
        let n_people = names.len();
        Self {
            names,
            gene: vec![[0.0; 3]; n_people],
            traits: vec![[0.0; 2]; n_people],
        }
    }

    pub fn consume_hypotheses(
        mut self,
        pedigree: &Pedigree,
        model: &InheritanceModel,
    ) -> Self {
        let hypotheses = Hypotheses::new(pedigree);
        let pb = ProgressBar::new(hypotheses.total());
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} hypotheses")
                .unwrap(),
        );

        for hypothesis in hypotheses {
            let p = joint_probability(pedigree, model, &hypothesis);
            self.accumulate(&hypothesis, p);
            pb.inc(1);
        }
        pb.abandon();
        self
    }

    pub fn consume_hypotheses_parallel(
        self,
        pedigree: &Pedigree,
        model: &InheritanceModel,
    ) -> Self {
        let n_people = pedigree.len();
        let evidence = Evidence::from_pedigree(pedigree);
        let codes = n_gene_codes(n_people);
        let n_trait_masks = 1u64 << n_people;

        let pb = ProgressBar::new(codes);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:30} {pos}/{len} gene partitions",
            )
            .unwrap(),
        );

        let merged = (0..codes)
            .into_par_iter()
            .fold(
                || Posteriors::new(self.names.clone()),
                |mut acc, code| {
                    let mut hypothesis = Hypothesis::new(decode_genes(code, n_people), 0);
                    for trait_mask in 0..n_trait_masks {
                        if !evidence.admits(trait_mask) {
                            continue;
                        }
                        hypothesis.set_traits(trait_mask);
                        let p = joint_probability(pedigree, model, &hypothesis);
                        acc.accumulate(&hypothesis, p);
                    }
                    pb.inc(1);
                    acc
                },
            )
            .reduce(|| Posteriors::new(self.names.clone()), Posteriors::merge);

        pb.abandon();
        merged
    }

    /// Fold one hypothesis's joint probability into every person's
    /// marginals. Weights add up across hypotheses; a bucket collects
    /// contributions from every hypothesis that assigns it.
    fn accumulate(&mut self, hypothesis: &Hypothesis, p: f64) {
        for idx in 0..self.names.len() {
            self.gene[idx][hypothesis.gene(idx).copies()] += p;
            self.traits[idx][hypothesis.has_trait(idx) as usize] += p;
        }
    }

    fn merge(mut self, other: Posteriors) -> Posteriors {
        for idx in 0..self.names.len() {
            for copies in 0..3 {
                self.gene[idx][copies] += other.gene[idx][copies];
            }
            for value in 0..2 {
                self.traits[idx][value] += other.traits[idx][value];
            }
        }
        self
    }

    /// Rescale every distribution to sum to 1, in place.
    pub fn normalize(&mut self) -> Result<()> {
        for idx in 0..self.names.len() {
            if !normalize_in_place(&mut self.gene[idx]) || !normalize_in_place(&mut self.traits[idx])
            {
                return Err(CustomError::ZeroWeight {
                    name: self.names[idx].clone(),
                });
            }
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Gene weights for one person, indexed by copies.
    pub fn gene_distribution(&self, person: usize) -> [f64; 3] {
        self.gene[person]
    }

    /// Trait weights for one person: `[without trait, with trait]`.
    pub fn trait_distribution(&self, person: usize) -> [f64; 2] {
        self.traits[person]
    }
}

fn normalize_in_place(weights: &mut [f64]) -> bool {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return false;
    }
    for weight in weights.iter_mut() {
        *weight /= total;
    }
    true
}
