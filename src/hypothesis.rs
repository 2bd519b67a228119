use crate::model::{GeneCount, Pedigree};

/// Exact enumeration walks 3^n * 2^n assignments; the bitmask
/// representation also needs every person to fit in a u64.
pub const MAX_PEOPLE: usize = 20;

/// One complete assignment of gene buckets and trait values.
#[derive(Debug, Clone)]
pub struct Hypothesis {
    genes: Vec<GeneCount>,
    trait_mask: u64,
}

impl Hypothesis {
    pub fn new(genes: Vec<GeneCount>, trait_mask: u64) -> Self {
        Self { genes, trait_mask }
    }

    pub fn gene(&self, person: usize) -> GeneCount {
        self.genes[person]
    }

    pub fn has_trait(&self, person: usize) -> bool {
        self.trait_mask >> person & 1 == 1
    }

    pub fn set_traits(&mut self, trait_mask: u64) {
        self.trait_mask = trait_mask;
    }
}

/// Observed traits packed into bitmasks over person indices.
#[derive(Debug, Clone, Copy)]
pub struct Evidence {
    known_mask: u64,
    known_traits: u64,
}

impl Evidence {
    pub fn from_pedigree(pedigree: &Pedigree) -> Self {
        let mut known_mask = 0u64;
        let mut known_traits = 0u64;
        for (idx, person) in pedigree.people().iter().enumerate() {
            if let Some(observed) = person.observed_trait {
                known_mask |= 1 << idx;
                if observed {
                    known_traits |= 1 << idx;
                }
            }
        }
        Self {
            known_mask,
            known_traits,
        }
    }

    /// A trait assignment is admissible iff it agrees with every
    /// observed trait.
    pub fn admits(&self, trait_mask: u64) -> bool {
        trait_mask & self.known_mask == self.known_traits
    }

    pub fn n_known(&self) -> u32 {
        self.known_mask.count_ones()
    }
}

pub fn n_gene_codes(n_people: usize) -> u64 {
    3u64.pow(n_people as u32)
}

/// Decode a base-3 gene code into per-person buckets.
pub fn decode_genes(code: u64, n_people: usize) -> Vec<GeneCount> {
    let mut genes = Vec::with_capacity(n_people);
    let mut rest = code;
    for _ in 0..n_people {
        genes.push(GeneCount::from_copies((rest % 3) as usize));
        rest /= 3;
    }
    genes
}

/// Lazy enumeration of every evidence-consistent hypothesis: an outer
/// base-3 code over gene buckets, an inner bitmask over trait values.
pub struct Hypotheses {
    evidence: Evidence,
    n_people: usize,
    n_gene_codes: u64,
    n_trait_masks: u64,
    gene_code: u64,
    trait_mask: u64,
}

impl Hypotheses {
    pub fn new(pedigree: &Pedigree) -> Self {
        let n_people = pedigree.len();
        Self {
            evidence: Evidence::from_pedigree(pedigree),
            n_people,
            n_gene_codes: n_gene_codes(n_people),
            n_trait_masks: 1 << n_people,
            gene_code: 0,
            trait_mask: 0,
        }
    }

    /// Number of hypotheses the iterator will yield.
    pub fn total(&self) -> u64 {
        self.n_gene_codes * (1u64 << (self.n_people as u32 - self.evidence.n_known()))
    }
}

impl Iterator for Hypotheses {
    type Item = Hypothesis;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.gene_code == self.n_gene_codes {
                return None;
            }
            if self.trait_mask == self.n_trait_masks {
                self.trait_mask = 0;
                self.gene_code += 1;
                continue;
            }
            let trait_mask = self.trait_mask;
            self.trait_mask += 1;
            if self.evidence.admits(trait_mask) {
                return Some(Hypothesis::new(
                    decode_genes(self.gene_code, self.n_people),
                    trait_mask,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::PersonRecord;

    fn pedigree(traits: &[Option<bool>]) -> Pedigree {
        let records = traits
            .iter()
            .enumerate()
            .map(|(idx, &observed_trait)| PersonRecord {
                name: format!("P{idx}"),
                mother: None,
                father: None,
                observed_trait,
            })
            .collect();
        Pedigree::from_records(records).expect("pedigree should validate")
    }

    #[test]
    fn unobserved_population_yields_full_space() {
        let pedigree = pedigree(&[None, None]);
        let hypotheses = Hypotheses::new(&pedigree);
        assert_eq!(hypotheses.total(), 36); // 3^2 * 2^2
        assert_eq!(hypotheses.count(), 36);
    }

    #[test]
    fn observed_trait_halves_the_space() {
        let pedigree = pedigree(&[Some(true), None]);
        let hypotheses = Hypotheses::new(&pedigree);
        assert_eq!(hypotheses.total(), 18);
        let all: Vec<Hypothesis> = Hypotheses::new(&pedigree).collect();
        assert_eq!(all.len(), 18);
        assert!(all.iter().all(|h| h.has_trait(0)));
    }

    #[test]
    fn contradicting_masks_are_never_yielded() {
        let pedigree = pedigree(&[Some(false), Some(true), None]);
        for hypothesis in Hypotheses::new(&pedigree) {
            assert!(!hypothesis.has_trait(0));
            assert!(hypothesis.has_trait(1));
        }
        assert_eq!(Hypotheses::new(&pedigree).count(), 27 * 2);
    }

    #[test]
    fn enumeration_is_restartable() {
        let pedigree = pedigree(&[Some(true), None]);
        let first: Vec<u64> = Hypotheses::new(&pedigree)
            .map(|h| h.gene(0).copies() as u64)
            .collect();
        let second: Vec<u64> = Hypotheses::new(&pedigree)
            .map(|h| h.gene(0).copies() as u64)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gene_codes_cover_every_partition() {
        let n_people = 3;
        let mut seen = std::collections::HashSet::new();
        for code in 0..n_gene_codes(n_people) {
            let genes = decode_genes(code, n_people);
            assert_eq!(genes.len(), n_people);
            seen.insert(genes.iter().map(|g| g.copies()).collect::<Vec<_>>());
        }
        assert_eq!(seen.len(), 27);
    }
}
