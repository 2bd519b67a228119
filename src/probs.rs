use crate::model::GeneCount;

/// Conditional probability tables for the gene/trait network.
///
/// Built once at startup and passed explicitly to the inference code;
/// never mutated.
#[derive(Debug, Clone)]
pub struct InheritanceModel {
    /// P(gene copies) for a founder, indexed by copies.
    pub gene_prior: [f64; 3],
    /// P(trait | gene copies), indexed by copies.
    pub trait_given_gene: [f64; 3],
    /// Probability a transmitted copy flips state during inheritance.
    pub mutation_rate: f64,
}

impl Default for InheritanceModel {
    fn default() -> Self {
        Self {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_gene: [0.01, 0.56, 0.65],
            mutation_rate: 0.01,
        }
    }
}

impl InheritanceModel {
    pub fn prior(&self, gene: GeneCount) -> f64 {
        self.gene_prior[gene.copies()]
    }

    pub fn trait_prob(&self, gene: GeneCount, has_trait: bool) -> f64 {
        let p = self.trait_given_gene[gene.copies()];
        if has_trait { p } else { 1.0 - p }
    }

    /// Probability that a parent in this bucket passes a working copy on.
    /// 0.01 / 0.505 / 0.99 with the default mutation rate.
    pub fn transmission(&self, gene: GeneCount) -> f64 {
        let m = self.mutation_rate;
        match gene {
            GeneCount::Zero => m,
            GeneCount::One => 0.5 + 0.5 * m,
            GeneCount::Two => 1.0 - m,
        }
    }

    /// Gene-count distribution for a child of the given parents, indexed by
    /// copies. One formula covers all nine parent-bucket combinations.
    pub fn child_gene_distribution(&self, mother: GeneCount, father: GeneCount) -> [f64; 3] {
        let pm = self.transmission(mother);
        let pf = self.transmission(father);
        [
            (1.0 - pm) * (1.0 - pf),
            pm * (1.0 - pf) + (1.0 - pm) * pf,
            pm * pf,
        ]
    }
}
