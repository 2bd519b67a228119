use crate::hypothesis::Hypothesis;
use crate::model::Pedigree;
use crate::probs::InheritanceModel;

/// Probability of one complete gene/trait assignment under the network.
///
/// Each person contributes P(gene bucket) * P(trait value | gene bucket);
/// the gene term comes from the prior for founders and from the parents'
/// hypothesized buckets otherwise. The joint probability is the product
/// over all people.
pub fn joint_probability(
    pedigree: &Pedigree,
    model: &InheritanceModel,
    hypothesis: &Hypothesis,
) -> f64 {
    let mut joint = 1.0;
    for (idx, person) in pedigree.people().iter().enumerate() {
        let gene = hypothesis.gene(idx);
        let gene_prob = match person.parents {
            None => model.prior(gene),
            Some((mother, father)) => {
                let dist =
                    model.child_gene_distribution(hypothesis.gene(mother), hypothesis.gene(father));
                dist[gene.copies()]
            }
        };
        joint *= gene_prob * model.trait_prob(gene, hypothesis.has_trait(idx));
    }
    joint
}
