use rand::distributions::Uniform;
use rand::prelude::{Distribution, ThreadRng};
use zipf::ZipfDistribution;

/// Object-safe facade over `rand::Distribution`, sampling edge-target node
/// ids in [1, n].
pub trait TargetSampler {
    fn sample_target(&self, rng: &mut ThreadRng) -> usize;
}

struct NodeSampler<D: Distribution<usize>> {
    d: D,
}

impl<D: Distribution<usize>> TargetSampler for NodeSampler<D> {
    fn sample_target(&self, rng: &mut ThreadRng) -> usize {
        self.d.sample(rng)
    }
}

/// Every node equally likely.
pub fn uniform(n_node: usize) -> Box<dyn TargetSampler> {
    Box::new(NodeSampler {
        d: Uniform::new_inclusive(1, n_node),
    })
}

/// Skewed towards low node ids; zipf already samples 1-based, so no index
/// shifting is needed.
pub fn zipf(n_node: usize) -> Box<dyn TargetSampler> {
    Box::new(NodeSampler {
        d: ZipfDistribution::new(n_node, 0.5).expect("zipf needs at least one node"),
    })
}
