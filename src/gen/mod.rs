pub mod distribution;

pub use self::distribution::TargetSampler;

use std::io::{self, Write};

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::graph::{DiGraph, Instance};

pub struct GenParams<'a> {
    pub n_node: usize,
    pub max_degree: usize,
    pub n_query: usize,
    pub targets: &'a dyn TargetSampler,
}

/// Builds a random instance: each node gets up to `max_degree` outgoing
/// edges with targets drawn from the sampler, and query starts are drawn
/// uniformly. Parallel edges and self-loops are legal output.
pub fn generate_instance(params: &GenParams) -> Instance {
    assert!(params.n_node > 0, "instances need at least one node");

    let mut rng = rand::thread_rng();
    let mut graph = DiGraph::with_nodes(params.n_node);

    for u in 1..=params.n_node {
        for _ in 0..rng.gen_range(0..=params.max_degree) {
            graph.add_edge(u, params.targets.sample_target(&mut rng));
        }
    }

    let start = Uniform::new_inclusive(1, params.n_node);
    let queries = (0..params.n_query).map(|_| start.sample(&mut rng)).collect();

    Instance { graph, queries }
}

/// Writes `instance` in the plain-text input format: node count, one
/// sentinel-terminated destination block per source node, query count,
/// one start node per line.
pub fn write_text<W: Write>(instance: &Instance, out: &mut W) -> io::Result<()> {
    let n = instance.graph.node_count();

    writeln!(out, "{}", n)?;
    for u in 1..=n {
        write!(out, "{}", u)?;
        for &v in instance.graph.neighbors(u) {
            write!(out, " {}", v)?;
        }
        writeln!(out, " 0")?;
    }

    writeln!(out, "{}", instance.queries.len())?;
    for &s in &instance.queries {
        writeln!(out, "{}", s)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_instances_are_valid() {
        let targets = distribution::uniform(9);
        let params = GenParams {
            n_node: 9,
            max_degree: 4,
            n_query: 5,
            targets: targets.as_ref(),
        };

        let instance = generate_instance(&params);
        instance.validate().unwrap();
        assert_eq!(instance.graph.node_count(), 9);
        assert_eq!(instance.queries.len(), 5);
        for u in 1..=9 {
            assert!(instance.graph.neighbors(u).len() <= 4);
        }
    }

    #[test]
    fn zipf_targets_stay_in_range() {
        let targets = distribution::zipf(4);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let v = targets.sample_target(&mut rng);
            assert!((1..=4).contains(&v));
        }
    }

    #[test]
    fn text_output_terminates_every_block() {
        let mut graph = DiGraph::with_nodes(2);
        graph.add_edge(1, 2);
        let instance = Instance {
            graph,
            queries: vec![2],
        };

        let mut out = Vec::new();
        write_text(&instance, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n1 2 0\n2 0\n1\n2\n");
    }
}
