use std::io::BufRead;

use thiserror::Error;

use super::{DiGraph, Instance};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input ended before the instance was complete")]
    UnexpectedEof,
    #[error("expected an unsigned integer, got {0:?}")]
    BadToken(String),
    #[error("node id {id} outside [1, {n}]")]
    NodeOutOfRange { id: usize, n: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(reader: R) -> Scanner<R> {
        Scanner {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    fn next_usize(&mut self) -> Result<usize, ParseError> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(off) = rest.find(|c: char| !c.is_whitespace()) {
                let start = self.pos + off;
                let end = self.line[start..]
                    .find(char::is_whitespace)
                    .map_or(self.line.len(), |w| start + w);
                self.pos = end;
                let token = &self.line[start..end];
                return token
                    .parse()
                    .map_err(|_| ParseError::BadToken(token.to_string()));
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(ParseError::UnexpectedEof);
            }
        }
    }

    fn next_node(&mut self, n: usize) -> Result<usize, ParseError> {
        node_in_range(self.next_usize()?, n)
    }
}

fn node_in_range(id: usize, n: usize) -> Result<usize, ParseError> {
    if id == 0 || id > n {
        return Err(ParseError::NodeOutOfRange { id, n });
    }
    Ok(id)
}

impl Instance {
    /// Parses the whitespace-delimited instance format: node count, one
    /// destination block per source node terminated by the 0 sentinel,
    /// query count, then the query start nodes. Source blocks may appear
    /// in any order. Node ids outside [1, n] are rejected.
    pub fn parse<R: BufRead>(reader: R) -> Result<Instance, ParseError> {
        let mut scan = Scanner::new(reader);

        let n = scan.next_usize()?;
        let mut graph = DiGraph::with_nodes(n);

        for _ in 0..n {
            let u = scan.next_node(n)?;
            loop {
                let v = scan.next_usize()?;
                if v == 0 {
                    break;
                }
                graph.add_edge(u, node_in_range(v, n)?);
            }
        }

        let k = scan.next_usize()?;
        let mut queries = Vec::with_capacity(k);
        for _ in 0..k {
            queries.push(scan.next_node(n)?);
        }

        Ok(Instance { graph, queries })
    }

    /// Re-checks every edge and query against the node range. Parsing
    /// validates as it goes; this covers instances decoded from bincode.
    pub fn validate(&self) -> Result<(), ParseError> {
        let n = self.graph.node_count();
        for u in 1..=n {
            for &v in self.graph.neighbors(u) {
                node_in_range(v, n)?;
            }
        }
        for &s in &self.queries {
            node_in_range(s, n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Instance, ParseError> {
        Instance::parse(input.as_bytes())
    }

    #[test]
    fn parses_blocks_and_queries() {
        let instance = parse("3\n1 2 0\n2 3 0\n3 0\n1\n1\n").unwrap();
        assert_eq!(instance.graph.node_count(), 3);
        assert_eq!(instance.graph.neighbors(1), &[2]);
        assert_eq!(instance.graph.neighbors(2), &[3]);
        assert_eq!(instance.graph.neighbors(3), &[] as &[usize]);
        assert_eq!(instance.queries, vec![1]);
    }

    #[test]
    fn source_order_is_caller_defined() {
        let instance = parse("3\n3 1 0\n1 2 2 0\n2 0\n1\n2\n").unwrap();
        assert_eq!(instance.graph.neighbors(3), &[1]);
        // parallel edges survive parsing
        assert_eq!(instance.graph.neighbors(1), &[2, 2]);
    }

    #[test]
    fn self_loops_are_kept() {
        let instance = parse("1\n1 1 0\n1\n1\n").unwrap();
        assert_eq!(instance.graph.neighbors(1), &[1]);
    }

    #[test]
    fn whitespace_is_free_form() {
        let instance = parse("2 1 2 0 2 0 1 2").unwrap();
        assert_eq!(instance.graph.neighbors(1), &[2]);
        assert_eq!(instance.queries, vec![2]);
    }

    #[test]
    fn empty_graph_with_no_queries() {
        let instance = parse("0\n0\n").unwrap();
        assert_eq!(instance.graph.node_count(), 0);
        assert!(instance.queries.is_empty());
    }

    #[test]
    fn premature_eof_is_an_error() {
        assert!(matches!(parse("3\n1 2 0\n"), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn garbage_token_is_an_error() {
        assert!(matches!(parse("x"), Err(ParseError::BadToken(_))));
    }

    #[test]
    fn out_of_range_destination_is_an_error() {
        assert!(matches!(
            parse("2\n1 3 0\n2 0\n0\n"),
            Err(ParseError::NodeOutOfRange { id: 3, n: 2 })
        ));
    }

    #[test]
    fn out_of_range_query_is_an_error() {
        assert!(matches!(
            parse("1\n1 0\n1\n2\n"),
            Err(ParseError::NodeOutOfRange { id: 2, n: 1 })
        ));
    }

    #[test]
    fn validate_catches_bad_decoded_instances() {
        let mut graph = DiGraph::with_nodes(2);
        graph.add_edge(1, 2);
        let ok = Instance {
            graph: graph.clone(),
            queries: vec![2],
        };
        assert!(ok.validate().is_ok());

        graph.add_edge(2, 7);
        let bad = Instance {
            graph,
            queries: vec![2],
        };
        assert!(matches!(
            bad.validate(),
            Err(ParseError::NodeOutOfRange { id: 7, n: 2 })
        ));
    }
}
