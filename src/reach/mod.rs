use std::fs;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use slog::{Drain, Logger};

use crate::graph::{DiGraph, Instance};

/// Marks every node reachable from `start`, `start` itself included.
///
/// Depth-first over an explicit stack, so traversal depth is bounded by
/// heap memory rather than the call stack. A node is marked before its
/// neighbors are explored and never unmarked within a query.
pub fn reachable_from(graph: &DiGraph, start: usize) -> Vec<bool> {
    let mut visited = vec![false; graph.node_count() + 1];
    let mut stack = Vec::new();

    visited[start] = true;
    stack.push(start);

    while let Some(u) = stack.pop() {
        for &v in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    visited
}

/// Node ids in [1, n] not reachable from `start`, in ascending order.
pub fn unreachable_from(graph: &DiGraph, start: usize) -> Vec<usize> {
    let visited = reachable_from(graph, start);
    (1..=graph.node_count()).filter(|&v| !visited[v]).collect()
}

/// An empty set is reported as a bare `0`, the same value that terminates
/// destination lists on input.
pub fn write_unreachable<W: Write>(unreach: &[usize], out: &mut W) -> io::Result<()> {
    if unreach.is_empty() {
        writeln!(out, "0")
    } else {
        let ids: Vec<String> = unreach.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", ids.join(" "))
    }
}

/// Answers every query of an instance against an output sink, logging a
/// structured record per query. Result lines never mix with log output.
pub struct Reporter {
    log: Logger,
}

impl Reporter {
    pub fn new(dir: &Path) -> Self {
        fs::create_dir_all(dir).expect("failed to create log directory");
        let log_file = File::create(dir.join("result_log.json")).expect("couldn't create result log");

        Reporter {
            log: Self::json_logger(BufWriter::new(log_file)),
        }
    }

    pub fn to_stderr() -> Self {
        let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
        let log = Logger::root(slog_term::FullFormat::new(decorator).build().fuse(), o!());

        Reporter { log }
    }

    pub fn with_logger(log: Logger) -> Self {
        Reporter { log }
    }

    pub fn json_logger<W>(io: W) -> Logger
    where
        W: Write + Send + 'static,
    {
        let root_logger = Logger::root(
            Mutex::new(slog_json::Json::default(io)).map(slog::Fuse),
            o!(),
        );

        info!(root_logger, "application started";
        "started_at" => format!("{}", chrono::Local::now()));

        root_logger
    }

    pub fn report<W: Write>(&self, instance: &Instance, out: &mut W) -> io::Result<()> {
        info!(self.log, "answering queries";
            "nodes" => instance.graph.node_count(),
            "edges" => instance.graph.edge_count(),
            "queries" => instance.queries.len());

        let moment = Instant::now();

        for (i, &start) in instance.queries.iter().enumerate() {
            let unreach = unreachable_from(&instance.graph, start);
            info!(self.log, "query answered";
                "query" => i,
                "start" => start,
                "unreachable" => unreach.len());
            write_unreachable(&unreach, out)?;
        }

        let duration = moment.elapsed();

        info!(self.log, "all queries answered";
            "duration" => duration.as_secs() as f64 + f64::from(duration.subsec_nanos()) * 1e-9);

        Ok(())
    }
}
