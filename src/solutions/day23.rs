use anyhow::{Context, Result};
use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use rustc_hash::FxHashSet;

use crate::Answer;

fn parse(input: &str) -> Result<UnGraphMap<&str, ()>> {
    let mut graph = UnGraphMap::new();
    for line in input.lines().filter(|line| !line.is_empty()) {
        let (left, right) = line
            .split_once('-')
            .with_context(|| format!("expected a-b link, got {line:?}"))?;
        graph.add_edge(left, right, ());
    }
    Ok(graph)
}

/// Counts triangles containing at least one computer whose name starts with
/// `t`. Ordering the corners lexicographically counts each triangle once.
fn historian_triangles(graph: &UnGraphMap<&str, ()>) -> usize {
    graph
        .all_edges()
        .map(|(a, b, _)| {
            let (a, b) = (a.min(b), a.max(b));
            graph
                .neighbors(a)
                .filter(|&c| c > b && graph.contains_edge(b, c))
                .filter(|&c| [a, b, c].iter().any(|n| n.starts_with('t')))
                .count()
        })
        .sum()
}

/// Bron-Kerbosch with pivoting; the LAN party is the maximum clique.
fn maximum_clique<'a>(graph: &UnGraphMap<&'a str, ()>) -> Vec<&'a str> {
    fn extend<'a>(
        graph: &UnGraphMap<&'a str, ()>,
        clique: &mut Vec<&'a str>,
        mut candidates: FxHashSet<&'a str>,
        mut excluded: FxHashSet<&'a str>,
        best: &mut Vec<&'a str>,
    ) {
        if candidates.is_empty() && excluded.is_empty() {
            if clique.len() > best.len() {
                *best = clique.clone();
            }
            return;
        }
        // branch only on candidates not adjacent to the pivot
        let pivot = candidates
            .iter()
            .chain(&excluded)
            .copied()
            .max_by_key(|&n| graph.neighbors(n).count());
        let branches: Vec<&str> = match pivot {
            Some(pivot) => candidates
                .iter()
                .copied()
                .filter(|&n| !graph.contains_edge(pivot, n))
                .collect(),
            None => candidates.iter().copied().collect(),
        };
        for node in branches {
            let neighbors: FxHashSet<&str> = graph.neighbors(node).collect();
            clique.push(node);
            extend(
                graph,
                clique,
                candidates.intersection(&neighbors).copied().collect(),
                excluded.intersection(&neighbors).copied().collect(),
                best,
            );
            clique.pop();
            candidates.remove(node);
            excluded.insert(node);
        }
    }

    let mut best = Vec::new();
    extend(
        graph,
        &mut Vec::new(),
        graph.nodes().collect(),
        FxHashSet::default(),
        &mut best,
    );
    best
}

pub fn day23(input: &str) -> Result<(Answer, Answer)> {
    let graph = parse(input)?;
    let password = maximum_clique(&graph).into_iter().sorted().join(",");
    Ok((historian_triangles(&graph).into(), password.into()))
}
