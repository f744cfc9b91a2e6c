// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::time::Duration;

use anyhow::Context;

use graph_algos::Vertex;
use graph_algos::graph::Graph;
use graph_algos::traversal::{bfs, bfs_forest, dfs, dfs_forest};
use graph_algos::common::io::write_slice_to_file_seq;
use graph_algos::common::graph_io::read_graph_from_file;
use graph_algos::common::time_loop::time_loop;

#[path ="../macros.rs"] mod macros;

define_algs!(
    (DFS, "dfs"),
    (BFS, "bfs")
);

define_args!(
    (
        /// the traversal to run
        algorithm, Algs, Algs::BFS
    ),
    (
        /// the vertex to start from
        start, Vertex, 0
    ),
    (
        /// also follow every edge from its second endpoint to its first
        undirected, bool, false
    ),
    (
        /// restart from every unvisited vertex until all are visited
        all, bool, false
    )
);

pub fn run(alg: Algs, rounds: usize, g: &Graph, start: Option<Vertex>)
    -> anyhow::Result<(Vec<Vertex>, Duration)>
{
    let mut r = Ok(vec![]);
    let mean = time_loop(
        &alg.to_string(),
        rounds,
        || {},
        || {
            r = match (alg, start) {
                (Algs::DFS, Some(s)) => dfs(g, s),
                (Algs::BFS, Some(s)) => bfs(g, s),
                (Algs::DFS, None) => Ok(dfs_forest(g)),
                (Algs::BFS, None) => Ok(bfs_forest(g)),
            };
        },
    );
    Ok((r?, mean))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init!(args.threads);

    let mut g: Graph = read_graph_from_file(&args.ifname)
        .with_context(|| format!("cannot load graph from {}", args.ifname))?;
    if args.undirected { g = g.symmetrized(); }

    let start = if args.all { None } else { Some(args.start) };
    let (r, d) = run(args.algorithm, args.rounds, &g, start)?;

    println!("visited:  {} of {}", r.len(), g.size());
    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)
            .with_context(|| format!("cannot write {}", args.ofname))?
    );
    Ok(())
}
