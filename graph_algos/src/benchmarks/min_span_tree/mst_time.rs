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

use graph_algos::graph::{Graph, WghEdge};
use graph_algos::kruskal::{kruskals, sum_weights};
use graph_algos::common::io::write_slice_to_file_seq;
use graph_algos::common::graph_io::read_graph_from_file;
use graph_algos::common::time_loop::time_loop;

#[path ="../macros.rs"] mod macros;

define_args!();

pub fn run(rounds: usize, g: &Graph) -> anyhow::Result<(Vec<WghEdge>, Duration)> {
    let mut r = Ok(vec![]);
    let mean = time_loop(
        "kruskal",
        rounds,
        || {},
        || { r = kruskals(g); },
    );
    Ok((r?, mean))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init!(args.threads);

    let g: Graph = read_graph_from_file(&args.ifname)
        .with_context(|| format!("cannot load graph from {}", args.ifname))?;
    let (r, d) = run(args.rounds, &g)?;

    println!("edges:  {}", r.len());
    println!("weight:  {}", sum_weights(&r));
    if r.len() + 1 < g.size() {
        println!("graph is disconnected: spanning forest returned");
    }

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)
            .with_context(|| format!("cannot write {}", args.ofname))?
    );
    Ok(())
}
