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

use tracing::debug;

use crate::graph::{Graph, Weight, WghEdge};
use crate::union_find::DisjointSet;

/// Kruskal's algorithm: scans the edges by ascending weight and keeps every
/// edge that joins two different components.
///
/// A connected graph yields a minimum spanning tree of `n - 1` edges. A
/// disconnected graph yields a minimum spanning forest with fewer edges.
/// Fails only for a graph with no vertices.
pub fn kruskals<W: Weight>(g: &Graph<W>) -> crate::Result<Vec<WghEdge<W>>> {
    let n = g.size();
    let mut ds = DisjointSet::new(n)?;
    let sorted = g.sort_edges();
    let solution_size = n - 1;
    let mut msf = Vec::with_capacity(solution_size);

    if solution_size == 0 { return Ok(msf); }

    for &e in &sorted {
        let u = ds.find(e.u);
        let v = ds.find(e.v);
        if u != v {
            ds.link(v, u);
            msf.push(e);
            if msf.len() >= solution_size { break; }
        }
    }

    debug!(
        n,
        m = g.num_edges(),
        accepted = msf.len(),
        components = ds.num_sets(),
        "kruskal finished"
    );
    Ok(msf)
}

/// Sums the weights of `es`; zero when empty. Overflow is not checked.
pub fn sum_weights<W: Weight>(es: &[WghEdge<W>]) -> W {
    es.iter().fold(W::zero(), |acc, e| acc + e.w)
}
