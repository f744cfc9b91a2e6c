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

use std::collections::HashMap;

use thiserror::Error;

use crate::graph::{Graph, Weight, WghEdge};
use crate::kruskal::{kruskals, sum_weights};
use crate::union_find::DisjointSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("wrong edge count: the forest has {expected} edges but the result has {found}")]
    WrongEdgeCount { expected: usize, found: usize },

    #[error("edge `{0}` is not in the graph (or is used more often than it occurs)")]
    NotInGraph(String),

    #[error("edge `{0}` closes a cycle")]
    Cycle(String),

    #[error("wrong total weight: expected {expected} but found {found}")]
    WrongWeight { expected: String, found: String },
}

/// Checks that `out` is a minimum spanning forest of `g`: same edge count and
/// total weight as a serial Kruskal run, every edge taken from `g`, and no
/// cycles.
pub fn check_msf<W: Weight>(g: &Graph<W>, out: &[WghEdge<W>]) -> crate::Result<Result<(), CheckFailure>> {
    let serial = kruskals(g)?;
    if serial.len() != out.len() {
        return Ok(Err(CheckFailure::WrongEdgeCount {
            expected: serial.len(),
            found: out.len(),
        }));
    }

    // an undirected edge may be reported in either direction
    let key = |e: &WghEdge<W>| (e.u.min(e.v), e.u.max(e.v), e.w);
    let mut available: HashMap<_, usize> = HashMap::new();
    for e in g { *available.entry(key(e)).or_default() += 1; }

    let mut ds = DisjointSet::new(g.size())?;
    for e in out {
        match available.get_mut(&key(e)) {
            Some(c) if *c > 0 => *c -= 1,
            _ => return Ok(Err(CheckFailure::NotInGraph(e.to_string()))),
        }
        if ds.same_set(e.u, e.v)? {
            return Ok(Err(CheckFailure::Cycle(e.to_string())));
        }
        ds.union_sets(e.u, e.v)?;
    }

    let (expected, found) = (sum_weights(&serial), sum_weights(out));
    if expected != found {
        return Ok(Err(CheckFailure::WrongWeight {
            expected: expected.to_string(),
            found: found.to_string(),
        }));
    }
    Ok(Ok(()))
}
