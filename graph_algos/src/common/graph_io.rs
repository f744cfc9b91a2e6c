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

use std::fs;
use std::path::Path;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight, WghEdge, PAR_THRESHOLD};

pub const WGH_GRAPH_HEADER: &str = "WeightedGraph";

/// Parses a weighted graph:
///
/// ```text
/// WeightedGraph      (optional)
/// <number of vertices>
/// <u> <v> <w>
/// ...
/// ```
///
/// Blank lines are ignored. Errors name the 1-based line they occur on.
pub fn parse_graph<W>(s: &str) -> Result<Graph<W>>
where
    W: Weight + FromStr,
{
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    if let Some(&(_, l)) = lines.peek() {
        if l == WGH_GRAPH_HEADER { lines.next(); }
    }

    let (line, l) = lines
        .next()
        .ok_or_else(|| GraphError::parse(0, "missing vertex count"))?;
    let n: usize = l
        .parse()
        .map_err(|_| GraphError::parse(line, format!("bad vertex count `{l}`")))?;

    let rest: Vec<(usize, &str)> = lines.collect();
    debug!(n, m = rest.len(), "parsing edges");

    let parse = |&(line, l): &(usize, &str)| {
        WghEdge::<W>::from_str(l).map_err(|e| GraphError::parse(line, e.to_string()))
    };
    let es = if rest.len() < PAR_THRESHOLD {
        rest.iter().map(parse).collect::<Result<Vec<_>>>()?
    } else {
        // collect in order so the first bad line is the one reported
        let parsed: Vec<Result<WghEdge<W>>> = rest.par_iter().map(parse).collect();
        parsed.into_iter().collect::<Result<Vec<_>>>()?
    };

    Graph::new(es, n)
}

pub fn read_graph_from_file<W, P>(fname: P) -> Result<Graph<W>>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    debug!(file = %fname.as_ref().display(), "reading graph");
    let s = fs::read_to_string(fname)?;
    parse_graph(&s)
}

/// Renders `g` in the format read by `parse_graph`, header included.
pub fn graph_to_string<W: Weight>(g: &Graph<W>) -> String {
    let mut s = format!("{WGH_GRAPH_HEADER}\n{}\n", g.size());
    for e in g {
        s.push_str(&e.to_string());
        s.push('\n');
    }
    s
}

pub fn write_graph_to_file<W, P>(g: &Graph<W>, of: P) -> Result<()>
where
    W: Weight,
    P: AsRef<Path>,
{
    fs::write(of, graph_to_string(g))?;
    Ok(())
}
