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

use std::fmt;
use std::hash::Hash;
use std::ops::Index;
use std::str::FromStr;

use num_traits::PrimInt;
use rayon::prelude::*;

use crate::{DefInt, DefWgh, Vertex};
use crate::error::{check_vertex, GraphError, Result};

/// Below this many edges the graph is scanned and sorted sequentially.
pub const PAR_THRESHOLD: usize = 1 << 14;

/// Integer types usable as edge weights.
pub trait Weight: PrimInt + Hash + Send + Sync + fmt::Debug + fmt::Display {}

impl<T> Weight for T
where
    T: PrimInt + Hash + Send + Sync + fmt::Debug + fmt::Display,
{}

// **************************************************************
//    WEIGHTED EDGE
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WghEdge<W = DefWgh> {
    pub u: Vertex,
    pub v: Vertex,
    pub w: W,
}

impl<W> WghEdge<W> {
    pub fn new(u: Vertex, v: Vertex, w: W) -> Self
    { Self { u, v, w } }
}

impl<W: Weight> Default for WghEdge<W> {
    fn default() -> Self { Self { u: 0, v: 0, w: W::zero() } }
}

impl<W: fmt::Display> fmt::Display for WghEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.u, self.v, self.w)
    }
}

/// Parses `u v w`, whitespace separated.
impl<W: FromStr> FromStr for WghEdge<W> {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s: Vec<&str> = s.split_whitespace().collect();
        if s.len() != 3 { return Err(ParseEdgeError(s.len())); }
        match (s[0].parse(), s[1].parse(), s[2].parse()) {
            (Ok(u), Ok(v), Ok(w)) => Ok(Self::new(u, v, w)),
            _ => Err(ParseEdgeError(3)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEdgeError(pub usize);

impl fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 3 {
            write!(f, "can not parse as edge, expected `u v w` integers")
        } else {
            write!(f, "can not parse as edge, expected 3 fields but found {}", self.0)
        }
    }
}

impl std::error::Error for ParseEdgeError {}

// **************************************************************
//    WEIGHTED EDGE-LIST GRAPH
// **************************************************************

/// An ordered list of weighted edges over the vertices `0..n`.
///
/// Edges are stored directed as `u -> v`. Parallel edges and self-loops are
/// kept as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<W = DefWgh> {
    es: Vec<WghEdge<W>>,
    n: usize,
}

impl<W: Weight> Graph<W> {
    /// Fails if an endpoint of some edge is not in `0..n`.
    pub fn new(es: Vec<WghEdge<W>>, n: usize) -> Result<Self> {
        if n > DefInt::MAX as usize {
            return Err(GraphError::InvalidArgument(
                format!("{n} vertices do not fit the vertex type")
            ));
        }

        let out_of_range = |e: &WghEdge<W>| e.u as usize >= n || e.v as usize >= n;
        let bad = if es.len() < PAR_THRESHOLD {
            es.iter().find(|e| out_of_range(*e))
        } else {
            es.par_iter().find_first(|e| out_of_range(*e))
        };
        if let Some(e) = bad {
            let vertex = if e.u as usize >= n { e.u } else { e.v };
            return Err(GraphError::VertexOutOfRange { vertex, n });
        }

        Ok(Self { es, n })
    }

    /// The number of vertices.
    #[inline(always)]
    pub const fn size(&self) -> usize { self.n }

    #[inline(always)]
    pub fn num_edges(&self) -> usize { self.es.len() }

    pub fn edges(&self) -> &[WghEdge<W>] { &self.es }

    pub fn into_edges(self) -> Vec<WghEdge<W>> { self.es }

    /// Returns a copy with the edges in ascending weight order. Equal weights
    /// keep their relative order.
    pub fn sort_edges(&self) -> Self {
        let mut es = self.es.clone();
        if es.len() < PAR_THRESHOLD {
            es.sort_by_key(|e| e.w);
        } else {
            es.par_sort_by_key(|e| e.w);
        }
        Self { es, n: self.n }
    }

    /// Every `v` with a stored edge `vertex -> v`, in edge order.
    /// Edges that only end at `vertex` are not included.
    pub fn edges_from(&self, vertex: Vertex) -> Result<Vec<Vertex>> {
        check_vertex(vertex, self.n)?;
        Ok(self.out_neighbors(vertex).collect())
    }

    #[inline(always)]
    pub(crate) fn out_neighbors(&self, vertex: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.es
            .iter()
            .filter(move |e| e.u == vertex)
            .map(|e| e.v)
    }

    /// Returns a copy where every non-loop edge `u -> v` also appears as
    /// `v -> u`. The reversed copies follow the original edges.
    pub fn symmetrized(&self) -> Self {
        let mut es = Vec::with_capacity(2 * self.es.len());
        es.extend_from_slice(&self.es);
        es.extend(
            self.es
                .iter()
                .filter(|e| e.u != e.v)
                .map(|e| WghEdge::new(e.v, e.u, e.w))
        );
        Self { es, n: self.n }
    }
}

impl<W> Index<usize> for Graph<W> {
    type Output = WghEdge<W>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.es[index]
    }
}

impl<'a, W> IntoIterator for &'a Graph<W> {
    type Item = &'a WghEdge<W>;
    type IntoIter = std::slice::Iter<'a, WghEdge<W>>;

    fn into_iter(self) -> Self::IntoIter { self.es.iter() }
}
