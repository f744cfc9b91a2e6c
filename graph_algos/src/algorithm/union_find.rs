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

use tracing::trace;

use crate::DefInt;
use crate::error::{check_vertex, GraphError, Result};

/// A partition of `0..n` into disjoint sets, stored as one parent index per
/// element. An element is a root iff it is its own parent.
///
/// Unions always hang the second root under the first; there is no rank or
/// size heuristic, so lookups rely on path compression in `find_set`.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<DefInt>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::InvalidArgument(
                "a disjoint set needs at least one element".into()
            ));
        }
        if n > DefInt::MAX as usize {
            return Err(GraphError::InvalidArgument(
                format!("{n} elements do not fit the vertex type")
            ));
        }
        let mut ds = Self { parents: Vec::with_capacity(n) };
        (0..n as DefInt).for_each(|x| ds.parents.push(x));
        Ok(ds)
    }

    pub fn len(&self) -> usize { self.parents.len() }

    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    #[inline(always)]
    fn is_root(&self, u: DefInt) -> bool {
        self.parents[u as usize] == u
    }

    /// Returns the root of `x`'s set and points every element on the way
    /// directly at it.
    pub fn find_set(&mut self, x: DefInt) -> Result<DefInt> {
        check_vertex(x, self.len())?;
        Ok(self.find(x))
    }

    /// `find_set` without the range check; `x` must be in range.
    pub(crate) fn find(&mut self, x: DefInt) -> DefInt {
        let mut root = x;
        while !self.is_root(root) {
            root = self.parents[root as usize];
        }

        let mut u = x;
        while u != root {
            let p = self.parents[u as usize];
            self.parents[u as usize] = root;
            u = p;
        }
        root
    }

    /// Merges the sets of `x` and `y`; `y`'s root ends up under `x`'s root.
    pub fn union_sets(&mut self, x: DefInt, y: DefInt) -> Result<()> {
        let x_root = self.find_set(x)?;
        let y_root = self.find_set(y)?;
        self.link(y_root, x_root);
        Ok(())
    }

    /// Hangs root `u` under `v`.
    #[inline(always)]
    pub(crate) fn link(&mut self, u: DefInt, v: DefInt) {
        trace!(u, v, "link");
        self.parents[u as usize] = v;
    }

    pub fn same_set(&mut self, x: DefInt, y: DefInt) -> Result<bool> {
        Ok(self.find_set(x)? == self.find_set(y)?)
    }

    /// The number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        (0..self.len() as DefInt).filter(|&u| self.is_root(u)).count()
    }

    /// The raw parent pointers.
    pub fn parents(&self) -> &[DefInt] { &self.parents }
}
