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

use std::collections::VecDeque;

use tracing::trace;

use crate::Vertex;
use crate::error::{check_vertex, Result};
use crate::graph::{Graph, Weight};

/// The set of discovered but not yet visited vertices.
pub trait Frontier: Default {
    fn push(&mut self, v: Vertex);
    fn pop(&mut self) -> Option<Vertex>;
}

/// Last in, first out: depth-first order.
#[derive(Default)]
pub struct Stack(Vec<Vertex>);

impl Frontier for Stack {
    #[inline(always)]
    fn push(&mut self, v: Vertex) { self.0.push(v); }

    #[inline(always)]
    fn pop(&mut self) -> Option<Vertex> { self.0.pop() }
}

/// First in, first out: breadth-first order.
#[derive(Default)]
pub struct Queue(VecDeque<Vertex>);

impl Frontier for Queue {
    #[inline(always)]
    fn push(&mut self, v: Vertex) { self.0.push_back(v); }

    #[inline(always)]
    fn pop(&mut self) -> Option<Vertex> { self.0.pop_front() }
}

// A vertex is marked when pushed, so it enters the frontier at most once.
fn traverse_from<W: Weight, F: Frontier>(
    g: &Graph<W>,
    start: Vertex,
    visited: &mut [bool],
    dest: &mut Vec<Vertex>,
) {
    let mut frontier = F::default();
    visited[start as usize] = true;
    frontier.push(start);

    while let Some(u) = frontier.pop() {
        dest.push(u);
        for v in g.out_neighbors(u) {
            if !visited[v as usize] {
                visited[v as usize] = true;
                frontier.push(v);
            }
        }
    }
}

/// Visits every vertex reachable from `start` and returns them in the order
/// they were taken off the frontier.
pub fn traverse<W: Weight, F: Frontier>(g: &Graph<W>, start: Vertex) -> Result<Vec<Vertex>> {
    check_vertex(start, g.size())?;
    let mut visited = vec![false; g.size()];
    let mut order = vec![];
    traverse_from::<W, F>(g, start, &mut visited, &mut order);
    trace!(start, visited = order.len(), "traversal finished");
    Ok(order)
}

/// Runs the traversal from every vertex not reached so far, in index order,
/// so that the result covers all `n` vertices.
pub fn traverse_forest<W: Weight, F: Frontier>(g: &Graph<W>) -> Vec<Vertex> {
    let n = g.size();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for s in 0..n {
        if !visited[s] {
            traverse_from::<W, F>(g, s as Vertex, &mut visited, &mut order);
        }
    }
    order
}

/// Iterative depth-first search. Neighbours are pushed in edge order and
/// therefore popped in reverse edge order.
pub fn dfs<W: Weight>(g: &Graph<W>, start: Vertex) -> Result<Vec<Vertex>> {
    traverse::<W, Stack>(g, start)
}

/// Breadth-first search; vertices come out in non-decreasing hop distance.
pub fn bfs<W: Weight>(g: &Graph<W>, start: Vertex) -> Result<Vec<Vertex>> {
    traverse::<W, Queue>(g, start)
}

pub fn dfs_forest<W: Weight>(g: &Graph<W>) -> Vec<Vertex> {
    traverse_forest::<W, Stack>(g)
}

pub fn bfs_forest<W: Weight>(g: &Graph<W>) -> Vec<Vertex> {
    traverse_forest::<W, Queue>(g)
}
