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

use graph_algos::GraphError;
use graph_algos::graph::{Graph, WghEdge, PAR_THRESHOLD};

fn e(u: u32, v: u32, w: i64) -> WghEdge { WghEdge::new(u, v, w) }

#[test]
fn rejects_out_of_range_endpoint() {
    let r = Graph::new(vec![e(0, 1, 1), e(1, 4, 2)], 3);
    assert!(matches!(r, Err(GraphError::VertexOutOfRange { vertex: 4, n: 3 })));
}

#[test]
fn keeps_loops_and_parallel_edges() {
    let g = Graph::new(vec![e(0, 0, 1), e(0, 1, 2), e(0, 1, 2)], 2).unwrap();
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.size(), 2);
    assert_eq!(g.edges_from(0).unwrap(), vec![0, 1, 1]);
}

#[test]
fn sort_edges_copies() {
    let g = Graph::new(vec![e(0, 1, 3), e(1, 2, 1), e(2, 0, 2)], 3).unwrap();
    let s = g.sort_edges();
    assert_eq!(s.edges(), &[e(1, 2, 1), e(2, 0, 2), e(0, 1, 3)]);
    assert_eq!(g.edges(), &[e(0, 1, 3), e(1, 2, 1), e(2, 0, 2)]);
    assert_eq!(s.size(), 3);
}

#[test]
fn sort_edges_keeps_ties_in_order() {
    let g = Graph::new(vec![e(0, 1, 5), e(1, 2, 1), e(2, 0, 5), e(0, 2, 1)], 3).unwrap();
    let s = g.sort_edges();
    assert_eq!(s.edges(), &[e(1, 2, 1), e(0, 2, 1), e(0, 1, 5), e(2, 0, 5)]);
}

#[test]
fn parallel_sort_matches_sequential() {
    let n = 1000u32;
    let m = PAR_THRESHOLD + 777;
    let es: Vec<WghEdge> = (0..m as u64)
        .map(|i| {
            let h = i.wrapping_mul(0x9e3779b97f4a7c15);
            e((h % n as u64) as u32, ((h >> 20) % n as u64) as u32, ((h >> 40) % 97) as i64)
        })
        .collect();
    let g = Graph::new(es.clone(), n as usize).unwrap();

    let mut expected = es;
    expected.sort_by_key(|e| e.w);
    assert_eq!(g.sort_edges().edges(), &expected[..]);
}

#[test]
fn edges_from_is_directed() {
    let g = Graph::new(vec![e(0, 1, 1), e(2, 0, 1), e(0, 3, 1)], 4).unwrap();
    assert_eq!(g.edges_from(0).unwrap(), vec![1, 3]);
    assert_eq!(g.edges_from(1).unwrap(), Vec::<u32>::new());
    assert!(g.edges_from(4).is_err());
}

#[test]
fn symmetrized_adds_reverse_edges() {
    let g = Graph::new(vec![e(0, 1, 1), e(2, 2, 4), e(2, 0, 3)], 3).unwrap();
    let s = g.symmetrized();
    assert_eq!(s.edges(), &[e(0, 1, 1), e(2, 2, 4), e(2, 0, 3), e(1, 0, 1), e(0, 2, 3)]);
    assert_eq!(s.edges_from(0).unwrap(), vec![1, 2]);
}

#[test]
fn parse_edge() {
    assert_eq!(" 3  4 -7 ".parse::<WghEdge>().unwrap(), e(3, 4, -7));
    assert!("3 4".parse::<WghEdge>().is_err());
    assert!("3 x 1".parse::<WghEdge>().is_err());
    assert_eq!(e(1, 2, 3).to_string(), "1 2 3");
}
