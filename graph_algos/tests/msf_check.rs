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

use graph_algos::graph::{Graph, WghEdge};
use graph_algos::kruskal::kruskals;
use graph_algos::msf_check::{check_msf, CheckFailure};

fn e(u: u32, v: u32, w: i64) -> WghEdge { WghEdge::new(u, v, w) }

fn square() -> Graph {
    Graph::new(vec![e(0, 1, 1), e(1, 2, 2), e(2, 3, 3), e(0, 3, 10), e(1, 3, 3)], 4).unwrap()
}

#[test]
fn accepts_kruskal() {
    let g = square();
    let r = kruskals(&g).unwrap();
    assert_eq!(check_msf(&g, &r).unwrap(), Ok(()));
}

#[test]
fn accepts_reversed_edges_and_equal_weight_choice() {
    let g = square();
    let r = vec![e(1, 0, 1), e(2, 1, 2), e(1, 3, 3)];
    assert_eq!(check_msf(&g, &r).unwrap(), Ok(()));
}

#[test]
fn rejects_bad_results() {
    let g = square();
    assert_eq!(
        check_msf(&g, &[e(0, 1, 1)]).unwrap(),
        Err(CheckFailure::WrongEdgeCount { expected: 3, found: 1 })
    );
    assert_eq!(
        check_msf(&g, &[e(0, 1, 1), e(1, 2, 2), e(0, 2, 3)]).unwrap(),
        Err(CheckFailure::NotInGraph("0 2 3".into()))
    );
    assert_eq!(
        check_msf(&g, &[e(0, 1, 1), e(1, 0, 1), e(2, 3, 3)]).unwrap(),
        Err(CheckFailure::NotInGraph("1 0 1".into()))
    );
    assert_eq!(
        check_msf(&g, &[e(0, 1, 1), e(1, 2, 2), e(0, 3, 10)]).unwrap(),
        Err(CheckFailure::WrongWeight { expected: "6".into(), found: "13".into() })
    );

    let g = Graph::new(vec![e(0, 1, 1), e(1, 2, 1), e(2, 0, 1), e(2, 3, 5)], 4).unwrap();
    assert_eq!(
        check_msf(&g, &[e(0, 1, 1), e(1, 2, 1), e(2, 0, 1)]).unwrap(),
        Err(CheckFailure::Cycle("2 0 1".into()))
    );
}
