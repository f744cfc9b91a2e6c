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
use graph_algos::union_find::DisjointSet;

fn hash64_cheap(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

#[test]
fn singletons() {
    let mut ds = DisjointSet::new(5).unwrap();
    assert_eq!(ds.num_sets(), 5);
    for x in 0..5 { assert_eq!(ds.find_set(x).unwrap(), x); }
}

#[test]
fn empty_is_rejected() {
    assert!(matches!(DisjointSet::new(0), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn out_of_range() {
    let mut ds = DisjointSet::new(3).unwrap();
    assert!(matches!(
        ds.find_set(3),
        Err(GraphError::VertexOutOfRange { vertex: 3, n: 3 })
    ));
    assert!(ds.union_sets(0, 7).is_err());
}

#[test]
fn transitive_union() {
    let mut ds = DisjointSet::new(3).unwrap();
    ds.union_sets(0, 1).unwrap();
    ds.union_sets(1, 2).unwrap();
    assert_eq!(ds.find_set(0).unwrap(), ds.find_set(2).unwrap());
    assert_eq!(ds.num_sets(), 1);
}

#[test]
fn second_root_goes_under_first() {
    let mut ds = DisjointSet::new(4).unwrap();
    ds.union_sets(2, 3).unwrap();
    assert_eq!(ds.find_set(3).unwrap(), 2);
    ds.union_sets(0, 3).unwrap();
    assert_eq!(ds.find_set(2).unwrap(), 0);
    assert_eq!(ds.find_set(3).unwrap(), 0);
}

#[test]
fn union_within_a_set_is_a_noop() {
    let mut ds = DisjointSet::new(4).unwrap();
    ds.union_sets(0, 1).unwrap();
    let root = ds.find_set(1).unwrap();
    ds.union_sets(1, 0).unwrap();
    assert_eq!(ds.find_set(0).unwrap(), root);
    assert_eq!(ds.find_set(1).unwrap(), root);
    assert_eq!(ds.num_sets(), 3);
}

#[test]
fn find_compresses_path() {
    // builds the chain 4 -> 3 -> 2 -> 1 -> 0
    let mut ds = DisjointSet::new(5).unwrap();
    for x in (0..4).rev() { ds.union_sets(x, x + 1).unwrap(); }
    assert_eq!(ds.parents(), &[0, 0, 1, 2, 3]);

    assert_eq!(ds.find_set(4).unwrap(), 0);
    assert_eq!(ds.parents(), &[0, 0, 0, 0, 0]);
}

#[test]
fn find_is_idempotent() {
    let mut ds = DisjointSet::new(6).unwrap();
    for x in (0..5).rev() { ds.union_sets(x, x + 1).unwrap(); }
    let sets = ds.num_sets();
    for x in 0..6 {
        let r = ds.find_set(x).unwrap();
        assert_eq!(ds.find_set(x).unwrap(), r);
        assert_eq!(ds.num_sets(), sets);
    }
}

#[test]
fn matches_naive_labels() {
    let n = 64;
    for seed in 0..20u64 {
        let mut ds = DisjointSet::new(n).unwrap();
        let mut label: Vec<usize> = (0..n).collect();

        for i in 0..40u64 {
            let h = hash64_cheap(seed * 1000 + i);
            let (x, y) = ((h % n as u64) as usize, ((h >> 32) % n as u64) as usize);
            ds.union_sets(x as u32, y as u32).unwrap();
            let (lx, ly) = (label[x], label[y]);
            label.iter_mut().filter(|l| **l == ly).for_each(|l| *l = lx);
        }

        for x in 0..n {
            for y in 0..n {
                assert_eq!(
                    ds.same_set(x as u32, y as u32).unwrap(),
                    label[x] == label[y],
                );
            }
        }
    }
}
