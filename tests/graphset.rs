//! Integration tests for digraph families.
//!
//! Most structural tests use a 6-vertex grid with 14 directed edges:
//!
//! ```text
//! 1 ⇄ 2 ⇄ 3
//! ⇅   ⇅   ⇅
//! 4 ⇄ 5 ⇄ 6
//! ```

use std::collections::HashMap;

use digraph_zdd::frontier::DegreeRange;
use digraph_zdd::graphset::{DiGraphSet, Family, Graph, Select, Session};
use digraph_zdd::universe::{Universe, Vertex};
use digraph_zdd::Error;
use num_bigint::BigUint;
use test_log::test;

const E1: (Vertex, Vertex) = (1, 2);
const E2: (Vertex, Vertex) = (1, 3);
const E3: (Vertex, Vertex) = (2, 4);
const E4: (Vertex, Vertex) = (3, 4);

/// The grid: forward edges first, then the reverse ones.
fn grid() -> Session {
    let universe = Universe::new([
        (1, 2),
        (1, 4),
        (2, 3),
        (2, 5),
        (3, 6),
        (4, 5),
        (5, 6),
        (2, 1),
        (4, 1),
        (3, 2),
        (5, 2),
        (6, 3),
        (5, 4),
        (6, 5),
    ])
    .unwrap();
    Session::new(universe)
}

/// Four weighted edges forming two routes from 1 to 4.
fn diamond() -> Session {
    let universe = Universe::new([(1, 2, 0.3), (1, 3, -0.2), (2, 4, -0.2), (3, 4, 0.4)]).unwrap();
    Session::new(universe)
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn all_vertices(range: DegreeRange) -> HashMap<Vertex, DegreeRange> {
    (1..=6).map(|v| (v, range)).collect()
}

fn sorted(set: &DiGraphSet) -> Vec<Graph> {
    let mut graphs: Vec<Graph> = set.iter().collect();
    graphs.sort();
    graphs
}

// ─── Constructors ───────────────────────────────────────────────────────────────

#[test]
fn graphs_is_powerset() {
    let s = grid();
    assert_eq!(s.graphs().len(), big(1 << 14));
    assert_eq!(s.empty().len(), big(0));
    assert!(s.empty().is_empty());
}

#[test]
fn graphs_with_fixed_edges() {
    let s = diamond();
    let gs = s.graphs_with(&[E1, E2], &[E3]).unwrap();
    assert_eq!(sorted(&gs), vec![vec![E1, E2], vec![E1, E2, E4]]);

    // Contradictory constraints.
    assert!(s.graphs_with(&[E1], &[E1]).unwrap().is_empty());

    assert!(matches!(s.graphs_with(&[E1], &[(4, 3)]), Err(Error::UnknownEdge(4, 3))));
}

#[test]
fn from_graphs_collects_members() {
    let s = diamond();
    let gs = s.from_graphs([vec![], vec![E1, E2], vec![E3, E1]]).unwrap();
    assert_eq!(gs.len(), big(3));
    assert!(gs.contains(&[]).unwrap());
    assert!(gs.contains(&[E1, E3]).unwrap());
    assert!(!gs.contains(&[E1]).unwrap());

    let unknown: Graph = vec![(1, 4)];
    assert!(matches!(s.from_graphs([unknown]), Err(Error::UnknownEdge(1, 4))));
}

#[test]
fn cycles() {
    let s = grid();
    let cycles = s.directed_cycles();
    assert_eq!(cycles.len(), big(13));
    assert!(cycles.contains(&[(2, 3), (3, 2)]).unwrap());
    assert!(!cycles.contains(&[(1, 2), (2, 5), (5, 4), (1, 4)]).unwrap());
    assert!(cycles.contains(&[(1, 2), (2, 5), (5, 4), (4, 1)]).unwrap());

    let ham = s.directed_hamiltonian_cycles();
    assert_eq!(ham.len(), big(2));
    assert!(ham.is_proper_subset(&cycles));
    for g in &ham {
        assert_eq!(g.len(), 6);
    }
}

#[test]
fn st_paths() {
    let s = grid();
    let paths = s.directed_st_paths(1, 6, false).unwrap();
    assert_eq!(paths.len(), big(4));
    assert!(paths.contains(&[(1, 2), (2, 3), (3, 6)]).unwrap());
    assert!(paths.contains(&[(1, 4), (4, 5), (5, 6)]).unwrap());

    let s_to_t = s.directed_st_paths(1, 6, true).unwrap();
    assert_eq!(sorted(&s_to_t), vec![vec![(1, 4), (2, 3), (3, 6), (4, 5), (5, 2)]]);

    let t_to_s = s.directed_st_paths(6, 1, true).unwrap();
    assert_eq!(sorted(&t_to_s), vec![vec![(2, 5), (4, 1), (3, 2), (6, 3), (5, 4)]]);

    assert!(s.directed_st_paths(3, 3, false).unwrap().is_empty());
}

#[test]
fn hamiltonian_paths_are_paths() {
    let s = grid();
    for a in 1..=6 {
        for b in 1..=6 {
            let paths = s.directed_st_paths(a, b, false).unwrap();
            let ham = s.directed_st_paths(a, b, true).unwrap();
            assert!(ham.is_subset(&paths), "paths {} -> {}", a, b);
        }
    }
}

#[test]
fn rooted_forests() {
    let s = grid();
    let forests = s.rooted_forests(None, false).unwrap();
    assert_eq!(forests.len(), big(576));
    assert!(forests.contains(&[]).unwrap());
    assert!(forests.contains(&[(1, 2), (2, 3)]).unwrap());
    assert!(!forests.contains(&[(2, 1), (4, 1)]).unwrap());

    let three = s.rooted_forests(Some(&[1, 2, 3]), false).unwrap();
    assert_eq!(sorted(&three), vec![vec![(1, 4), (2, 5), (3, 6)]]);

    assert_eq!(s.rooted_forests(Some(&[1, 4]), false).unwrap().len(), big(6));
    assert_eq!(s.rooted_forests(Some(&[1, 4]), true).unwrap().len(), big(3));

    let from_2 = s.rooted_forests(Some(&[2]), false).unwrap();
    assert!(from_2.contains(&[(2, 1), (1, 4), (4, 5), (5, 6), (6, 3)]).unwrap());
    assert!(!from_2.contains(&[(3, 6), (6, 5), (5, 4)]).unwrap());

    assert!(s.rooted_forests(Some(&[]), false).unwrap().is_empty());
}

#[test]
fn rooted_trees() {
    let s = grid();
    let trees = s.rooted_trees(1, true).unwrap();
    assert_eq!(trees.len(), big(15));
    for g in &trees {
        assert_eq!(g.len(), 5);
    }

    for root in 1..=6 {
        let trees = s.rooted_trees(root, true).unwrap();
        let forests = s.rooted_forests(Some(&[root]), true).unwrap();
        assert_eq!(trees, forests);
    }
}

#[test]
fn rooted_trees_not_spanning() {
    let s = grid();
    let trees = s.rooted_trees(1, false).unwrap();
    assert_eq!(trees.len(), big(44));
    assert!(trees.contains(&[(1, 2)]).unwrap());
    assert!(trees.contains(&[(1, 2), (1, 4), (4, 5)]).unwrap());
    // The root has no parent.
    assert!(!trees.contains(&[(4, 1)]).unwrap());
    // Not attached to the root.
    assert!(!trees.contains(&[(2, 3)]).unwrap());
    assert!(!trees.contains(&[(1, 2), (2, 5), (5, 4), (4, 1)]).unwrap());
    assert!(trees.is_superset(&s.rooted_trees(1, true).unwrap()));
}

#[test]
fn degree_constraints() {
    let s = grid();
    let one = all_vertices(DegreeRange::exactly(1));
    let some = all_vertices(DegreeRange::new(1, 3));

    assert_eq!(s.degree_constrained(one.clone(), one.clone()).unwrap().len(), big(9));
    assert_eq!(
        s.degree_constrained(all_vertices(DegreeRange::new(0, 3)), HashMap::new())
            .unwrap()
            .len(),
        big(1 << 14)
    );

    assert_eq!(s.degree_constrained(one.clone(), HashMap::new()).unwrap().len(), big(16 * 9));
    assert_eq!(s.degree_constrained(some.clone(), HashMap::new()).unwrap().len(), big(81 * 49));
    assert_eq!(s.degree_constrained(HashMap::new(), one).unwrap().len(), big(16 * 9));
    assert_eq!(s.degree_constrained(HashMap::new(), some).unwrap().len(), big(81 * 49));
}

#[test]
fn degree_constraints_contain_trees() {
    let s = grid();
    let mut indeg = all_vertices(DegreeRange::exactly(1));
    indeg.insert(1, DegreeRange::exactly(0));
    let dc = s.degree_constrained(indeg, HashMap::new()).unwrap();
    let trees = s.rooted_trees(1, true).unwrap();
    assert!(trees.is_subset(&dc));
}

#[test]
fn build_within_search_space() {
    let s = grid();
    let small = s.graphs().smaller(3);
    let cycles = s.build(&Family::Cycles { hamiltonian: false }, Some(&small)).unwrap();
    assert_eq!(cycles.len(), big(7));
    assert_eq!(cycles, s.directed_cycles().smaller(3));

    let everything = s.build(&Family::Graphs, None).unwrap();
    assert_eq!(everything, s.graphs());
}

#[test]
fn unknown_vertices() {
    let s = grid();
    assert!(matches!(s.rooted_trees(7, false), Err(Error::UnknownVertex(7))));
    assert!(matches!(s.directed_st_paths(1, 9, false), Err(Error::UnknownVertex(9))));
    assert!(matches!(
        s.degree_constrained(HashMap::from([(0, DegreeRange::exactly(1))]), HashMap::new()),
        Err(Error::UnknownVertex(0))
    ));
}

// ─── Algebra ────────────────────────────────────────────────────────────────────

#[test]
fn set_operations() {
    let s = diamond();
    let a = s.from_graphs([vec![], vec![E1], vec![E1, E2]]).unwrap();
    let b = s.from_graphs([vec![E1], vec![E3]]).unwrap();

    assert_eq!((&a | &b).len(), big(4));
    assert_eq!(sorted(&(&a & &b)), vec![vec![E1]]);
    assert_eq!(sorted(&(&a - &b)), vec![vec![], vec![E1, E2]]);
    assert_eq!(sorted(&(&a ^ &b)), vec![vec![], vec![E1, E2], vec![E3]]);

    assert_eq!(&a | &b, &b | &a);
    assert_eq!(&a & &a, a);
    assert!((&a - &a).is_empty());

    // De Morgan.
    assert_eq!(!&(&a | &b), &!&a & &!&b);
}

#[test]
fn join_and_meet() {
    let s = diamond();
    let a = s.from_graphs([vec![], vec![E1], vec![E1, E2]]).unwrap();
    let b = s.from_graphs([vec![E1], vec![E3]]).unwrap();

    assert_eq!(
        sorted(&a.join(&b)),
        vec![vec![E1], vec![E1, E2], vec![E1, E2, E3], vec![E1, E3], vec![E3]]
    );
    assert_eq!(sorted(&a.meet(&b)), vec![vec![], vec![E1]]);
}

#[test]
fn division() {
    let s = diamond();
    let f = s.from_graphs([vec![E1, E2], vec![E1, E3], vec![E2]]).unwrap();
    let d = s.from_graphs([vec![E1]]).unwrap();

    let q = f.quotient(&d).unwrap();
    assert_eq!(sorted(&q), vec![vec![E2], vec![E3]]);
    let r = f.remainder(&d).unwrap();
    assert_eq!(sorted(&r), vec![vec![E2]]);
    assert_eq!(r, &f - &d.join(&q));
    assert!(d.join(&q).is_subset(&f));

    assert!(matches!(f.quotient(&s.empty()), Err(Error::EmptyDivisor)));
    assert!(matches!(f.remainder(&s.empty()), Err(Error::EmptyDivisor)));
}

#[test]
fn complement_and_flip_all() {
    let s = diamond();
    let a = s.from_graphs([vec![], vec![E1], vec![E1, E2]]).unwrap();

    assert_eq!(a.complement().len(), big(13));
    assert_eq!(a.complement().complement(), a);
    assert!(a.is_disjoint(&a.complement()));

    let one = s.from_graphs([vec![E1]]).unwrap();
    assert_eq!(sorted(&one.flip_all()), vec![vec![E2, E3, E4]]);
    assert_eq!(a.flip_all().flip_all(), a);
}

#[test]
fn minimal_maximal_blocking() {
    let s = diamond();
    let f = s.from_graphs([vec![E1], vec![E1, E2], vec![E3, E4], vec![E3]]).unwrap();
    assert_eq!(sorted(&f.minimal()), vec![vec![E1], vec![E3]]);
    assert_eq!(sorted(&f.maximal()), vec![vec![E1, E2], vec![E3, E4]]);

    let g = s.from_graphs([vec![E1, E2], vec![E3]]).unwrap();
    let blocking = g.blocking();
    assert_eq!(blocking.len(), big(6));
    assert_eq!(sorted(&blocking.minimal()), vec![vec![E1, E3], vec![E2, E3]]);
}

#[test]
fn size_filters() {
    let s = grid();
    let cycles = s.directed_cycles();
    assert_eq!(cycles.smaller(3).len(), big(7));
    assert_eq!(cycles.larger(3).len(), big(6));
    assert_eq!(cycles.graph_size(4).len(), big(4));
    assert_eq!(cycles.graph_size(6), s.directed_hamiltonian_cycles());
    assert!(cycles.graph_size(3).is_empty());
}

#[test]
fn canonical_results() {
    let s = grid();
    let a = s.directed_cycles();
    let b = s.directed_st_paths(1, 6, false).unwrap();
    let c = s.rooted_trees(2, false).unwrap();

    let ab = &a | &b;
    let left = &ab | &c;
    let right = &a | &(&b | &c);
    assert_eq!(left, right);
    assert_eq!(left.id(), right.id());
}

// ─── Filters ────────────────────────────────────────────────────────────────────

#[test]
fn including_and_excluding() {
    let s = diamond();
    let all = s.graphs();
    let f = s.from_graphs([vec![E1], vec![E2]]).unwrap();

    assert_eq!(all.including(Select::Edge(1, 2)).unwrap().len(), big(8));
    assert_eq!(all.excluding(Select::Edge(1, 2)).unwrap().len(), big(8));
    assert_eq!(all.including(Select::Vertex(1)).unwrap().len(), big(12));
    assert_eq!(all.excluding(Select::Vertex(1)).unwrap().len(), big(4));
    assert_eq!(all.including(Select::Graph(&[E1, E2])).unwrap().len(), big(4));
    assert_eq!(all.excluding(Select::Graph(&[E1, E2])).unwrap().len(), big(12));
    assert_eq!(all.including(Select::Family(&f)).unwrap().len(), big(12));
    assert_eq!(all.excluding(Select::Family(&f)).unwrap().len(), big(4));

    assert!(matches!(all.including(Select::Edge(2, 1)), Err(Error::UnknownEdge(2, 1))));
    assert!(matches!(all.excluding(Select::Vertex(5)), Err(Error::UnknownVertex(5))));
}

#[test]
fn included() {
    let s = diamond();
    let all = s.graphs();
    let f = s.from_graphs([vec![E1], vec![E2]]).unwrap();

    assert_eq!(sorted(&all.included(Select::Edge(1, 2)).unwrap()), vec![vec![], vec![E1]]);
    assert_eq!(all.included(Select::Vertex(4)).unwrap().len(), big(4));
    assert_eq!(all.included(Select::Graph(&[E1, E2])).unwrap().len(), big(4));
    assert_eq!(sorted(&all.included(Select::Family(&f)).unwrap()), vec![vec![], vec![E1], vec![E2]]);
}

#[test]
fn sub_and_supergraphs() {
    let s = diamond();
    let all = s.graphs();
    let f = s.from_graphs([vec![E1], vec![E2]]).unwrap();

    assert_eq!(all.subgraphs(&f).len(), big(3));
    assert_eq!(all.supergraphs(&f).len(), big(12));
    assert_eq!(all.non_subgraphs(&f).len(), big(13));
    assert_eq!(all.non_supergraphs(&f).len(), big(4));
}

#[test]
fn filters_on_cycles() {
    let s = grid();
    let cycles = s.directed_cycles();
    assert_eq!(cycles.including(Select::Vertex(1)).unwrap().len(), big(6));
    assert_eq!(cycles.including(Select::Edge(2, 3)).unwrap().len(), big(3));
    assert!(cycles.contains_vertex(1).unwrap());
    assert!(cycles.contains_edge(6, 5).unwrap());
    assert!(!s.empty().contains_edge(6, 5).unwrap());
}

#[test]
fn comparisons() {
    let s = grid();
    let cycles = s.directed_cycles();
    let ham = s.directed_hamiltonian_cycles();
    let paths = s.directed_st_paths(1, 6, false).unwrap();

    assert!(ham.is_subset(&cycles));
    assert!(cycles.is_superset(&ham));
    assert!(cycles.is_proper_superset(&ham));
    assert!(!cycles.is_proper_subset(&cycles));
    assert!(cycles.is_disjoint(&paths));
    assert!(!cycles.is_disjoint(&ham));
}

// ─── Modifiers ──────────────────────────────────────────────────────────────────

#[test]
fn add_and_remove() {
    let s = diamond();
    let mut gs = s.from_graphs([vec![], vec![E1]]).unwrap();
    let before = gs.clone();

    gs.add(&[E2]).unwrap();
    assert_eq!(gs.len(), big(3));
    assert_eq!(before.len(), big(2));

    gs.remove(&[E2]).unwrap();
    assert_eq!(gs, before);
    assert!(matches!(gs.remove(&[E2]), Err(Error::NotFound)));
    gs.discard(&[E2]).unwrap();
    assert_eq!(gs, before);

    assert!(matches!(gs.add(&[(4, 1)]), Err(Error::UnknownEdge(4, 1))));
    assert_eq!(gs, before);
}

#[test]
fn edge_modifiers() {
    let s = diamond();
    let mut gs = s.from_graphs([vec![], vec![E1], vec![E2]]).unwrap();

    gs.add_edge(2, 4).unwrap();
    assert_eq!(sorted(&gs), vec![vec![E1, E3], vec![E2, E3], vec![E3]]);

    gs.remove_edge(2, 4).unwrap();
    assert_eq!(sorted(&gs), vec![vec![], vec![E1], vec![E2]]);

    assert!(matches!(gs.remove_edge(3, 4), Err(Error::NotFound)));
    gs.discard_edge(3, 4).unwrap();
    assert_eq!(gs.len(), big(3));

    gs.flip(1, 2).unwrap();
    assert_eq!(sorted(&gs), vec![vec![], vec![E1], vec![E1, E2]]);
}

#[test]
fn pop_and_clear() {
    let s = grid();
    let mut cycles = s.directed_cycles();
    let all = cycles.clone();

    let choice = cycles.choice().unwrap();
    assert!(all.contains(&choice).unwrap());

    let popped = cycles.pop().unwrap();
    assert_eq!(cycles.len(), big(12));
    assert!(!cycles.contains(&popped).unwrap());
    assert!(all.contains(&popped).unwrap());

    cycles.clear();
    assert!(cycles.is_empty());
    assert!(matches!(cycles.pop(), Err(Error::EmptyFamily)));
    assert!(matches!(cycles.choice(), Err(Error::EmptyFamily)));
    assert_eq!(all.len(), big(13));
}

// ─── Traversal ──────────────────────────────────────────────────────────────────

#[test]
fn iteration_matches_len() {
    let s = grid();
    let cycles = s.directed_cycles();
    let members = sorted(&cycles);
    assert_eq!(members.len(), 13);
    for g in &members {
        assert!(cycles.contains(g).unwrap());
    }
}

#[test]
fn weighted_iteration() {
    let s = diamond();
    let all = s.graphs();

    let mut max = all.max_iter(None).unwrap();
    let (first, w) = max.next_weighted().unwrap();
    assert_eq!(first, vec![E1, E4]);
    assert!((w - 0.7).abs() < 1e-9);
    // Equal weights: the member with the earlier edge comes first.
    let (second, w) = max.next_weighted().unwrap();
    assert_eq!(second, vec![E1, E2, E4]);
    assert!((w - 0.5).abs() < 1e-9);
    let (third, _) = max.next_weighted().unwrap();
    assert_eq!(third, vec![E1, E3, E4]);

    let mut min = all.min_iter(None).unwrap();
    let (first, w) = min.next_weighted().unwrap();
    assert_eq!(first, vec![E2, E3]);
    assert!((w + 0.4).abs() < 1e-9);
    let (second, w) = min.next_weighted().unwrap();
    assert_eq!(second, vec![E2]);
    assert!((w + 0.2).abs() < 1e-9);
    let (third, _) = min.next_weighted().unwrap();
    assert_eq!(third, vec![E3]);

    let w = HashMap::from([(E1, 0.3), (E2, -0.2), (E3, -0.2), (E4, 0.4)]);
    let weights: Vec<f64> = all
        .max_iter(None)
        .unwrap()
        .map(|g| g.iter().map(|e| w[e]).sum())
        .collect();
    assert_eq!(weights.len(), 16);
    assert!(weights.windows(2).all(|w| w[0] >= w[1] - 1e-9));
}

#[test]
fn weighted_iteration_with_overrides() {
    let s = diamond();
    let gs = s.from_graphs([vec![], vec![E1, E2], vec![E1, E3]]).unwrap();

    let weights = HashMap::from([(E2, 5.0)]);
    let order: Vec<Graph> = gs.max_iter(Some(&weights)).unwrap().collect();
    assert_eq!(order, vec![vec![E1, E2], vec![E1, E3], vec![]]);

    let order: Vec<Graph> = gs.min_iter(Some(&weights)).unwrap().collect();
    assert_eq!(order, vec![vec![], vec![E1, E3], vec![E1, E2]]);

    let unknown = HashMap::from([((9, 9), 1.0)]);
    assert!(matches!(gs.max_iter(Some(&unknown)), Err(Error::UnknownEdge(9, 9))));
}

#[test]
fn weighted_ties_prefer_earlier_edges() {
    let s = grid();
    let weights: HashMap<_, _> = s.universe().edges().iter().map(|e| (e.key(), 1.0)).collect();
    let cycles = s.directed_cycles();
    let order: Vec<Graph> = cycles.max_iter(Some(&weights)).unwrap().collect();
    assert_eq!(order.len(), 13);
    assert_eq!(order[0], vec![(1, 2), (2, 3), (3, 6), (4, 1), (5, 4), (6, 5)]);
    assert!(order.windows(2).all(|w| w[0].len() >= w[1].len()));
}

#[test]
fn random_iteration() {
    let s = grid();
    let cycles = s.directed_cycles();

    let mut drawn: Vec<Graph> = cycles.rand_iter(Some(42)).collect();
    assert_eq!(drawn.len(), 13);
    drawn.sort();
    assert_eq!(drawn, sorted(&cycles));

    let a: Vec<Graph> = cycles.rand_iter(Some(1)).collect();
    let b: Vec<Graph> = cycles.rand_iter(Some(1)).collect();
    assert_eq!(a, b);

    assert_eq!(s.empty().rand_iter(None).count(), 0);
    assert_eq!(cycles.len(), big(13));
}

#[test]
fn probability() {
    let s = diamond();
    assert!((s.graphs().probability(|_| 0.3) - 1.0).abs() < 1e-12);

    let empty_graph = s.from_graphs([Vec::<(Vertex, Vertex)>::new()]).unwrap();
    assert!((empty_graph.probability(|_| 0.5) - 0.0625).abs() < 1e-12);

    let with_e1 = s.graphs().including(Select::Edge(1, 2)).unwrap();
    let p = with_e1.probability(|e| if e.key() == E1 { 0.9 } else { 0.1 });
    assert!((p - 0.9).abs() < 1e-12);
}

#[test]
fn display() {
    let s = diamond();
    let gs = s.from_graphs([vec![], vec![E1, E2], vec![E1, E3]]).unwrap();
    assert_eq!(gs.to_string(), "DiGraphSet([[], [(1, 2), (1, 3)], [(1, 2), (2, 4)]])");
    assert_eq!(
        s.graphs().to_string(),
        "DiGraphSet([[], [(1, 2)], [(1, 3)], [(2, 4)], [(3, 4)], [(1, 2), (1, 3)], [( ..."
    );
}

// ─── Serialization ──────────────────────────────────────────────────────────────

#[test]
fn dump_and_load() {
    let s = grid();
    let cycles = s.directed_cycles();
    let text = cycles.dump();
    assert_eq!(s.load(&text).unwrap(), cycles);

    let fresh = grid();
    let loaded = fresh.load(&text).unwrap();
    assert_eq!(loaded.len(), big(13));
    assert_eq!(loaded, fresh.directed_cycles());

    assert_eq!(s.empty().dump(), "B\n.\n");
    assert_eq!(s.load("T\n.\n").unwrap(), s.from_graphs([Vec::<(Vertex, Vertex)>::new()]).unwrap());
    assert!(matches!(s.load("1\n1 15 B T\n.\n"), Err(Error::Malformed(_))));
    assert!(matches!(s.load("18446744073709551615\n1 1 B T\n.\n"), Err(Error::Parse(_))));
}

#[test]
fn save_and_load_file() {
    let s = grid();
    let trees = s.rooted_trees(1, true).unwrap();
    let path = std::env::temp_dir().join(format!("digraph-zdd-trees-{}.txt", std::process::id()));
    trees.save(&path).unwrap();
    assert_eq!(s.load_file(&path).unwrap(), trees);
    std::fs::remove_file(&path).unwrap();
}
