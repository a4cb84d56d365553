use h2h_core::IndexError;
use rand::SeedableRng;

use super::*;
use crate::elimination::{
    eliminate,
    Bag,
    Elimination,
    Eliminator,
};
use crate::tree::EliminationTree;

#[rstest]
fn test_path_is_a_chain(path4: Graph) {
    let tree = EliminationTree::build(&eliminate(&path4).unwrap()).unwrap();
    assert_eq!(tree.parent(1), Some(2));
    assert_eq!(tree.parent(2), Some(3));
    assert_eq!(tree.parent(3), Some(4));
    assert_eq!(tree.parent(4), None);
    assert_eq!(tree.roots(), &[4]);
    assert_eq!(tree.depth(1), Some(4));
    assert_eq!(tree.depth(4), Some(1));
}

#[rstest]
fn test_star_leaves_first_hangs_off_center(star: Graph) {
    let elimination = Eliminator::new(&star, [1, 2, 3, 4, 5, 0].into_iter()).finish().unwrap();
    let tree = EliminationTree::build(&elimination).unwrap();

    assert_eq!(tree.roots(), &[0]);
    for leaf in 1..=5 {
        assert_eq!(tree.parent(leaf), Some(0));
        assert_eq!(tree.depth(leaf), Some(2));
    }
}

#[rstest]
fn test_star_min_degree_forest(star: Graph) {
    let tree = EliminationTree::build(&eliminate(&star).unwrap()).unwrap();
    assert_eq!(tree.roots(), &[5]);
    assert_eq!(tree.parent(0), Some(5));
    assert_eq!(tree.depth(3), Some(3));
}

#[rstest]
fn test_disconnected_graph_is_a_forest(split_graph: Graph) {
    let tree = EliminationTree::build(&eliminate(&split_graph).unwrap()).unwrap();
    assert_eq!(tree.roots().len(), 2);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.depth(99), None);
}

#[rstest]
fn test_parent_is_eliminated_later() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..25 {
        let n = rng.gen_range(1..25);
        let graph = random_graph(&mut rng, n, 0.2);
        let elimination = eliminate(&graph).unwrap();
        let tree = EliminationTree::build(&elimination).unwrap();

        for v in graph.vertices() {
            let bag = elimination.bag(v).unwrap();
            match tree.parent(v) {
                Some(p) => {
                    assert!(bag.neighbors().contains(&p));
                    assert!(elimination.phi(p) > elimination.phi(v));
                },
                None => {
                    assert_eq!(bag.len(), 1);
                    assert!(tree.roots().contains(&v));
                },
            }
            let depth = tree.depth(v).unwrap();
            assert!(depth <= graph.vertex_count());
        }
    }
}

#[rstest]
fn test_to_dot_has_one_edge_per_child(five_cycle: Graph) {
    let tree = EliminationTree::build(&eliminate(&five_cycle).unwrap()).unwrap();
    let dot = tree.to_dot();
    assert!(dot.starts_with("digraph"));
    assert_eq!(dot.matches("->").count(), 4);
}

#[rstest]
fn test_member_without_bag_is_missing_ancestor() {
    let partial = Elimination::from_bags(vec![Bag { center: 1, members: vec![1, 2], lambda: vec![0, 1] }]);
    let err = EliminationTree::build(&partial).unwrap_err();
    assert!(matches!(err, IndexError::MissingAncestor { vertex: 1, parent: 2 }));
}
