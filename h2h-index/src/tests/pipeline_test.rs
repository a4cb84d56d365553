use assertables::*;
use rand::SeedableRng;
use tracing_test::traced_test;

use super::*;
use crate::pipeline::{
    build_index,
    build_index_with_progress,
    report_graph,
    ReportOptions,
};

#[rstest]
fn test_path_stats(path4: Graph) {
    let stats = build_index(&path4).unwrap().stats();
    assert_eq!(stats.vertices, 4);
    assert_eq!(stats.bags, 4);
    assert_eq!(stats.roots, 1);
    assert_eq!(stats.fill_in, 0);
    assert_eq!(stats.tree_depth, 4);
    assert_eq!(stats.max_bag_size, 2);
    assert_eq!(stats.treewidth, 1);
    assert_eq!(stats.max_label_len, 4);
    assert_eq!(stats.label_entries, 10);

    let rendered = stats.to_string();
    assert_contains!(rendered, "treewidth 1");
    assert_contains!(rendered, "bags: 4 in 1 tree(s)");
}

#[rstest]
fn test_clique_treewidth(clique4: Graph) {
    let stats = build_index(&clique4).unwrap().stats();
    assert_eq!(stats.treewidth, 3);
    assert_eq!(stats.tree_depth, 4);
}

#[rstest]
fn test_empty_graph_builds_empty_index() {
    let build = build_index(&Graph::new()).unwrap();
    assert!(build.index.is_empty());
    assert_eq!(build.stats().treewidth, 0);
}

#[rstest]
fn test_progress_reports_every_step(petersen: Graph) {
    let mut steps = Vec::new();
    build_index_with_progress(&petersen, |step| steps.push(step)).unwrap();
    assert_eq!(steps, (1..=10).collect::<Vec<_>>());
}

#[rstest]
#[traced_test]
fn test_build_logs_summary(five_cycle: Graph) {
    build_index(&five_cycle).unwrap();
    assert!(logs_contain("built H2H index"));
}

#[rstest]
fn test_report_five_cycle(five_cycle: Graph) {
    let options = ReportOptions { start: Some(1), diameter_samples: 10, exact_samples: 5 };
    let mut rng = StdRng::seed_from_u64(9);
    let report = report_graph(&five_cycle, &options, &mut rng).unwrap();

    assert_eq!(report.bfs_size, 5);
    assert_eq!(report.diameter_bounds, Some((2, 4)));
    assert_eq!(report.double_sweep, 2);
    assert_eq!(report.sampled_diameter, Some(2));
}

#[rstest]
fn test_report_skips_disabled_estimates(split_graph: Graph) {
    let options = ReportOptions { start: None, diameter_samples: 0, exact_samples: 0 };
    let mut rng = StdRng::seed_from_u64(9);
    let report = report_graph(&split_graph, &options, &mut rng).unwrap();

    assert_eq!(report.bfs_size, 3);
    assert_eq!(report.diameter_bounds, None);
    assert_eq!(report.sampled_diameter, None);
    assert_le!(report.double_sweep, 1);
}
