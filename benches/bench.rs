use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Without automatic
/// balancing this degenerates into a right-leaning chain.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) as i32 {
        let _ = tree.insert(x);
    }

    tree
}

/// Builds a tree through the balanced constructor, so lookups cost
/// `O(lg N)` instead of `O(N)`.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    Tree::from_keys((0..num_nodes_in_full_tree(num_levels) as i32).collect())
}

/// Helper to bench a read-only function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_reads(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11, 15] {
        // Test unbalanced and balanced trees.
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape.to_string(), largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, black_box(largest_element_in_tree));
                })
            });
        }
    }

    group.finish();
}

/// Helper to bench a mutating function on a BST. Each iteration gets its own
/// clone of the prepared tree; only the closure itself is timed.
fn bench_mutations(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape.to_string(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_reads(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_reads(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_reads(c, "is-balanced", |tree, _| {
        let _balanced = black_box(tree.is_balanced());
    });

    bench_mutations(c, "insert", |tree, i| {
        let _ = tree.insert(i + 1);
    });
    bench_mutations(c, "delete", |tree, i| {
        let _ = tree.delete(&i);
    });
    bench_mutations(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
