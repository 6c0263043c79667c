//! Column assignment for simultaneous timed instances in a time grid.

use itertools::Itertools;

use super::models::{EventInstance, LayoutInstance};

/// Assign every timed instance a column so that no two instances in the
/// same column overlap, then size each instance by the widest column of
/// its overlap cluster.
///
/// Instances are placed in start order (stable for equal starts) into
/// the leftmost column that has room. The output is in that same order.
/// All-day instances do not belong here.
pub fn layout<'a>(instances: &[EventInstance<'a>]) -> Vec<LayoutInstance<'a>> {
    let sorted: Vec<&EventInstance<'a>> = instances
        .iter()
        .sorted_by_key(|instance| instance.start_time)
        .collect();

    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut assigned = Vec::with_capacity(sorted.len());
    for (idx, instance) in sorted.iter().enumerate() {
        let free = columns
            .iter()
            .position(|column| column.iter().all(|&other| !sorted[other].overlaps(instance)));
        let column = match free {
            Some(column) => column,
            None => {
                columns.push(Vec::new());
                columns.len() - 1
            }
        };
        columns[column].push(idx);
        assigned.push(column);
    }

    let clusters = Clusters::from_overlaps(&sorted);
    let mut widths = vec![1; sorted.len()];
    for (idx, column) in assigned.iter().enumerate() {
        let root = clusters.root(idx);
        widths[root] = widths[root].max(column + 1);
    }

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, instance)| LayoutInstance {
            instance: instance.clone(),
            column: assigned[idx],
            column_count: widths[clusters.root(idx)],
        })
        .collect()
}

/// Disjoint sets of instances joined by transitive overlap
struct Clusters {
    parent: Vec<usize>,
}

impl Clusters {
    fn from_overlaps(instances: &[&EventInstance<'_>]) -> Self {
        let mut clusters = Self {
            parent: (0..instances.len()).collect(),
        };
        for (a, b) in (0..instances.len()).tuple_combinations() {
            if instances[a].overlaps(instances[b]) {
                clusters.join(a, b);
            }
        }
        clusters
    }

    fn root(&self, mut idx: usize) -> usize {
        while self.parent[idx] != idx {
            idx = self.parent[idx];
        }
        idx
    }

    fn join(&mut self, a: usize, b: usize) {
        let (a, b) = (self.root(a), self.root(b));
        if a != b {
            self.parent[a.max(b)] = a.min(b);
        }
    }
}
