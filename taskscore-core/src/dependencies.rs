//! Dependency analysis: reverse index and cycle detection.
//!
//! Edges run from a task to the tasks it depends on ("forward" graph).
//! The reverse index answers "who is waiting on this task?".

use crate::task::{Task, TaskId};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Reverse dependency index: task id -> ids of tasks that declared it as a dependency.
///
/// Dependents are kept in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    dependents: BTreeMap<TaskId, Vec<TaskId>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.dependents.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn blocked_count(&self, id: TaskId) -> usize {
        self.dependents_of(id).len()
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &[TaskId])> {
        self.dependents.iter().map(|(id, deps)| (*id, deps.as_slice()))
    }

    fn record(&mut self, dependency: TaskId, dependent: TaskId) {
        self.dependents.entry(dependency).or_default().push(dependent);
    }
}

/// Build the reverse index. Unknown dependency ids get entries too.
pub fn build_dependency_map(tasks: &[Task]) -> DependencyMap {
    let mut map = DependencyMap::new();
    for task in tasks {
        for &dep_id in &task.dependencies {
            map.record(dep_id, task.id);
        }
    }
    map
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    id: TaskId,
    next_dep: usize,
}

/// Ids of tasks that sit on, or lead into, a dependency cycle.
///
/// Depth-first search over the forward graph with an explicit stack.
/// When a back edge is found, the two endpoints and every ancestor on the
/// current path are marked. Those nodes stay "in progress" afterwards, so a
/// later root that reaches any of them is marked as well.
///
/// Ids that are not in `tasks` are terminal and can never close a cycle.
pub fn detect_circular_dependencies(tasks: &[Task]) -> BTreeSet<TaskId> {
    let graph: HashMap<TaskId, &[TaskId]> = tasks
        .iter()
        .map(|t| (t.id, t.dependencies.as_slice()))
        .collect();

    let mut visited: HashSet<TaskId> = HashSet::with_capacity(graph.len());
    let mut in_progress: HashSet<TaskId> = HashSet::new();
    let mut circular = BTreeSet::new();

    for root in tasks {
        if !visited.insert(root.id) {
            continue;
        }
        in_progress.insert(root.id);

        let mut stack = vec![Frame {
            id: root.id,
            next_dep: 0,
        }];
        let mut unwinding = false;

        while let Some(frame) = stack.last_mut() {
            if unwinding {
                // Ancestor of a discovered cycle.
                circular.insert(frame.id);
                stack.pop();
                continue;
            }

            let deps = graph.get(&frame.id).copied().unwrap_or(&[]);
            let Some(&dep_id) = deps.get(frame.next_dep) else {
                in_progress.remove(&frame.id);
                stack.pop();
                continue;
            };
            frame.next_dep += 1;

            if !graph.contains_key(&dep_id) {
                continue;
            }

            if visited.insert(dep_id) {
                in_progress.insert(dep_id);
                stack.push(Frame {
                    id: dep_id,
                    next_dep: 0,
                });
            } else if in_progress.contains(&dep_id) {
                circular.insert(frame.id);
                circular.insert(dep_id);
                stack.pop();
                unwinding = true;
            }
        }
    }

    circular
}
