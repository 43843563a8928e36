//! Dependency scheduling on top of the graph engine.
//!
//! [`DependencyScheduler`] collects units and "must run after" relations between them and
//! turns them into an execution order. Edges point from a unit to what it depends on, so
//! the finish order of [`topological_sort`] is directly the order to run units in.
//!
//! A dependency cycle is a scheduling failure: the scheduler reports the units on the
//! cycle and never guesses an order.
//!
//! # Examples
//!
//! ```rust
//! use dagscope::schedule::DependencyScheduler;
//!
//! let mut scheduler = DependencyScheduler::new();
//! scheduler.add_dependency("app", "db")?;
//! scheduler.add_dependency("app", "cache")?;
//! scheduler.add_dependency("cache", "db")?;
//!
//! assert_eq!(scheduler.schedule()?, vec!["db", "cache", "app"]);
//! assert_eq!(
//!     scheduler.levels()?,
//!     vec![vec!["db"], vec!["cache"], vec!["app"]]
//! );
//!
//! scheduler.add_dependency("db", "app")?;
//! assert!(scheduler.schedule().is_err());
//! # Ok::<(), dagscope::Error>(())
//! ```

use std::{fmt, hash::Hash};

use log::debug;

use crate::{
    graph::{
        algorithms::{find_cycle, strongly_connected_components, topological_sort},
        IndexedGraph, NodeId,
    },
    Error, Result,
};

/// Orders units so that every unit runs after the units it depends on.
#[derive(Debug, Clone)]
pub struct DependencyScheduler<K>
where
    K: Hash + Eq + Clone,
{
    graph: IndexedGraph<K>,
}

impl<K> Default for DependencyScheduler<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DependencyScheduler<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        DependencyScheduler {
            graph: IndexedGraph::new(),
        }
    }

    /// Registers a unit without dependencies. Registering twice is a no-op.
    pub fn add_unit(&mut self, unit: K) {
        self.graph.add_node(unit);
    }

    /// Records that `unit` must run after `depends_on`, registering both.
    ///
    /// Returns `Ok(false)` if the dependency was already recorded. A unit may depend on
    /// itself; that is reported as a cycle when scheduling.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the edge.
    pub fn add_dependency(&mut self, unit: K, depends_on: K) -> Result<bool> {
        self.graph.add_edge(unit, depends_on, ())
    }

    /// Number of registered units.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of recorded dependencies.
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if `unit` is registered.
    #[must_use]
    pub fn contains(&self, unit: &K) -> bool {
        self.graph.contains_key(unit)
    }

    /// Direct dependencies of `unit`, in the order they were recorded.
    #[must_use]
    pub fn dependencies_of(&self, unit: &K) -> Vec<K> {
        self.graph.successors(unit).cloned().collect()
    }

    /// Groups of units that depend on each other, directly or transitively.
    ///
    /// Each group is a strongly connected component with more than one unit, or a single
    /// unit that depends on itself.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<K>> {
        let inner = self.graph.inner();
        let components = strongly_connected_components(inner);
        components
            .members()
            .into_iter()
            .filter(|members| match members.as_slice() {
                [single] => inner.find_edge(*single, *single).is_some(),
                _ => true,
            })
            .map(|members| self.graph.map_nodes_to_keys(&members))
            .collect()
    }
}

impl<K> DependencyScheduler<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// Execution order: every unit appears after all of its dependencies.
    ///
    /// Units are visited in registration order, so independent units keep the order in
    /// which they were registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scheduling`] naming the units on a dependency cycle.
    pub fn schedule(&self) -> Result<Vec<K>> {
        Ok(self.graph.map_nodes_to_keys(&self.order()?))
    }

    /// Units grouped into batches that can run together.
    ///
    /// Batch `0` holds units without dependencies; a unit belongs to the batch after the
    /// latest batch of any of its dependencies. Within a batch units are in execution
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scheduling`] naming the units on a dependency cycle.
    pub fn levels(&self) -> Result<Vec<Vec<K>>> {
        let inner = self.graph.inner();
        let order = self.order()?;

        let mut level: Vec<usize> = vec![0; inner.node_bound()];
        let mut levels: Vec<Vec<K>> = Vec::new();
        for node in order {
            let depth = inner
                .successors(node)
                .map(|dependency| level[dependency.index()] + 1)
                .max()
                .unwrap_or(0);
            level[node.index()] = depth;

            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            if let Some(unit) = inner.node(node) {
                levels[depth].push(unit.clone());
            }
        }
        Ok(levels)
    }

    fn order(&self) -> Result<Vec<NodeId>> {
        let inner = self.graph.inner();
        match topological_sort(inner) {
            Ok(order) => Ok(order),
            Err(Error::CyclicGraph { from, .. }) => {
                let cycle = find_cycle(inner).unwrap_or_else(|| vec![from]);
                let units = self
                    .graph
                    .map_nodes_to_keys(&cycle)
                    .iter()
                    .map(|unit| format!("{unit:?}"))
                    .collect::<Vec<_>>()
                    .join(" -> ");
                debug!("scheduling failed on dependency cycle {units}");
                Err(Error::Scheduling(format!("dependency cycle: {units}")))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_diamond_scheduler() -> DependencyScheduler<&'static str> {
        // app -> {auth, api} -> core
        let mut scheduler = DependencyScheduler::new();
        scheduler.add_dependency("app", "auth").unwrap();
        scheduler.add_dependency("app", "api").unwrap();
        scheduler.add_dependency("auth", "core").unwrap();
        scheduler.add_dependency("api", "core").unwrap();
        scheduler
    }

    #[test]
    fn test_schedule_dependencies_first() {
        let scheduler = create_diamond_scheduler();
        assert_eq!(scheduler.schedule().unwrap(), vec!["core", "auth", "api", "app"]);
    }

    #[test]
    fn test_levels() {
        let mut scheduler = create_diamond_scheduler();
        scheduler.add_unit("docs");
        assert_eq!(
            scheduler.levels().unwrap(),
            vec![vec!["core", "docs"], vec!["auth", "api"], vec!["app"]]
        );
    }

    #[test]
    fn test_cycle_is_a_scheduling_failure() {
        let mut scheduler = create_diamond_scheduler();
        scheduler.add_dependency("core", "app").unwrap();

        match scheduler.schedule() {
            Err(Error::Scheduling(message)) => {
                assert!(message.contains("\"core\""), "{message}");
                assert!(message.contains("\"app\""), "{message}");
            }
            other => panic!("expected a scheduling error, got {other:?}"),
        }
        assert!(matches!(scheduler.levels(), Err(Error::Scheduling(_))));
    }

    #[test]
    fn test_cycles() {
        let mut scheduler = create_diamond_scheduler();
        assert!(scheduler.cycles().is_empty());

        scheduler.add_dependency("core", "auth").unwrap();
        scheduler.add_dependency("docs", "docs").unwrap();
        assert_eq!(scheduler.cycles(), vec![vec!["auth", "core"], vec!["docs"]]);
    }

    #[test]
    fn test_units_and_dependencies() {
        let mut scheduler = create_diamond_scheduler();
        assert_eq!(scheduler.unit_count(), 4);
        assert_eq!(scheduler.dependency_count(), 4);
        assert!(!scheduler.add_dependency("app", "api").unwrap());
        assert_eq!(scheduler.dependencies_of(&"app"), vec!["auth", "api"]);
        assert!(scheduler.dependencies_of(&"ghost").is_empty());

        scheduler.add_unit("app");
        assert_eq!(scheduler.unit_count(), 4);
        assert!(scheduler.contains(&"core"));
    }

    #[test]
    fn test_empty_scheduler() {
        let scheduler: DependencyScheduler<u32> = DependencyScheduler::default();
        assert!(scheduler.schedule().unwrap().is_empty());
        assert!(scheduler.levels().unwrap().is_empty());
    }
}
