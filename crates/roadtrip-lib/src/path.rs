use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::graph::Graph;

/// Run breadth-first search, returning the route with the fewest border
/// crossings over traversable edges.
pub fn find_route_bfs(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start.to_string(), None);
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(&current) {
            let next = &edge.target;
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next.clone(), Some(current.clone()));
            if next == goal {
                return reconstruct_path(&parents, start, goal);
            }
            queue.push_back(next.clone());
        }
    }

    None
}

/// Run Dijkstra's algorithm weighted by capital-to-capital distance.
///
/// The search stops when `goal` is popped from the frontier, i.e. once its
/// distance is settled, not when it is first discovered.
pub fn find_route_dijkstra(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut distances: HashMap<String, u64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.to_string(), 0);
    parents.insert(start.to_string(), None);
    queue.push(QueueEntry::new(start.to_string(), 0));

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(&entry.node) {
            Some(distance) if *distance < entry.cost => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == goal {
            return reconstruct_path(&parents, start, goal);
        }

        for edge in graph.neighbours(&entry.node) {
            let next_cost = current_distance + u64::from(edge.capital_km);
            let improved = distances
                .get(&edge.target)
                .map_or(true, |known| next_cost < *known);
            if improved {
                distances.insert(edge.target.clone(), next_cost);
                parents.insert(edge.target.clone(), Some(entry.node.clone()));
                queue.push(QueueEntry::new(edge.target.clone(), next_cost));
            }
        }
    }

    None
}

/// Walk predecessor links back from `goal`. A chain that does not end at
/// `start` means the predecessor state is unusable and is reported as no path.
fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    start: &str,
    goal: &str,
) -> Option<Vec<String>> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        // A cycle in the predecessor links can never reach `start`.
        if path.len() > parents.len() {
            return None;
        }
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).and_then(|parent| parent.as_deref());
    }
    path.reverse();

    if path.first().map(String::as_str) != Some(start) {
        return None;
    }
    Some(path)
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: String,
    cost: u64,
}

impl QueueEntry {
    fn new(node: String, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::NameAliasTable;
    use crate::borders::BorderTable;
    use crate::capitals::CapitalDistanceTable;
    use crate::graph::build_graph;

    /// Diamond: A-B-D is two hops but expensive, A-C-E-D is three hops but cheap.
    fn diamond() -> Graph {
        let borders = BorderTable::parse(
            "A = B 1 km; C 1 km\n\
             B = A 1 km; D 1 km\n\
             C = A 1 km; E 1 km\n\
             E = C 1 km; D 1 km\n\
             D = B 1 km; E 1 km",
        );
        let mut capitals = CapitalDistanceTable::default();
        capitals.insert("a", "b", 100);
        capitals.insert("b", "d", 100);
        capitals.insert("a", "c", 10);
        capitals.insert("c", "e", 10);
        capitals.insert("e", "d", 10);
        let mut aliases = NameAliasTable::default();
        for name in ["A", "B", "C", "D", "E"] {
            aliases.insert(name, &name.to_lowercase());
        }
        build_graph(&borders, &capitals, &aliases)
    }

    #[test]
    fn dijkstra_minimizes_capital_distance() {
        let graph = diamond();
        let route = find_route_dijkstra(&graph, "A", "D").expect("route exists");
        assert_eq!(route, vec!["A", "C", "E", "D"]);
    }

    #[test]
    fn expensive_direct_edge_loses_to_cheap_detour() {
        // D is discovered first through the direct edge, but only settled
        // after the detour has lowered its cost.
        let borders = BorderTable::parse(
            "A = D 1 km; B 1 km\n\
             B = A 1 km; D 1 km\n\
             D = A 1 km; B 1 km",
        );
        let mut capitals = CapitalDistanceTable::default();
        capitals.insert("a", "d", 100);
        capitals.insert("a", "b", 1);
        capitals.insert("b", "d", 1);
        let mut aliases = NameAliasTable::default();
        for name in ["A", "B", "D"] {
            aliases.insert(name, &name.to_lowercase());
        }
        let graph = build_graph(&borders, &capitals, &aliases);

        let route = find_route_dijkstra(&graph, "A", "D").expect("route exists");
        assert_eq!(route, vec!["A", "B", "D"]);
    }

    #[test]
    fn bfs_minimizes_crossings() {
        let graph = diamond();
        let route = find_route_bfs(&graph, "A", "D").expect("route exists");
        assert_eq!(route, vec!["A", "B", "D"]);
    }

    #[test]
    fn same_start_and_goal_is_single_node() {
        let graph = diamond();
        assert_eq!(
            find_route_dijkstra(&graph, "B", "B"),
            Some(vec!["B".to_string()])
        );
    }

    #[test]
    fn unreachable_goal_is_none() {
        let graph = diamond();
        assert_eq!(find_route_dijkstra(&graph, "A", "Z"), None);
        assert_eq!(find_route_bfs(&graph, "A", "Z"), None);
    }

    #[test]
    fn reconstruction_rejects_chain_not_ending_at_start() {
        let mut parents = HashMap::new();
        parents.insert("C".to_string(), Some("B".to_string()));
        parents.insert("B".to_string(), None);
        assert_eq!(reconstruct_path(&parents, "A", "C"), None);
    }

    #[test]
    fn reconstruction_rejects_predecessor_cycle() {
        let mut parents = HashMap::new();
        parents.insert("B".to_string(), Some("C".to_string()));
        parents.insert("C".to_string(), Some("B".to_string()));
        assert_eq!(reconstruct_path(&parents, "A", "C"), None);
    }

    #[test]
    fn queue_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new("far".to_string(), 50));
        heap.push(QueueEntry::new("near".to_string(), 5));
        heap.push(QueueEntry::new("mid".to_string(), 20));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|entry| entry.node)).collect();
        assert_eq!(order, vec!["near", "mid", "far"]);
    }
}
