//! Unit tests for sg-agent.

use sg_core::{AgentId, Group, Pos};
use sg_grid::Grid;

use crate::{Agent, AgentStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Place one agent per `(group, pos)` entry; ids follow slice order.
fn world(size: usize, threshold: u32, placed: &[(Group, Pos)]) -> (Grid, AgentStore) {
    let mut grid = Grid::new(size);
    let agents = placed
        .iter()
        .enumerate()
        .map(|(i, &(group, pos))| {
            let id = AgentId(i as u32);
            grid.place(pos, id).unwrap();
            Agent::new(id, group, pos, threshold)
        })
        .collect();
    (grid, AgentStore::from_agents(agents))
}

#[cfg(test)]
mod agent {
    use super::*;

    #[test]
    fn display_lists_fields() {
        let a = Agent::new(AgentId(0), Group::B, Pos::new(3, 4), 2);
        let s = a.to_string();
        assert!(s.starts_with("Agent(threshold=2, position=(3, 4), group=B, id='"), "{s}");
        assert!(s.contains(&a.uid.to_string()));
    }

    #[test]
    fn default_agent_at_origin() {
        let a = Agent::default();
        assert_eq!(a.position, Pos::new(0, 0));
        assert_eq!(a.threshold, 1);
        assert_eq!(a.group, Group::A);
    }

    #[test]
    fn generated_uids_differ() {
        let a = Agent::default();
        let b = Agent::default();
        assert_ne!(a.uid, b.uid);
    }
}

#[cfg(test)]
mod builder {
    use sg_core::SimRng;

    use super::*;
    use crate::AgentStoreBuilder;

    #[test]
    fn two_groups_split_evenly() {
        let store = AgentStoreBuilder::two_groups(1, 10).build(&mut SimRng::new(1));
        assert_eq!(store.len(), 10);
        assert_eq!(store.count_group(Group::A), 5);
        assert_eq!(store.count_group(Group::B), 5);
    }

    #[test]
    fn odd_count_drops_one_agent() {
        let store = AgentStoreBuilder::two_groups(1, 7).build(&mut SimRng::new(1));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn ids_are_dense_and_positions_placeholder() {
        let store = AgentStoreBuilder::new(3)
            .group(Group::A, 2)
            .group(Group::B, 1)
            .build(&mut SimRng::new(1));
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
        for a in store.iter() {
            assert_eq!(store.get(a.id), Some(a));
            assert_eq!(a.position, Pos::new(0, 0));
            assert_eq!(a.threshold, 3);
        }
        assert_eq!(store.group_of(AgentId(2)), Group::B);
    }

    #[test]
    fn uids_are_seeded() {
        let a = AgentStoreBuilder::two_groups(1, 4).build(&mut SimRng::new(9));
        let b = AgentStoreBuilder::two_groups(1, 4).build(&mut SimRng::new(9));
        assert_eq!(a, b);
        let uids: std::collections::HashSet<_> = a.iter().map(|x| x.uid).collect();
        assert_eq!(uids.len(), 4);
        assert_eq!(a.get(AgentId(0)).unwrap().uid.get_version_num(), 4);
    }

    #[test]
    fn set_position_updates_record() {
        let mut store = AgentStoreBuilder::two_groups(1, 2).build(&mut SimRng::new(0));
        assert!(store.set_position(AgentId(1), Pos::new(2, 2)));
        assert_eq!(store.get(AgentId(1)).unwrap().position, Pos::new(2, 2));
        assert!(!store.set_position(AgentId(5), Pos::new(0, 0)));
    }
}

#[cfg(test)]
mod neighbors {
    use sg_core::SimRng;

    use super::*;
    use crate::{get_locs, neighbor_cells};

    #[test]
    fn corner_edge_interior_counts() {
        let (grid, store) = world(5, 1, &[
            (Group::A, Pos::new(0, 0)),
            (Group::A, Pos::new(0, 2)),
            (Group::A, Pos::new(2, 2)),
        ]);
        let counts: Vec<usize> = store.iter().map(|a| neighbor_cells(a, &grid).len()).collect();
        assert_eq!(counts, vec![3, 5, 8]);
    }

    #[test]
    fn get_locs_is_a_permutation_of_neighbor_cells() {
        let (grid, store) = world(5, 1, &[(Group::A, Pos::new(2, 2))]);
        let agent = store.get(AgentId(0)).unwrap();
        let mut rng = SimRng::new(11);
        let mut locs = get_locs(agent, &grid, &mut rng);
        assert!(!locs.contains(&agent.position));
        locs.sort_unstable();
        assert_eq!(locs, neighbor_cells(agent, &grid));
    }

    #[test]
    fn get_locs_order_varies() {
        let (grid, store) = world(5, 1, &[(Group::A, Pos::new(2, 2))]);
        let agent = store.get(AgentId(0)).unwrap();
        let mut rng = SimRng::new(5);
        let first = get_locs(agent, &grid, &mut rng);
        let differs = (0..20).any(|_| get_locs(agent, &grid, &mut rng) != first);
        assert!(differs, "20 shuffles of 8 cells should not all match");
    }
}

#[cfg(test)]
mod evaluation {
    use super::*;
    use crate::eval_neighbors;

    #[test]
    fn counts_only_same_group() {
        let (grid, store) = world(3, 2, &[
            (Group::A, Pos::new(1, 1)),
            (Group::A, Pos::new(0, 0)),
            (Group::B, Pos::new(0, 1)),
            (Group::A, Pos::new(2, 2)),
        ]);
        let e = eval_neighbors(store.get(AgentId(0)).unwrap(), &grid, &store);
        assert_eq!(e.similar, 2);
        assert!(e.is_happy);
    }

    #[test]
    fn happy_iff_count_meets_threshold() {
        for threshold in 0..4 {
            let (grid, store) = world(3, threshold, &[
                (Group::B, Pos::new(1, 1)),
                (Group::B, Pos::new(1, 0)),
                (Group::B, Pos::new(2, 1)),
            ]);
            let e = eval_neighbors(store.get(AgentId(0)).unwrap(), &grid, &store);
            assert_eq!(e.similar, 2);
            assert_eq!(e.is_happy, e.similar >= threshold, "threshold {threshold}");
        }
    }

    #[test]
    fn zero_threshold_always_happy() {
        let (grid, store) = world(3, 0, &[(Group::A, Pos::new(0, 0))]);
        assert!(eval_neighbors(store.get(AgentId(0)).unwrap(), &grid, &store).is_happy);
    }

    #[test]
    fn clamped_neighbor_not_double_counted() {
        // Corner agent: offsets (-1, 1) and (0, 1) both clamp to (0, 1).
        let (grid, store) = world(3, 1, &[
            (Group::A, Pos::new(0, 0)),
            (Group::A, Pos::new(0, 1)),
        ]);
        let e = eval_neighbors(store.get(AgentId(0)).unwrap(), &grid, &store);
        assert_eq!(e.similar, 1);
    }
}

#[cfg(test)]
mod relocation {
    use sg_core::SimRng;

    use super::*;
    use crate::{Relocation, calculate_new_position};

    #[test]
    fn happy_agent_stays() {
        let (grid, store) = world(3, 1, &[
            (Group::A, Pos::new(0, 0)),
            (Group::A, Pos::new(1, 1)),
        ]);
        let (eval, reloc) =
            calculate_new_position(store.get(AgentId(0)).unwrap(), &grid, &store, &mut SimRng::new(0));
        assert!(eval.is_happy);
        assert_eq!(reloc, Relocation::Stay);
    }

    #[test]
    fn unhappy_agent_targets_empty_neighbor() {
        let (grid, store) = world(3, 1, &[
            (Group::A, Pos::new(1, 1)),
            (Group::B, Pos::new(0, 0)),
        ]);
        let agent = store.get(AgentId(0)).unwrap();
        for seed in 0..20 {
            let (eval, reloc) = calculate_new_position(agent, &grid, &store, &mut SimRng::new(seed));
            assert!(!eval.is_happy);
            let target = reloc.target().expect("an empty neighbor exists");
            assert!(grid.is_vacant(target));
            assert!(neighbor_cells_contains(agent, &grid, target));
        }
    }

    #[test]
    fn surrounded_agent_reports_no_vacancy() {
        // Corner A agent boxed in by three B agents.
        let (grid, store) = world(3, 1, &[
            (Group::A, Pos::new(0, 0)),
            (Group::B, Pos::new(0, 1)),
            (Group::B, Pos::new(1, 0)),
            (Group::B, Pos::new(1, 1)),
        ]);
        let (eval, reloc) =
            calculate_new_position(store.get(AgentId(0)).unwrap(), &grid, &store, &mut SimRng::new(0));
        assert_eq!(eval.similar, 0);
        assert_eq!(reloc, Relocation::NoVacancy);
        assert_eq!(reloc.target(), None);
    }

    #[test]
    fn same_seed_same_target() {
        let (grid, store) = world(5, 1, &[(Group::A, Pos::new(2, 2))]);
        let agent = store.get(AgentId(0)).unwrap();
        let a = calculate_new_position(agent, &grid, &store, &mut SimRng::new(77));
        let b = calculate_new_position(agent, &grid, &store, &mut SimRng::new(77));
        assert_eq!(a, b);
    }

    fn neighbor_cells_contains(agent: &Agent, grid: &Grid, p: Pos) -> bool {
        crate::neighbor_cells(agent, grid).contains(&p)
    }
}
