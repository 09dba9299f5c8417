//! Per-tick contact bookkeeping for the player body.
//!
//! Avian maintains the set of currently overlapping colliders in
//! [`CollidingEntities`]; gameplay cares about the edges (a zone was entered,
//! the ground was touched), so this module diffs that set once per fixed tick
//! and downstream systems consume the result.

use std::collections::HashSet;

use avian2d::prelude::CollidingEntities;
use bevy::prelude::*;

use crate::game::FixedSystems;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        track_contacts.in_set(FixedSystems::Contacts),
    );
}

/// Contact edges for the entity this is attached to, refreshed every fixed
/// tick.
#[derive(Component, Default)]
pub struct ContactEvents {
    tracked: HashSet<Entity>,
    pub entered: Vec<Entity>,
    pub exited: Vec<Entity>,
}

impl ContactEvents {
    /// Replaces the tracked set with `current`, recording the difference.
    pub fn update(&mut self, current: impl IntoIterator<Item = Entity>) {
        let current: HashSet<Entity> = current.into_iter().collect();
        self.entered = current.difference(&self.tracked).copied().collect();
        self.exited = self.tracked.difference(&current).copied().collect();
        self.tracked = current;
    }
}

fn track_contacts(mut query: Query<(&CollidingEntities, &mut ContactEvents)>) {
    for (colliding, mut contacts) in &mut query {
        contacts.update(colliding.0.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_edge_exactly_once() {
        let mut world = World::new();
        let (a, b) = (world.spawn_empty().id(), world.spawn_empty().id());
        let mut contacts = ContactEvents::default();

        contacts.update([a]);
        assert_eq!(contacts.entered, vec![a]);
        assert!(contacts.exited.is_empty());

        // Still overlapping: no new edges.
        contacts.update([a]);
        assert!(contacts.entered.is_empty());
        assert!(contacts.exited.is_empty());

        contacts.update([b]);
        assert_eq!(contacts.entered, vec![b]);
        assert_eq!(contacts.exited, vec![a]);

        contacts.update([]);
        assert!(contacts.entered.is_empty());
        assert_eq!(contacts.exited, vec![b]);
    }
}
