//! Concealment: foliage the player ducks into and a crate they climb inside.
//!
//! Passive zones conceal the player for as long as they overlap one. The
//! hideout has to be engaged deliberately with the interact action and is
//! only left by moving. Both feed the same visibility rule: the player
//! renders behind the foreground while either is in effect.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::{
    AppSystems,
    game::{
        FixedSystems,
        contacts::ContactEvents,
        level::layers,
        player::{Player, PlayerInput},
    },
    screens::Screen,
};

pub const HIDEOUT_VACANT: Color = Color::srgb(0.45, 0.32, 0.18);
pub const HIDEOUT_OCCUPIED: Color = Color::srgb(0.28, 0.20, 0.11);

/// A trigger volume that conceals the player while they overlap it.
#[derive(Component)]
pub struct HideZone;

/// An interactable hiding spot. Engaged with the interact action, vacated
/// only by moving.
#[derive(Component, Default)]
pub struct Hideout {
    pub occupied: bool,
}

/// Which side of the foreground the player sprite renders on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RenderBucket {
    #[default]
    Default,
    Hidden,
}

impl RenderBucket {
    pub fn z(self) -> f32 {
        match self {
            RenderBucket::Default => layers::FOREGROUND + 10.0,
            RenderBucket::Hidden => layers::FOREGROUND - 10.0,
        }
    }
}

/// Hide-state bookkeeping for the player.
///
/// `zone_refs` mirrors `zones.len()` and the two are only ever mutated in
/// lockstep; the visibility rule is defined over the counter.
#[derive(Component, Default)]
pub struct Hiding {
    zones: HashSet<Entity>,
    zone_refs: u32,
    /// Hideout currently in interaction range. A non-owning handle; range
    /// exit or despawn clears it.
    pub active_target: Option<Entity>,
    pub in_active: bool,
}

impl Hiding {
    /// Starts passive concealment from `zone`. Adding a zone that is already
    /// counted is a no-op.
    pub fn hide(&mut self, zone: Entity) {
        if !self.zones.insert(zone) {
            return;
        }
        self.zone_refs += 1;
    }

    /// Ends passive concealment from `zone`. Unknown zones are ignored.
    pub fn unhide(&mut self, zone: Entity) {
        if !self.zones.remove(&zone) {
            return;
        }
        self.zone_refs = self.zone_refs.saturating_sub(1);
    }

    pub fn is_hidden(&self) -> bool {
        self.zone_refs > 0 || self.in_active
    }

    pub fn bucket(&self) -> RenderBucket {
        if self.is_hidden() {
            RenderBucket::Hidden
        } else {
            RenderBucket::Default
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (track_zone_overlaps, track_hideout_range)
            .in_set(FixedSystems::React)
            .run_if(in_state(Screen::Gameplay)),
    );
    app.add_systems(
        Update,
        (begin_active_hide, apply_render_bucket, apply_hideout_look)
            .chain()
            .in_set(AppSystems::Update)
            .run_if(in_state(Screen::Gameplay)),
    );
}

/// Zone overlap edges drive the passive hide bookkeeping.
fn track_zone_overlaps(
    zones: Query<(), With<HideZone>>,
    mut players: Query<(&ContactEvents, &mut Hiding), With<Player>>,
) {
    for (contacts, mut hiding) in &mut players {
        for &entity in &contacts.entered {
            if zones.get(entity).is_ok() {
                hiding.hide(entity);
            }
        }
        for &entity in &contacts.exited {
            if zones.get(entity).is_ok() {
                hiding.unhide(entity);
            }
        }
    }
}

/// Keeps `active_target` pointed at the hideout in range, and never dangling.
fn track_hideout_range(
    mut hideouts: Query<&mut Hideout>,
    mut players: Query<(&ContactEvents, &mut Hiding), With<Player>>,
) {
    for (contacts, mut hiding) in &mut players {
        for &entity in &contacts.entered {
            if hideouts.get(entity).is_ok() {
                hiding.active_target = Some(entity);
            }
        }
        for &entity in &contacts.exited {
            if hiding.active_target != Some(entity) {
                continue;
            }
            hiding.active_target = None;
            // Losing the spot while occupying it vacates it as well.
            if hiding.in_active {
                hiding.in_active = false;
                if let Ok(mut hideout) = hideouts.get_mut(entity) {
                    hideout.occupied = false;
                }
            }
        }
    }
}

/// Interact while a hideout is in range and not already occupied: climb in.
/// There is no interact-to-leave; moving is the only way out.
fn begin_active_hide(
    input: Res<PlayerInput>,
    mut hideouts: Query<&mut Hideout>,
    mut players: Query<&mut Hiding, With<Player>>,
) {
    if !input.interact_pressed {
        return;
    }
    let Ok(mut hiding) = players.single_mut() else {
        return;
    };
    if hiding.in_active {
        return;
    }
    let Some(target) = hiding.active_target else {
        return;
    };
    let Ok(mut hideout) = hideouts.get_mut(target) else {
        return;
    };
    hideout.occupied = true;
    hiding.in_active = true;
    info!("tucked into hideout");
}

fn apply_render_bucket(
    mut players: Query<(&Hiding, &mut Transform), (With<Player>, Changed<Hiding>)>,
) {
    for (hiding, mut transform) in &mut players {
        transform.translation.z = hiding.bucket().z();
    }
}

fn apply_hideout_look(mut hideouts: Query<(&Hideout, &mut Sprite), Changed<Hideout>>) {
    for (hideout, mut sprite) in &mut hideouts {
        sprite.color = if hideout.occupied {
            HIDEOUT_OCCUPIED
        } else {
            HIDEOUT_VACANT
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn hide_then_unhide_restores_prior_state() {
        let (a, _) = zones();
        let mut hiding = Hiding::default();

        hiding.hide(a);
        assert_eq!(hiding.zone_refs, 1);
        assert_eq!(hiding.bucket(), RenderBucket::Hidden);

        hiding.unhide(a);
        assert_eq!(hiding.zone_refs, 0);
        assert_eq!(hiding.bucket(), RenderBucket::Default);
    }

    #[test]
    fn hiding_twice_in_the_same_zone_counts_once() {
        let (a, _) = zones();
        let mut hiding = Hiding::default();

        hiding.hide(a);
        hiding.hide(a);
        assert_eq!(hiding.zone_refs, 1);
        assert_eq!(hiding.zones.len(), 1);

        hiding.unhide(a);
        assert!(!hiding.is_hidden());
    }

    #[test]
    fn unhiding_an_unknown_zone_is_ignored() {
        let (a, b) = zones();
        let mut hiding = Hiding::default();

        hiding.hide(a);
        hiding.unhide(b);
        assert_eq!(hiding.zone_refs, 1);

        hiding.unhide(b);
        hiding.unhide(a);
        assert_eq!(hiding.zone_refs, 0);
    }

    #[test]
    fn hidden_while_any_flag_is_set() {
        let (a, _) = zones();

        // Neither.
        let mut hiding = Hiding::default();
        assert!(!hiding.is_hidden());

        // Passive only.
        hiding.hide(a);
        assert!(hiding.is_hidden());

        // Passive and active overlap.
        hiding.in_active = true;
        assert!(hiding.is_hidden());

        // Active only.
        hiding.unhide(a);
        assert!(hiding.is_hidden());

        hiding.in_active = false;
        assert!(!hiding.is_hidden());
    }

    #[test]
    fn counter_stays_in_lockstep_with_the_set() {
        let (a, b) = zones();
        let mut hiding = Hiding::default();

        for _ in 0..2 {
            hiding.hide(a);
            hiding.hide(b);
            hiding.hide(b);
            assert_eq!(hiding.zone_refs as usize, hiding.zones.len());

            hiding.unhide(a);
            hiding.unhide(a);
            assert_eq!(hiding.zone_refs as usize, hiding.zones.len());

            hiding.unhide(b);
            assert_eq!(hiding.zone_refs, 0);
            assert!(hiding.zones.is_empty());
        }
    }
}
