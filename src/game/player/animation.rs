//! The facing flip: a short horizontal-scale interpolation owned by the
//! controller. Inserting a new one over an in-flight one retargets it, which
//! is also how a flip gets cancelled.

use std::time::Duration;

use bevy::prelude::*;

use crate::AppSystems;

#[derive(Component, Debug)]
pub struct FlipAnimation {
    timer: Timer,
    from: f32,
    to: f32,
}

impl FlipAnimation {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
            from,
            to,
        }
    }

    fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    fn scale_x(&self) -> f32 {
        let t = self.timer.fraction();
        self.from + (self.to - self.from) * t
    }

    fn finished(&self) -> bool {
        self.timer.finished()
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, drive_flip_animation.in_set(AppSystems::TickTimers));
}

fn drive_flip_animation(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut FlipAnimation, &mut Transform)>,
) {
    for (entity, mut flip, mut transform) in &mut query {
        flip.tick(time.delta());
        transform.scale.x = flip.scale_x();
        if flip.finished() {
            commands.entity(entity).remove::<FlipAnimation>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_current_scale() {
        let flip = FlipAnimation::new(0.3, -1.0, 0.2);
        assert_eq!(flip.scale_x(), 0.3);
        assert!(!flip.finished());
    }

    #[test]
    fn reaches_the_target_and_finishes() {
        let mut flip = FlipAnimation::new(1.0, -1.0, 0.2);
        flip.tick(Duration::from_millis(100));
        assert!(flip.scale_x().abs() < 1.0);

        flip.tick(Duration::from_millis(150));
        assert_eq!(flip.scale_x(), -1.0);
        assert!(flip.finished());
    }

    #[test]
    fn retargeting_restarts_from_the_interrupted_scale() {
        let mut flip = FlipAnimation::new(1.0, -1.0, 0.2);
        flip.tick(Duration::from_millis(50));
        let interrupted = flip.scale_x();

        // What the controller does on a reversal mid-flip.
        let flip = FlipAnimation::new(interrupted, 1.0, 0.2);
        assert_eq!(flip.scale_x(), interrupted);
        assert!(!flip.finished());
    }
}
