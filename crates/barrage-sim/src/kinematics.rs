//! Progress-driven kinematics for rockets and interceptors.
//!
//! Pure math, no ECS access. Rockets and interceptors deliberately move
//! differently: rockets close a growing share of the remaining distance
//! each tick, interceptors interpolate linearly from origin to target.

use glam::Vec2;

/// Point at fraction `t` along the segment `start -> target`.
pub fn lerp(start: Vec2, target: Vec2, t: f32) -> Vec2 {
    start + (target - start) * t
}

/// One rocket tick. Progress grows by `speed` first, then the rocket covers
/// `speed / (1 - progress + epsilon)` of the remaining distance.
/// Returns the new position and progress.
pub fn rocket_step(
    position: Vec2,
    target: Vec2,
    speed: f32,
    progress: f32,
    epsilon: f32,
) -> (Vec2, f32) {
    let progress = progress + speed;
    let factor = speed / (1.0 - progress + epsilon);
    (position + (target - position) * factor, progress)
}

/// One interceptor tick: linear interpolation at the new progress.
/// Position is clamped to the target once progress passes 1.
pub fn interceptor_step(origin: Vec2, target: Vec2, speed: f32, progress: f32) -> (Vec2, f32) {
    let progress = progress + speed;
    (lerp(origin, target, progress.min(1.0)), progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 0.001;

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(100.0, 550.0);
        let b = Vec2::new(180.0, 300.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(140.0, 425.0));
    }

    #[test]
    fn rocket_first_step_uses_incremented_progress() {
        let start = Vec2::new(0.0, 0.0);
        let target = Vec2::new(0.0, 100.0);
        let (pos, progress) = rocket_step(start, target, 0.1, 0.0, EPS);
        assert!((progress - 0.1).abs() < 1e-6);
        // factor = 0.1 / (1 - 0.1 + 0.001)
        let expected = 100.0 * 0.1 / 0.901;
        assert!((pos.y - expected).abs() < 1e-3, "got {}", pos.y);
    }

    #[test]
    fn rocket_reaches_target_as_progress_completes() {
        let target = Vec2::new(0.0, 100.0);
        let mut pos = Vec2::ZERO;
        let mut progress = 0.0;
        let mut factors = Vec::new();
        while progress + 0.1 < 1.0 - 1e-4 {
            let before = target - pos;
            let (next, p) = rocket_step(pos, target, 0.1, progress, EPS);
            factors.push((next - pos).length() / before.length());
            pos = next;
            progress = p;
        }
        // The share of remaining distance covered grows every tick.
        assert!(factors.windows(2).all(|w| w[1] > w[0]));
        // One step short of impact only an epsilon-sized gap remains.
        assert!(pos.distance(target) < 1.0, "gap {}", pos.distance(target));
    }

    #[test]
    fn interceptor_lands_on_target() {
        let origin = Vec2::new(100.0, 550.0);
        let target = Vec2::new(180.0, 570.0);
        let mut pos = origin;
        let mut progress = 0.0;
        while progress < 1.0 {
            let (next, p) = interceptor_step(origin, target, 0.3, progress);
            pos = next;
            progress = p;
        }
        assert_eq!(pos, target);
    }

    proptest! {
        #[test]
        fn rocket_progress_strictly_increases(
            speed in 0.0001f32..0.05,
            progress in 0.0f32..0.99,
            x in 0.0f32..800.0,
            tx in 0.0f32..800.0,
        ) {
            let (_, next) = rocket_step(Vec2::new(x, 0.0), Vec2::new(tx, 570.0), speed, progress, EPS);
            prop_assert!(next > progress);
            prop_assert!((next - progress - speed).abs() < 1e-5);
        }

        #[test]
        fn rocket_stays_on_line_to_target(
            speed in 0.0001f32..0.01,
            progress in 0.0f32..0.9,
            x in 0.0f32..800.0,
            tx in 0.0f32..800.0,
        ) {
            let start = Vec2::new(x, 0.0);
            let target = Vec2::new(tx, 570.0);
            let (pos, _) = rocket_step(start, target, speed, progress, EPS);
            // Before the final approach the factor is below 1, so the rocket
            // moves toward the target without passing it.
            prop_assert!(pos.distance(target) <= start.distance(target) + 1e-3);
        }

        #[test]
        fn interceptor_stays_on_segment(
            speed in 0.001f32..0.5,
            progress in 0.0f32..1.0,
            ox in 0.0f32..800.0,
            tx in 0.0f32..800.0,
            ty in 0.0f32..600.0,
        ) {
            let origin = Vec2::new(ox, 550.0);
            let target = Vec2::new(tx, ty);
            let (pos, _) = interceptor_step(origin, target, speed, progress);
            let length = origin.distance(target);
            prop_assert!((pos.distance(origin) + pos.distance(target) - length).abs() < 1e-2);
        }
    }
}
