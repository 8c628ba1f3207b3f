//! Unit tests for dr-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "node 7");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(350.0, 120.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn heading_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        // East (positive x) is heading 0.
        assert!((origin.heading_to(Point::new(10.0, 0.0)) - 0.0).abs() < 1e-6);
        // Screen-down (positive y) is +π/2.
        let down = origin.heading_to(Point::new(0.0, 10.0));
        assert!((down - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        // West is ±π.
        let west = origin.heading_to(Point::new(-10.0, 0.0));
        assert!((west.abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(100.0, 200.0);
        let b = Point::new(300.0, 600.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 200.0).abs() < 1e-4);
        assert!((mid.y - 400.0).abs() < 1e-4);
    }
}

#[cfg(test)]
mod rng {
    use crate::EngineRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = EngineRng::new(42);
        let mut b = EngineRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = EngineRng::new(1);
        let mut b = EngineRng::new(2);
        let draws_a: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn child_streams_replay_and_differ_by_offset() {
        let mut a = EngineRng::new(42);
        let mut b = EngineRng::new(42);
        let mut child_a = a.child(1);
        let mut child_b = b.child(1);
        for _ in 0..8 {
            assert_eq!(
                child_a.gen_range(0..u32::MAX),
                child_b.gen_range(0..u32::MAX)
            );
        }

        let mut c = EngineRng::new(42);
        let mut other = c.child(2);
        let draws_1: Vec<u32> = (0..8).map(|_| child_a.gen_range(0..u32::MAX)).collect();
        let draws_2: Vec<u32> = (0..8).map(|_| other.gen_range(0..u32::MAX)).collect();
        assert_ne!(draws_1, draws_2);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = EngineRng::new(7);
        for _ in 0..100 {
            let v = rng.gen_range(0..=4usize);
            assert!(v <= 4);
        }
    }
}
