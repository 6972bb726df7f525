//! Origin transform attached to mount macro calls.

/// Position and orientation of a child frame relative to its parent.
///
/// Angles are roll, pitch, yaw in radians and are carried through as given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    pub xyz: [f64; 3],
    pub rpy: [f64; 3],
}

impl Origin {
    /// The identity transform.
    pub const ZERO: Self = Self {
        xyz: [0.0; 3],
        rpy: [0.0; 3],
    };

    pub fn new(xyz: [f64; 3], rpy: [f64; 3]) -> Self {
        Self { xyz, rpy }
    }

    /// Build an origin from an optional pose; unset halves are zero.
    pub fn from_pose(xyz: Option<[f64; 3]>, rpy: Option<[f64; 3]>) -> Self {
        Self {
            xyz: xyz.unwrap_or_default(),
            rpy: rpy.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_pose_is_zero() {
        let origin = Origin::from_pose(None, None);
        assert_eq!(origin, Origin::ZERO);
        assert_eq!(origin, Origin::default());
    }

    #[test]
    fn partial_pose() {
        let origin = Origin::from_pose(Some([0.2, 0.0, 0.3]), None);
        assert_eq!(origin.xyz, [0.2, 0.0, 0.3]);
        assert_eq!(origin.rpy, [0.0; 3]);
        assert_ne!(origin, Origin::ZERO);
    }

    #[test]
    fn distinct_poses_give_distinct_origins() {
        let a = Origin::new([0.2, 0.0, 0.3], [0.0, 0.0, 0.0]);
        let b = Origin::new([0.2, 0.0, 0.3], [0.0, 0.0, 1.5708]);
        let c = Origin::new([0.0, 0.2, 0.3], [0.0, 0.0, 0.0]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn angles_pass_through() {
        let origin = Origin::new([0.0; 3], [10.0, -7.0, 100.0]);
        assert_eq!(origin.rpy, [10.0, -7.0, 100.0]);
    }
}
