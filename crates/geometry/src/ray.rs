use nalgebra_glm::Vec3;

use crate::AABB;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    direction_inverse: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        assert!(!direction.x.is_nan());
        assert!(!direction.y.is_nan());
        assert!(!direction.z.is_nan());
        assert!(direction.norm() > 0.0);

        let direction = direction.normalize();

        Self {
            origin,
            direction,
            direction_inverse: Vec3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z),
        }
    }

    pub fn point_on_ray(&self, distance: f32) -> Vec3 {
        self.origin + distance * self.direction
    }

    /// Slab test against the box bounds derived from its center and
    /// half-extents. Returns the entry distance on a hit, which is
    /// negative when the origin already sits inside the box.
    pub fn collides_with_aabb(&self, aabb: &AABB) -> Option<f32> {
        let min = aabb.position() - aabb.dimensions();
        let max = aabb.position() + aabb.dimensions();

        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;

        for axis in 0..3 {
            let t1 = (min[axis] - self.origin[axis]) * self.direction_inverse[axis];
            let t2 = (max[axis] - self.origin[axis]) * self.direction_inverse[axis];

            tmin = tmin.max(t1.min(t2));
            tmax = tmax.min(t1.max(t2));
        }

        (tmax >= tmin).then_some(tmin)
    }
}
