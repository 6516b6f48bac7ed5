use geometry::{check_for_intersection, GeometryError, Ray, AABB};
use logging::{elog, log, LOG_GEOM, LOG_VIEWER};
use nalgebra_glm::Vec3;
use rand::{thread_rng, Rng};

const CHUNKS_PER_AXIS: i32 = 4;
const CHUNK_HALF_SIZE: f32 = 8.0;

// Roughly humanoid probe volume.
const PROBE_DIMENSIONS: (f32, f32, f32) = (0.4, 0.9, 0.4);

/// One layer of chunk bounding boxes, centers on the ground grid.
fn chunk_grid() -> Result<Vec<AABB>, GeometryError> {
    let mut chunks = Vec::with_capacity((CHUNKS_PER_AXIS * CHUNKS_PER_AXIS) as usize);

    for x in 0..CHUNKS_PER_AXIS {
        for z in 0..CHUNKS_PER_AXIS {
            let center = Vec3::new(
                (2 * x + 1) as f32 * CHUNK_HALF_SIZE,
                CHUNK_HALF_SIZE,
                (2 * z + 1) as f32 * CHUNK_HALF_SIZE,
            );

            chunks.push(AABB::new(
                center,
                Vec3::new(CHUNK_HALF_SIZE, CHUNK_HALF_SIZE, CHUNK_HALF_SIZE),
            )?);
        }
    }

    Ok(chunks)
}

fn main() -> Result<(), GeometryError> {
    let chunks = chunk_grid()?;
    let world_size = 2.0 * CHUNK_HALF_SIZE * CHUNKS_PER_AXIS as f32;

    let mut rng = thread_rng();
    let probe_center = Vec3::new(
        rng.gen_range(0.0..world_size),
        rng.gen_range(0.0..2.0 * CHUNK_HALF_SIZE),
        rng.gen_range(0.0..world_size),
    );

    let (width, height, depth) = PROBE_DIMENSIONS;
    let probe = AABB::new(probe_center, Vec3::new(width, height, depth))?;

    log!(*LOG_VIEWER, "probe box at {:?}", probe.position());

    for chunk in &chunks {
        if check_for_intersection(&probe, chunk) {
            log!(*LOG_GEOM, "probe overlaps chunk at {:?}", chunk.position());

            if chunk.inside(probe.position()) {
                let normal = chunk.closest_normal_to_point(probe.position());
                log!(*LOG_GEOM, "push-out normal {:?}", normal);
            }
        }
    }

    let ray = Ray::new(
        probe_center,
        Vec3::new(rng.gen_range(-1.0..1.0), -1.0, rng.gen_range(-1.0..1.0)),
    );

    let entry = chunks
        .iter()
        .filter_map(|chunk| ray.collides_with_aabb(chunk))
        .fold(f32::INFINITY, f32::min);

    if entry.is_finite() {
        log!(
            *LOG_VIEWER,
            "ray enters the world after {:.2} at {:?}",
            entry,
            ray.point_on_ray(entry)
        );
    } else {
        elog!(*LOG_VIEWER, "ray left the world");
    }

    Ok(())
}
