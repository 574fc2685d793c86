use std::time::Instant;

use crate::simulation::engine::{World, WorldSettings};

/// Time the dense all-pairs step for growing populations.
/// Prints CSV so it can be pasted straight into a spreadsheet.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];

    println!("N,step_ms");

    for n in ns {
        // small n: average over more steps to smooth noise
        let steps = if n <= 800 { 20 } else { 3 };

        let settings = WorldSettings {
            num_particles: n,
            seed: Some(42),
            ..WorldSettings::default()
        };
        let mut world = match World::new(&settings) {
            Ok(world) => world,
            Err(e) => {
                tracing::error!("bench_step: {e}");
                return;
            }
        };

        // Warm up
        world.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            world.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
