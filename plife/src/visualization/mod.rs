pub mod particle_vis2d;
