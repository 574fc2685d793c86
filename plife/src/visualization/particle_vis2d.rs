use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowMode;

use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct ParticleIndex(pub usize);

const PARTICLE_RADIUS: f32 = 2.5;

/// Open a window sized to the world and run the scenario, one tick per frame.
///
/// Keys: `R` randomize, `Space` pause/resume, `F` fullscreen.
pub fn run_2d(scenario: Scenario) {
    let torus = *scenario.world.torus();
    tracing::info!(
        "run_2d: starting Bevy 2D viewer with {} particles",
        scenario.world.particles().len()
    );

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "plife".into(),
                        resolution: (torus.width as f32, torus.height as f32).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // the binary already installed a tracing subscriber
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (input_system, physics_step_system, sync_transforms_system).chain())
        .run();
}

/// Hue band per type, evenly split around the color wheel.
fn type_color(kind: usize, num_types: usize) -> Color {
    let step = 360.0 / num_types as f32;
    Color::hsl(kind as f32 * step, 1.0, 0.5)
}

/// World coordinates have the origin top-left with y down; Bevy 2D has it
/// centered with y up.
fn to_screen(x: f64, y: f64, width: f64, height: f64) -> Vec2 {
    Vec2::new((x - 0.5 * width) as f32, (0.5 * height - y) as f32)
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let world = &scenario.world;
    let torus = world.torus();
    let num_types = world.num_types();

    let mesh = Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS)));
    let palette: Vec<Handle<ColorMaterial>> = (0..num_types)
        .map(|kind| materials.add(ColorMaterial::from(type_color(kind, num_types))))
        .collect();

    for (i, p) in world.particles().iter().enumerate() {
        let pos = to_screen(p.x.x, p.x.y, torus.width, torus.height);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: palette[p.kind].clone(),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn input_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>, mut windows: Query<&mut Window>) {
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.world.randomize();
    }
    if keys.just_pressed(KeyCode::Space) {
        scenario.world.toggle_pause();
    }
    if keys.just_pressed(KeyCode::KeyF) {
        for mut window in &mut windows {
            window.mode = match window.mode {
                WindowMode::Windowed => WindowMode::BorderlessFullscreen,
                _ => WindowMode::Windowed,
            };
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.advance();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    let world = &scenario.world;
    let torus = world.torus();
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(p) = world.particles().get(*i) {
            let pos = to_screen(p.x.x, p.x.y, torus.width, torus.height);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}
