use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::engine::Engine;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Screen pixels per stored position unit.
const SCALE: f32 = 2.0;
/// Wall-clock seconds between physics ticks. The simulated step per
/// tick is `parameters.dt` regardless of real frame jitter.
const TICK_SECONDS: f64 = 0.015;
/// Gizmo length scale for the acceleration overlay.
const VECTOR_SCALE: f32 = 5e4;

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_seconds(TICK_SECONDS))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (reset_on_click_system, sync_transforms_system, accel_overlay_system),
        )
        .run();
}

/// Disc radius in pixels: constant, or log-mass scaled above 1e20 kg.
fn body_radius(engine: &Engine, mass: f64) -> f32 {
    if engine.mass_radius_scaling {
        let scaled = engine.min_radius + engine.radius_scale * (mass.log10() as f32 - 20.0);
        scaled.max(engine.min_radius)
    } else {
        engine.min_radius
    }
}

fn spawn_bodies(
    commands: &mut Commands,
    scenario: &Scenario,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = body_radius(&scenario.engine, body.m);
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::WHITE)),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera, origin at the screen center
    commands.spawn(Camera2dBundle::default());

    spawn_bodies(&mut commands, &scenario, &mut meshes, &mut materials);
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    euler_integrator(system, forces, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            // Diverged bodies (zero mass, coincident pairs) go
            // non-finite; leave their discs where they were rather
            // than feed NaN into the transform.
            if !b.x.x.is_finite() || !b.x.y.is_finite() {
                continue;
            }
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}

/// Left click reseeds the scenario. The swap happens between physics
/// ticks (both systems take the scenario resource exclusively), so the
/// integrator never observes a half-replaced system.
fn reset_on_click_system(
    mut commands: Commands,
    mut scenario: ResMut<Scenario>,
    buttons: Res<ButtonInput<MouseButton>>,
    bodies: Query<Entity, With<BodyIndex>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    scenario.reseed();

    for entity in &bodies {
        commands.entity(entity).despawn();
    }
    spawn_bodies(&mut commands, &scenario, &mut meshes, &mut materials);
}

/// Draw each body's last applied acceleration as an arrow. Off by
/// default; enabled with `render.vector_overlay`.
fn accel_overlay_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.engine.vector_overlay {
        return;
    }

    for b in &scenario.system.bodies {
        let from = Vec2::new(b.x.x as f32, b.x.y as f32) * SCALE;
        let accel = Vec2::new(b.a.x as f32, b.a.y as f32) * VECTOR_SCALE;
        if !from.is_finite() || !accel.is_finite() {
            continue;
        }
        gizmos.arrow_2d(from, from + accel, Color::RED);
    }
}
