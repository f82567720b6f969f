use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::ViewConfig;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct DistanceLabel(pub usize);

const LABEL_OFFSET: f32 = 12.0; // pixels above the body's circle

pub fn run_2d(scenario: Scenario, view: ViewConfig) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .insert_resource(view.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: (view.width, view.height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_trails_system, update_labels_system))
        .run();
}

/// Simulation coordinates (meters, origin at the reference point) to screen
/// coordinates. The camera sits on the origin, so world position times scale
/// lands the reference point at the viewport center.
fn to_screen(x: &NVec2, scale: f64) -> Vec2 {
    Vec2::new((x.x * scale) as f32, (x.y * scale) as f32)
}

fn body_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, view: Res<ViewConfig>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let scale = view.scale();
    let has_primary = scenario.system.primary_index().is_some();

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let pos = to_screen(&body.x, scale);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius))),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Distance readout for every body except the primary itself
        if has_primary && !body.primary {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section("", TextStyle {
                        font_size: 14.0,
                        color: Color::WHITE,
                        ..Default::default()
                    }),
                    transform: Transform::from_xyz(pos.x, pos.y + body.radius + LABEL_OFFSET, 1.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // One fixed step per frame; the frame clock paces the simulation
    scenario.advance();
}

fn sync_transforms_system(scenario: Res<Scenario>, view: Res<ViewConfig>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = view.scale();
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_screen(&b.x, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, view: Res<ViewConfig>, mut gizmos: Gizmos) {
    let scale = view.scale();
    for body in &scenario.system.bodies {
        // A single point cannot form a line segment
        if body.trail.len() < 2 {
            continue;
        }
        let points = body.trail.iter().map(|x| to_screen(x, scale));
        gizmos.linestrip_2d(points, body_color(body.color));
    }
}

fn update_labels_system(scenario: Res<Scenario>, view: Res<ViewConfig>, mut query: Query<(&DistanceLabel, &mut Transform, &mut Text)>) {
    let scale = view.scale();
    for (DistanceLabel(i), mut transform, mut text) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_screen(&b.x, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y + b.radius + LABEL_OFFSET;
            text.sections[0].value = format!("{:.1} km", b.distance_to_primary / 1000.0);
        }
    }
}
