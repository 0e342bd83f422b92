//! Boss drawing (render-only).
//!
//! Mirrors `BossEncounter::render_state` onto two small entity trees every frame:
//! - the hull, which follows the boss (shadow, body, tier details, shield ring)
//! - the HUD, fixed at the top of the arena (name, health bar, `hp/max` label)
//!
//! Both trees are tagged with the boss id they were built for. A different id (or no boss) means
//! they are stale and get despawned; the next frame builds fresh ones. Nothing here writes back
//! into the encounter.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::arena::Arena;
use crate::common::state::GameState;

use super::encounter::BossEncounter;
use super::instance::BossId;
use super::presentation::{
    BossRenderState, HEALTH_BAR_SIZE, HEALTH_BAR_Y, NAME_Y, SHADOW_OFFSET, SHIELD_RING_GAP,
};
use super::tier::ShapeCategory;

const HULL_Z: f32 = 5.0;
const WARNING_Z: f32 = 4.0;
const HUD_Z: f32 = 50.0;

const SHADOW_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.3);
const DETAIL_COLOR: Color = Color::WHITE;
const SHIELD_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);
const SHIELD_STROKE: f32 = 5.0;
const CORE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const CORE_RADIUS: f32 = 30.0;
const TURRET_REACH: f32 = 40.0;
const TURRET_SIZE: f32 = 10.0;
const WARNING_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.5);

const BAR_FRAME_PAD: f32 = 5.0;
const BAR_FRAME_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
const BAR_BACK_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

/// Root of one drawn tree, tied to the boss it was built for.
#[derive(Component)]
pub struct BossVisual {
    pub id: BossId,
}

#[derive(Component)]
struct BossHull;

#[derive(Component)]
struct BossShadow;

#[derive(Component)]
struct ShieldRing;

#[derive(Component)]
struct WarningStrip;

#[derive(Component)]
struct HealthBarFill;

#[derive(Component)]
struct HealthBarLabel;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            despawn_stale_visuals,
            spawn_boss_visuals,
            sync_hull,
            sync_health_bar,
            sync_warning_strips,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}

// -----------------------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------------------

fn despawn_stale_visuals(
    mut commands: Commands,
    encounter: Res<BossEncounter>,
    q: Query<(Entity, &BossVisual)>,
) {
    let live = encounter.boss().map(|b| b.id);
    for (e, visual) in &q {
        if live != Some(visual.id) {
            commands.entity(e).despawn();
        }
    }
}

fn spawn_boss_visuals(
    mut commands: Commands,
    encounter: Res<BossEncounter>,
    arena: Res<Arena>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q: Query<&BossVisual>,
) {
    let (Some(boss), Some(state)) = (encounter.boss(), encounter.render_state()) else {
        return;
    };
    if q.iter().any(|v| v.id == boss.id) {
        return;
    }

    spawn_hull(&mut commands, boss.id, &state, *arena, &mut meshes, &mut materials);
    spawn_hud(&mut commands, boss.id, &state, *arena);
}

fn spawn_hull(
    commands: &mut Commands,
    id: BossId,
    state: &BossRenderState<'_>,
    arena: Arena,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    let size = state.size;
    let half = size * 0.5;
    let body = materials.add(ColorMaterial::from_color(state.color));
    let ring_radius = half.x + SHIELD_RING_GAP;

    let center = arena.rect_center_to_world(state.pos, size);

    commands
        .spawn((
            Name::new(format!("Boss {}", state.name)),
            BossVisual { id },
            BossHull,
            Transform::from_translation(center.extend(HULL_Z)),
            Visibility::default(),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|hull| {
            hull.spawn((
                BossShadow,
                Sprite::from_color(SHADOW_COLOR, size),
                Transform::from_xyz(SHADOW_OFFSET.x, -SHADOW_OFFSET.y, -0.1),
            ));

            for (mesh, offset) in body_pieces(state.shape, size) {
                hull.spawn((
                    Mesh2d(meshes.add(mesh)),
                    MeshMaterial2d(body.clone()),
                    Transform::from_translation(offset.extend(0.0)),
                ));
            }

            match state.shape {
                ShapeCategory::Triangle => {
                    hull.spawn((
                        Sprite::from_color(DETAIL_COLOR, Vec2::new(10.0, 20.0)),
                        Transform::from_xyz(0.0, -half.y + 10.0, 0.1),
                    ));
                }
                ShapeCategory::Hexagon => {
                    for i in 0..3 {
                        let x = -half.x + 24.0 + i as f32 * 30.0;
                        hull.spawn((
                            Sprite::from_color(DETAIL_COLOR, Vec2::new(8.0, 15.0)),
                            Transform::from_xyz(x, -half.y + 7.5, 0.1),
                        ));
                    }
                }
                ShapeCategory::Circle => {
                    hull.spawn((
                        ShieldRing,
                        Mesh2d(meshes.add(Annulus::new(
                            ring_radius - SHIELD_STROKE * 0.5,
                            ring_radius + SHIELD_STROKE * 0.5,
                        ))),
                        MeshMaterial2d(materials.add(ColorMaterial::from_color(SHIELD_COLOR))),
                        Transform::from_xyz(0.0, 0.0, 0.2),
                        Visibility::Hidden,
                    ));
                }
                ShapeCategory::Fortress => {
                    hull.spawn((
                        Mesh2d(meshes.add(Circle::new(CORE_RADIUS))),
                        MeshMaterial2d(materials.add(ColorMaterial::from_color(CORE_COLOR))),
                        Transform::from_xyz(0.0, 0.0, 0.1),
                    ));
                    for i in 0..4 {
                        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
                        let offset = Vec2::from_angle(angle) * TURRET_REACH;
                        hull.spawn((
                            Sprite::from_color(DETAIL_COLOR, Vec2::splat(TURRET_SIZE)),
                            Transform::from_translation(offset.extend(0.2)),
                        ));
                    }
                }
            }
        });
}

/// Body meshes for a shape, with offsets from the hull center (world axes, +y up).
fn body_pieces(shape: ShapeCategory, size: Vec2) -> Vec<(Mesh, Vec2)> {
    let half = size * 0.5;
    match shape {
        // Apex at the top edge, base along the bottom.
        ShapeCategory::Triangle => vec![(
            Triangle2d::new(
                Vec2::new(0.0, half.y),
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
            )
            .into(),
            Vec2::ZERO,
        )],
        // Pointy-top hexagon: two caps around a band a third of the height tall.
        ShapeCategory::Hexagon => {
            let band = size.y / 6.0;
            vec![
                (
                    Triangle2d::new(
                        Vec2::new(0.0, half.y),
                        Vec2::new(-half.x, band),
                        Vec2::new(half.x, band),
                    )
                    .into(),
                    Vec2::ZERO,
                ),
                (Rectangle::new(size.x, band * 2.0).into(), Vec2::ZERO),
                (
                    Triangle2d::new(
                        Vec2::new(0.0, -half.y),
                        Vec2::new(half.x, -band),
                        Vec2::new(-half.x, -band),
                    )
                    .into(),
                    Vec2::ZERO,
                ),
            ]
        }
        ShapeCategory::Circle => vec![(Circle::new(half.x).into(), Vec2::ZERO)],
        ShapeCategory::Fortress => vec![(Rectangle::from_size(size).into(), Vec2::ZERO)],
    }
}

fn spawn_hud(commands: &mut Commands, id: BossId, state: &BossRenderState<'_>, arena: Arena) {
    let bar_top_left = Vec2::new((arena.width - HEALTH_BAR_SIZE.x) * 0.5, HEALTH_BAR_Y);
    let bar_center = arena.rect_center_to_world(bar_top_left, HEALTH_BAR_SIZE);
    let name_at = arena.to_world(Vec2::new(arena.width * 0.5, NAME_Y)) - bar_center;

    commands
        .spawn((
            Name::new("BossHud"),
            BossVisual { id },
            Transform::from_translation(bar_center.extend(HUD_Z)),
            Visibility::default(),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|hud| {
            hud.spawn((
                Sprite::from_color(
                    BAR_FRAME_COLOR,
                    HEALTH_BAR_SIZE + Vec2::splat(BAR_FRAME_PAD * 2.0),
                ),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));
            hud.spawn((
                Sprite::from_color(BAR_BACK_COLOR, HEALTH_BAR_SIZE),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
            hud.spawn((
                HealthBarFill,
                Sprite::from_color(state.health.color.color(), HEALTH_BAR_SIZE),
                Transform::from_xyz(0.0, 0.0, 0.2),
            ));
            hud.spawn((
                HealthBarLabel,
                Text2d::new(state.health.label.clone()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 0.3),
            ));
            hud.spawn((
                Text2d::new(state.name),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_translation(name_at.extend(0.3)),
            ));
        });
}

// -----------------------------------------------------------------------------
// Per-frame sync
// -----------------------------------------------------------------------------

fn sync_hull(
    encounter: Res<BossEncounter>,
    arena: Res<Arena>,
    mut q_hull: Query<&mut Transform, With<BossHull>>,
    mut q_shadow: Query<&mut Visibility, (With<BossShadow>, Without<ShieldRing>)>,
    mut q_ring: Query<&mut Visibility, (With<ShieldRing>, Without<BossShadow>)>,
) {
    let Some(state) = encounter.render_state() else {
        return;
    };

    let center = arena.rect_center_to_world(state.pos, state.size);
    for mut tf in &mut q_hull {
        tf.translation.x = center.x;
        tf.translation.y = center.y;
    }

    let shadow = if state.casts_shadow() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut vis in &mut q_shadow {
        vis.set_if_neq(shadow);
    }

    let ring = if state.shield_ring_radius().is_some() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut vis in &mut q_ring {
        vis.set_if_neq(ring);
    }
}

fn sync_health_bar(
    encounter: Res<BossEncounter>,
    mut q_fill: Query<(&mut Sprite, &mut Transform), With<HealthBarFill>>,
    mut q_label: Query<&mut Text2d, With<HealthBarLabel>>,
) {
    let Some(state) = encounter.render_state() else {
        return;
    };

    let width = HEALTH_BAR_SIZE.x * state.health.fill();
    for (mut sprite, mut tf) in &mut q_fill {
        sprite.custom_size = Some(Vec2::new(width, HEALTH_BAR_SIZE.y));
        sprite.color = state.health.color.color();
        // Grow from the left edge.
        tf.translation.x = (width - HEALTH_BAR_SIZE.x) * 0.5;
    }

    for mut text in &mut q_label {
        if text.0 != state.health.label {
            text.0.clone_from(&state.health.label);
        }
    }
}

/// Warning lines are short-lived and few; rebuild them from the snapshot every frame.
fn sync_warning_strips(
    mut commands: Commands,
    encounter: Res<BossEncounter>,
    arena: Res<Arena>,
    q: Query<Entity, With<WarningStrip>>,
) {
    for e in &q {
        commands.entity(e).despawn();
    }

    let Some(state) = encounter.render_state() else {
        return;
    };

    for line in state.warning_lines {
        let size = Vec2::new(line.width, line.height);
        let top_left = Vec2::new(line.x - line.width * 0.5, line.y);
        let center = arena.rect_center_to_world(top_left, size);
        commands.spawn((
            WarningStrip,
            Sprite::from_color(WARNING_COLOR, size),
            Transform::from_translation(center.extend(WARNING_Z)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
