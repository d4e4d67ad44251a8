//! Scene which is shown by the demo.

use deep_core::components::{Acceleration, Collider, Health, Transform, Velocity};
use deep_core::ecs::{DeltaTime, EcsError, World};
use deep_core::graphics::{Color, Drawable, Shape};
use deep_core::math::{Rect, Vec2};
use deep_core::Scene;

// half of the visible area, centered at the origin
const HALF_WIDTH: f32 = 70.0;
const HALF_HEIGHT: f32 = 50.0;

pub fn populate(scene: &mut Scene, center: Vec2) -> Result<(), EcsError> {
    scene.view_mut().translation = center;

    let floor = Drawable::line(
        Vec2::new(-HALF_WIDTH, HALF_HEIGHT),
        Vec2::new(HALF_WIDTH, HALF_HEIGHT),
    );
    scene.add_drawable(floor.with_color(Color::new(128, 128, 128, 255)));
    for x in (-60..=60).step_by(20) {
        let star = Drawable::pixel(Vec2::new(x as f32, -45.0));
        scene.add_drawable(star.with_color(Color::new(255, 255, 160, 255)));
    }

    let ship = scene.spawn();
    let world = scene.world_mut();
    world.attach(ship, Transform::from_translation(Vec2::new(-50.0, 0.0)))?;
    world.attach(ship, Velocity::new(25.0, 0.0))?;
    world.attach(ship, Collider::new(square(6.0)))?;
    world.attach(ship, Health::full(100))?;
    let hull = Drawable::new(Shape::equilateral(Vec2::zero(), 6.0));
    scene.attach_drawable(ship, hull.with_color(Color::new(80, 160, 255, 255)))?;

    let rock = scene.spawn();
    let world = scene.world_mut();
    world.attach(rock, Transform::from_translation(Vec2::new(0.0, -40.0)))?;
    world.attach(rock, Velocity::new(0.0, 0.0))?;
    world.attach(rock, Acceleration::new(0.0, 20.0))?;
    world.attach(rock, Collider::new(square(4.0)))?;
    let body = Drawable::triangle(
        Vec2::new(-4.0, -4.0),
        Vec2::new(4.0, -4.0),
        Vec2::new(0.0, 4.0),
    );
    scene.attach_drawable(rock, body.with_color(Color::new(200, 120, 60, 200)))?;

    scene.add_system(Box::new(wrap_around));
    Ok(())
}

fn square(half: f32) -> Rect {
    Rect::new(Vec2::broadcast(-half), Vec2::broadcast(2.0 * half))
}

/// Keeps moving entities inside of the visible area.
fn wrap_around(world: &mut World, _delta_time: DeltaTime) {
    let moving: Vec<_> = world.iter::<Velocity>().map(|(entity, _)| entity).collect();
    for entity in moving {
        if let Some(transform) = world.get_mut::<Transform>(entity) {
            let position = &mut transform.translation;
            if position.x > HALF_WIDTH - 10.0 {
                position.x = -HALF_WIDTH + 10.0;
            }
            if position.y > HALF_HEIGHT - 10.0 {
                position.y = -HALF_HEIGHT + 10.0;
            }
        }
    }
}
