#![cfg(test)]

use crate::{ComponentInfo, EcsError};

use super::World;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Velocity(f32, f32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Health(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Collider;

#[test]
fn test_create_destroy() {
    let mut world = World::new();
    let entity = world.create();
    assert!(world.is_alive(entity));
    assert_eq!(world.len(), 1);

    assert_eq!(world.destroy(entity), Ok(()));
    assert!(!world.is_alive(entity));
    assert!(world.is_empty());
}

#[test]
fn test_destroy_twice() {
    let mut world = World::new();
    let entity = world.create();
    world.destroy(entity).unwrap();

    assert_eq!(world.destroy(entity), Err(EcsError::InvalidEntity(entity)));
}

#[test]
fn test_destroy_unknown() {
    let mut world = World::new();
    let mut other = World::new();
    other.create();
    let foreign = other.create();

    assert_eq!(world.destroy(foreign), Err(EcsError::InvalidEntity(foreign)));
    assert!(world.is_empty());
}

#[test]
fn test_destroyed_entities_are_absent_from_every_store() {
    let mut world = World::new();
    let entities: Vec<_> = (0..50).map(|_| world.create()).collect();
    for (index, &entity) in entities.iter().enumerate() {
        world.attach(entity, Velocity(index as f32, 0.0)).unwrap();
        if index % 2 == 0 {
            world.attach(entity, Health(index as u32)).unwrap();
        }
        if index % 3 == 0 {
            world.attach(entity, Collider).unwrap();
        }
    }

    for &entity in entities.iter().step_by(4) {
        world.destroy(entity).unwrap();
    }

    for (index, &entity) in entities.iter().enumerate() {
        let destroyed = index % 4 == 0;
        assert_eq!(world.get::<Velocity>(entity).is_none(), destroyed);
        if destroyed {
            assert!(world.get::<Health>(entity).is_none());
            assert!(world.get::<Collider>(entity).is_none());
            assert!(world.iter::<Velocity>().all(|(e, _)| e != entity));
        }
    }
    assert_eq!(world.iter::<Velocity>().count(), 50 - 13);
}

#[test]
fn test_identifier_is_not_reused() {
    let mut world = World::new();
    let old = world.create();
    world.attach(old, Health(1)).unwrap();
    world.destroy(old).unwrap();

    let new = world.create();
    assert_ne!(old, new);
    assert!(!world.is_alive(old));
    assert_eq!(world.attach(old, Health(2)), Err(EcsError::InvalidEntity(old)));
    assert!(world.get::<Health>(new).is_none());
}

#[test]
fn test_attach_detach() {
    let mut world = World::new();
    let entity = world.create();

    assert_eq!(world.attach(entity, Health(10)), Ok(None));
    assert_eq!(world.attach(entity, Health(8)), Ok(Some(Health(10))));
    assert!(world.attached::<Health>(entity));
    assert!(!world.attached::<Velocity>(entity));

    world.get_mut::<Health>(entity).unwrap().0 -= 3;
    assert_eq!(world.get::<Health>(entity), Some(&Health(5)));

    assert_eq!(world.detach::<Health>(entity), Ok(Some(Health(5))));
    assert_eq!(world.detach::<Health>(entity), Ok(None));
    assert_eq!(world.detach::<Velocity>(entity), Ok(None));
}

#[test]
fn test_stores_are_independent() {
    let mut world = World::new();
    let entity = world.create();
    world.attach(entity, Velocity(1.0, 0.0)).unwrap();
    world.attach(entity, Collider).unwrap();

    world.detach::<Velocity>(entity).unwrap();
    assert!(world.attached::<Collider>(entity));

    let kinds = world.components_of(entity).unwrap();
    assert_eq!(kinds, vec![ComponentInfo::of::<Collider>()]);
}

#[test]
fn test_component_info() {
    let mut world = World::new();
    assert_eq!(world.component_info::<Health>(), None);
    let info = world.register::<Health>();
    assert_eq!(world.component_info::<Health>(), Some(info));
    assert_eq!(world.iter::<Health>().count(), 0);
}

#[test]
fn test_clear() {
    let mut world = World::new();
    let entities: Vec<_> = (0..10).map(|_| world.create()).collect();
    for &entity in &entities {
        world.attach(entity, Health(1)).unwrap();
    }
    world.clear();

    assert!(world.is_empty());
    assert_eq!(world.storage::<Health>().map(|s| s.len()), Some(0));
    assert!(entities.iter().all(|&e| !world.is_alive(e)));
}
