#![cfg(test)]

use super::{super::EntityStorage, *};

#[derive(Debug, PartialEq)]
struct Health(u32);

#[test]
fn test_attach_detach() {
    let mut entities = EntityStorage::with_key();
    let mut storage = ComponentStorage::new();

    let entity = entities.insert(());
    let component = "foo";

    assert_eq!(storage.attach(entity, component), None);
    assert!(storage.attached(entity));
    assert_eq!(storage.get(entity), Some(&"foo"));

    assert_eq!(storage.detach(entity), Some("foo"));
    assert!(!storage.attached(entity));
    assert_eq!(storage.get(entity), None);
    assert!(storage.is_empty());
}

#[test]
fn test_attach_replaces() {
    let mut entities = EntityStorage::with_key();
    let mut storage = ComponentStorage::new();

    let entity1 = entities.insert(());
    let entity2 = entities.insert(());

    storage.attach(entity1, Health(10));
    storage.attach(entity2, Health(20));
    let prev = storage.attach(entity1, Health(5));

    assert_eq!(prev, Some(Health(10)));
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.get(entity1), Some(&Health(5)));
    assert_eq!(storage.get(entity2), Some(&Health(20)));
}

#[test]
fn test_get_mut() {
    let mut entities = EntityStorage::with_key();
    let mut storage = ComponentStorage::new();

    let entity = entities.insert(());
    storage.attach(entity, 0);
    *storage.get_mut(entity).unwrap() = 1;
    assert_eq!(storage.get(entity), Some(&1));

    let entity = entities.insert(());
    assert_eq!(storage.get_mut(entity), None);
}

#[test]
fn test_iterator() {
    let mut entities = EntityStorage::with_key();
    let mut storage = ComponentStorage::new();

    let created: Vec<_> = (0..100)
        .map(|int| {
            let entity = entities.insert(());
            storage.attach(entity, int);
            entity
        })
        .collect();

    for (_, component) in storage.iter_mut() {
        *component += 10;
    }
    let mut values: Vec<_> = storage.components().copied().collect();
    values.sort_unstable();
    assert_eq!(values, (10..110).collect::<Vec<_>>());

    for (entity, component) in storage.iter() {
        let index = created.iter().position(|&e| e == entity).unwrap();
        assert_eq!(*component, index as i32 + 10);
    }
    // iteration is restartable and does not consume the storage
    assert_eq!(storage.iter().count(), 100);
    assert_eq!(storage.entities().count(), 100);
}

#[test]
fn test_manager_remove_all() {
    let mut entities = EntityStorage::with_key();
    let mut manager = ComponentManager::new();

    let entity = entities.insert(());
    let other = entities.insert(());
    manager.insert(entity, Health(3));
    manager.insert(entity, 1.5_f32);
    manager.insert(other, Health(7));

    assert_eq!(manager.attached_infos(entity).len(), 2);
    assert_eq!(manager.remove_all(entity), 2);
    assert!(!manager.attached::<Health>(entity));
    assert!(!manager.attached::<f32>(entity));
    assert_eq!(manager.get::<Health>(other), Some(&Health(7)));
}

#[test]
fn test_component_info() {
    let mut manager = ComponentManager::new();
    assert_eq!(manager.info::<Health>(), None);

    let info = manager.register::<Health>();
    assert_eq!(info, ComponentInfo::of::<Health>());
    assert_eq!(info.size(), std::mem::size_of::<u32>());
    assert!(info.name().ends_with("Health"));
    assert_eq!(manager.register::<Health>(), info);
    assert_eq!(manager.infos().count(), 1);
}
