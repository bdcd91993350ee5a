//! Component store for the game's component kinds

use survival_engine::prelude::*;

use crate::components::{EnemyTag, Health, PlayerTag, Shape, Transform, Velocity};

/// The game's world: entity registry plus [`Components`]
pub type GameWorld = World<Components>;

/// One storage per component kind
#[derive(Debug, Default)]
pub struct Components {
    transforms: ComponentStorage<Transform>,
    velocities: ComponentStorage<Velocity>,
    shapes: ComponentStorage<Shape>,
    healths: ComponentStorage<Health>,
    players: ComponentStorage<PlayerTag>,
    enemies: ComponentStorage<EnemyTag>,
}

macro_rules! impl_storage {
    ($($kind:ty => $field:ident),* $(,)?) => {
        $(
            impl Storage<$kind> for Components {
                fn storage(&self) -> &ComponentStorage<$kind> {
                    &self.$field
                }

                fn storage_mut(&mut self) -> &mut ComponentStorage<$kind> {
                    &mut self.$field
                }
            }
        )*
    };
}

impl_storage! {
    Transform => transforms,
    Velocity => velocities,
    Shape => shapes,
    Health => healths,
    PlayerTag => players,
    EnemyTag => enemies,
}

impl ComponentStore for Components {
    fn remove_all(&mut self, entity: Entity) {
        self.transforms.remove(entity);
        self.velocities.remove(entity);
        self.shapes.remove(entity);
        self.healths.remove(entity);
        self.players.remove(entity);
        self.enemies.remove(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ShapeKind;

    fn fully_equipped(world: &mut GameWorld) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Transform::from_position(Vec2::new(1.0, 1.0)));
        world.add_component(entity, Velocity::zero());
        world.add_component(entity, Shape::circle(5.0, Color::RED));
        world.add_component(entity, Health::new(3));
        world.add_component(entity, PlayerTag);
        world.add_component(entity, EnemyTag);
        entity
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let mut world = GameWorld::new();
        let entity = fully_equipped(&mut world);

        world.components.remove::<Velocity>(entity);
        world.components.remove::<Health>(entity);

        assert!(world.components.get::<Velocity>(entity).is_none());
        assert!(world.components.get::<Health>(entity).is_none());
        assert!(world.components.get::<Transform>(entity).is_some());
    }

    #[test]
    fn test_remove_absent_kind_is_noop() {
        let mut world = GameWorld::new();
        let entity = world.create_entity();

        assert!(world.components.remove::<Shape>(entity).is_none());
        assert!(world.components.get::<Shape>(entity).is_none());
    }

    #[test]
    fn test_remove_all_clears_every_kind() {
        let mut world = GameWorld::new();
        let entity = fully_equipped(&mut world);
        let neighbour = fully_equipped(&mut world);

        world.components.remove_all(entity);

        assert!(!world.components.has::<Transform>(entity));
        assert!(!world.components.has::<Velocity>(entity));
        assert!(!world.components.has::<Shape>(entity));
        assert!(!world.components.has::<Health>(entity));
        assert!(!world.components.has::<PlayerTag>(entity));
        assert!(!world.components.has::<EnemyTag>(entity));
        assert!(world.components.has::<Transform>(neighbour));
    }

    #[test]
    fn test_add_overwrites_same_kind() {
        let mut world = GameWorld::new();
        let entity = world.create_entity();

        world.add_component(entity, Health::new(100));
        world.add_component(entity, Health::new(40));

        assert_eq!(world.get_component::<Health>(entity), Some(&Health::new(40)));
    }

    #[test]
    fn test_get_mut_returns_handle_into_store() {
        let mut world = GameWorld::new();
        let entity = fully_equipped(&mut world);

        if let Some(shape) = world.components.get_mut::<Shape>(entity) {
            shape.kind = ShapeKind::Rectangle;
        }

        assert_eq!(
            world.get_component::<Shape>(entity).map(|shape| shape.kind),
            Some(ShapeKind::Rectangle)
        );
    }
}
