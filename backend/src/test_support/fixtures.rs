//! Builders for domain values used across service and handler tests.

use std::collections::BTreeSet;

use crate::domain::{
    Email, Garden, GardenId, GardenName, Plant, PlantId, PlantName, User, UserId, Username,
};

pub fn sample_user(username: &str) -> User {
    User {
        id: UserId::random(),
        username: Username::new(username).expect("fixture username"),
        email: Email::new(format!("{username}@example.com")).expect("fixture email"),
    }
}

pub fn sample_garden(owner: UserId, name: &str, shared: &[UserId]) -> Garden {
    Garden {
        id: GardenId::random(),
        owner_id: owner,
        name: GardenName::new(name).expect("fixture garden name"),
        description: None,
        image: None,
        shared_user_ids: shared.iter().copied().collect::<BTreeSet<_>>(),
    }
}

pub fn sample_plant(garden: GardenId, name: &str) -> Plant {
    Plant {
        id: PlantId::random(),
        garden_id: garden,
        name: PlantName::new(name).expect("fixture plant name"),
        plant_type: None,
        planted_date: None,
        image: None,
    }
}
