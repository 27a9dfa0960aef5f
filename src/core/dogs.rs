use crate::core::ledger::dog_not_found;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::dog::{Dog, NewDog};

/// Dog registration and lookup.
pub struct DogRegistry;

impl DogRegistry {
    pub fn create_dog(pool: &mut DbPool, dog: &NewDog) -> AppResult<Dog> {
        let name = dog.name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument("Dog name cannot be empty".into()));
        }

        let record = NewDog {
            name: name.to_string(),
            breed: dog.breed.clone(),
            owner_name: dog.owner_name.clone(),
        };

        let tx = pool.conn.transaction()?;
        let id = queries::insert_dog(&tx, &record)?;
        ttlog(&tx, "dog_add", &format!("dog {id}"), &format!("Registered '{name}'"))?;
        let created = queries::load_dog(&tx, id)?.ok_or_else(|| dog_not_found(id))?;
        tx.commit()?;

        log::info!("Created dog {id} ({name})");
        Ok(created)
    }

    pub fn get_dog(pool: &mut DbPool, dog_id: i64) -> AppResult<Dog> {
        queries::load_dog(&pool.conn, dog_id)?.ok_or_else(|| dog_not_found(dog_id))
    }

    pub fn list_dogs(pool: &mut DbPool, skip: usize, limit: usize) -> AppResult<Vec<Dog>> {
        Ok(queries::list_dogs(&pool.conn, skip, limit)?)
    }
}
