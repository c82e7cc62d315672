use bcodes_core::ServiceError;

use crate::model::BuildingCode;

/// RecordStore holds the building-code collection.
///
/// The store is the sole source of identity and timestamp generation:
/// `create` assigns the id and both timestamps, `update` refreshes
/// `updated_at` and leaves `id`/`created_at` untouched.
pub trait RecordStore: Send + Sync {
    /// All records, newest created first.
    fn list(&self) -> Result<Vec<BuildingCode>, ServiceError>;

    /// Fetch one record by id.
    fn get(&self, id: &str) -> Result<BuildingCode, ServiceError>;

    /// Create a record. Fails with `Validation` if either field is empty.
    fn create(&self, building_name: &str, code: &str) -> Result<BuildingCode, ServiceError>;

    /// Replace both fields of an existing record.
    fn update(&self, id: &str, building_name: &str, code: &str)
        -> Result<BuildingCode, ServiceError>;

    /// Delete a record by id.
    fn delete(&self, id: &str) -> Result<(), ServiceError>;
}
