use tracing::{debug, info};

use bcodes_core::ServiceError;
use bcodes_store::{BuildingCode, RecordStore};

/// Registry service — translates API operations into store calls.
///
/// No business logic lives here beyond what the store enforces; the
/// service adds logging and owns the store handle.
pub struct RegistryService {
    store: Box<dyn RecordStore>,
}

impl RegistryService {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn list_codes(&self) -> Result<Vec<BuildingCode>, ServiceError> {
        debug!("listing building codes");
        self.store.list()
    }

    pub fn get_code(&self, id: &str) -> Result<BuildingCode, ServiceError> {
        debug!("fetching building code {}", id);
        self.store.get(id)
    }

    pub fn create_code(
        &self,
        building_name: &str,
        code: &str,
    ) -> Result<BuildingCode, ServiceError> {
        let record = self.store.create(building_name, code)?;
        info!("created building code {}", record.id);
        Ok(record)
    }

    pub fn update_code(
        &self,
        id: &str,
        building_name: &str,
        code: &str,
    ) -> Result<BuildingCode, ServiceError> {
        let record = self.store.update(id, building_name, code)?;
        info!("updated building code {}", record.id);
        Ok(record)
    }

    pub fn delete_code(&self, id: &str) -> Result<(), ServiceError> {
        self.store.delete(id)?;
        info!("deleted building code {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcodes_store::SqliteStore;

    fn test_service() -> RegistryService {
        let store = Box::new(SqliteStore::open_in_memory().unwrap());
        RegistryService::new(store)
    }

    #[test]
    fn test_code_crud() {
        let svc = test_service();

        let created = svc.create_code("City Hall", "CH-100").unwrap();
        assert_eq!(created.building_name, "City Hall");
        assert_eq!(created.code, "CH-100");

        // Get
        let fetched = svc.get_code(&created.id).unwrap();
        assert_eq!(fetched, created);

        // List
        let all = svc.list_codes().unwrap();
        assert_eq!(all.len(), 1);

        // Update
        let updated = svc.update_code(&created.id, "Town Hall", "TH-200").unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.building_name, "Town Hall");

        // Delete
        svc.delete_code(&created.id).unwrap();
        let err = svc.get_code(&created.id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn test_create_requires_both_fields() {
        let svc = test_service();
        assert!(matches!(
            svc.create_code("", "CH-100").unwrap_err(),
            ServiceError::Validation(_)
        ));
        assert!(matches!(
            svc.create_code("City Hall", "").unwrap_err(),
            ServiceError::Validation(_)
        ));
    }
}
