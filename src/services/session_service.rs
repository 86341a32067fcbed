// ============================================================================
// SESSION SERVICE - Resolución pura de sesión
// ============================================================================
// La decisión de redirigir la toma el hook a partir del resultado etiquetado;
// aquí no hay side effects de navegación ni de UI.
// ============================================================================

use crate::models::DealerRecord;
use crate::services::directory::DirectoryApi;
use crate::utils::constants::{STORAGE_KEY_DEALER_ID, STORAGE_KEY_DEALER_NAME};
use crate::utils::SessionStore;

/// Resultado de resolver la sesión persistida.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionOutcome {
    Authenticated {
        dealer_id: String,
        dealer_name: String,
    },
    Unauthenticated,
}

/// Resuelve la sesión persistida contra el Directory Service.
///
/// - Sin `dealer_id` en el store: `Unauthenticated`, sin llamada remota.
/// - Con id válido: `Authenticated`, prefiriendo el nombre guardado sobre
///   el remoto (el guardado puede ser un alias elegido al hacer login).
/// - Cualquier fallo remoto (not found, red): `Unauthenticated`, sin retry.
pub async fn resolve_session<S, D>(store: &S, directory: &D) -> SessionOutcome
where
    S: SessionStore,
    D: DirectoryApi,
{
    let Some(dealer_id) = store.get(STORAGE_KEY_DEALER_ID) else {
        return SessionOutcome::Unauthenticated;
    };

    match directory.validate_dealer(&dealer_id).await {
        Ok(record) => {
            let dealer_name = store
                .get(STORAGE_KEY_DEALER_NAME)
                .unwrap_or(record.name);
            SessionOutcome::Authenticated {
                dealer_id,
                dealer_name,
            }
        }
        Err(e) => {
            log::error!("❌ Error validando concesionario: {}", e);
            SessionOutcome::Unauthenticated
        }
    }
}

/// Guarda la sesión tras un login correcto (ambas claves).
pub fn persist_session<S: SessionStore>(store: &S, record: &DealerRecord) {
    store.set(STORAGE_KEY_DEALER_ID, &record.id);
    store.set(STORAGE_KEY_DEALER_NAME, &record.name);
}

/// Borra la sesión persistida. Best-effort, sin modo de fallo.
pub fn clear_session<S: SessionStore>(store: &S) {
    store.remove(STORAGE_KEY_DEALER_ID);
    store.remove(STORAGE_KEY_DEALER_NAME);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::DirectoryError;
    use crate::models::Car;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Store en memoria para tests (sin localStorage)
    #[derive(Default)]
    struct MemoryStore {
        data: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.data.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.data.borrow_mut().insert(key.into(), value.into());
        }

        fn remove(&self, key: &str) {
            self.data.borrow_mut().remove(key);
        }
    }

    /// Mock del Directory Service que registra las llamadas recibidas
    struct MockDirectory {
        validate_result: Result<DealerRecord, DirectoryError>,
        calls: RefCell<Vec<String>>,
    }

    impl MockDirectory {
        fn valid(id: &str, name: &str) -> Self {
            Self {
                validate_result: Ok(DealerRecord {
                    id: id.into(),
                    name: name.into(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: DirectoryError) -> Self {
            Self {
                validate_result: Err(error),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DirectoryApi for MockDirectory {
        async fn validate_dealer(
            &self,
            dealer_id: &str,
        ) -> Result<DealerRecord, DirectoryError> {
            self.calls.borrow_mut().push(format!("validate:{}", dealer_id));
            self.validate_result.clone()
        }

        async fn login_dealer(&self, _id_number: &str) -> Result<DealerRecord, DirectoryError> {
            unreachable!("login not exercised here")
        }

        async fn get_dealer_cars(&self, _dealer_id: &str) -> Result<Vec<Car>, DirectoryError> {
            unreachable!("cars not exercised here")
        }

        async fn update_car_status(
            &self,
            _car_id: &str,
            _is_sold: bool,
        ) -> Result<(), DirectoryError> {
            unreachable!("update not exercised here")
        }
    }

    #[test]
    fn missing_persisted_id_is_unauthenticated_without_remote_call() {
        let store = MemoryStore::default();
        let directory = MockDirectory::valid("42", "Acme Motors");

        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(outcome, SessionOutcome::Unauthenticated);
        assert!(directory.calls.borrow().is_empty());
    }

    #[test]
    fn valid_persisted_id_resolves_to_authenticated() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_DEALER_ID, "42");
        let directory = MockDirectory::valid("42", "Acme Motors");

        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(
            outcome,
            SessionOutcome::Authenticated {
                dealer_id: "42".into(),
                dealer_name: "Acme Motors".into(),
            }
        );
        assert_eq!(directory.calls.borrow().as_slice(), ["validate:42"]);
    }

    #[test]
    fn stored_name_wins_over_remote_name() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_DEALER_ID, "42");
        store.set(STORAGE_KEY_DEALER_NAME, "Acme (sucursal norte)");
        let directory = MockDirectory::valid("42", "Acme Motors");

        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(
            outcome,
            SessionOutcome::Authenticated {
                dealer_id: "42".into(),
                dealer_name: "Acme (sucursal norte)".into(),
            }
        );
    }

    #[test]
    fn invalid_persisted_id_is_unauthenticated() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_DEALER_ID, "999");
        let directory = MockDirectory::failing(DirectoryError::NotFound);

        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(outcome, SessionOutcome::Unauthenticated);
    }

    #[test]
    fn network_failure_is_treated_like_not_found() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_DEALER_ID, "42");
        let directory = MockDirectory::failing(DirectoryError::Network("timeout".into()));

        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(outcome, SessionOutcome::Unauthenticated);
    }

    #[test]
    fn persist_then_resolve_round_trips() {
        let store = MemoryStore::default();
        let record = DealerRecord {
            id: "42".into(),
            name: "Acme Motors".into(),
        };
        persist_session(&store, &record);

        let directory = MockDirectory::valid("42", "Acme Motors");
        let outcome = block_on(resolve_session(&store, &directory));

        assert_eq!(
            outcome,
            SessionOutcome::Authenticated {
                dealer_id: "42".into(),
                dealer_name: "Acme Motors".into(),
            }
        );
    }

    #[test]
    fn clear_session_removes_both_keys() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_DEALER_ID, "42");
        store.set(STORAGE_KEY_DEALER_NAME, "Acme Motors");

        clear_session(&store);

        assert!(store.get(STORAGE_KEY_DEALER_ID).is_none());
        assert!(store.get(STORAGE_KEY_DEALER_NAME).is_none());
    }

    #[test]
    fn clear_session_on_empty_store_is_a_noop() {
        let store = MemoryStore::default();
        clear_session(&store);
        assert!(store.get(STORAGE_KEY_DEALER_ID).is_none());
    }
}
