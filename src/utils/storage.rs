use web_sys::{window, Storage};

/// Puerto de almacenamiento clave-valor para la sesión persistida.
/// La lógica de sesión solo habla con este trait, nunca con el navegador
/// directamente, así los tests corren sin localStorage real.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Implementación sobre localStorage del navegador. Best-effort: si el
/// navegador bloquea el acceso, las escrituras se pierden en silencio.
#[derive(Clone, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("❌ Error guardando '{}' en localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
