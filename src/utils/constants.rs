/// URL base del backend (Directory Service)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000 (por defecto)
/// - Producción: via BACKEND_URL env var (.env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

// Claves de sesión persistida en localStorage
pub const STORAGE_KEY_DEALER_ID: &str = "dealer_id";
pub const STORAGE_KEY_DEALER_NAME: &str = "dealer_name";

// Rutas de navegación
pub const LOGIN_PATH: &str = "/dealer";
pub const PORTAL_PATH: &str = "/dealer/portal";

/// Tiempo que un toast permanece visible (ms)
pub const TOAST_DISMISS_MS: u32 = 4_000;
