use web_sys::window;

/// Redirige el navegador a `path` reemplazando la entrada del historial
/// (como un router.replace: el botón atrás no vuelve a la vista inválida).
pub fn redirect_to(path: &str) {
    if let Some(win) = window() {
        if win.location().replace(path).is_err() {
            log::error!("❌ No se pudo redirigir a {}", path);
        }
    }
}
