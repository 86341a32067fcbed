use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::services::{clear_session, resolve_session, DirectoryClient, SessionOutcome};
use crate::utils::{redirect_to, BrowserStorage, LOGIN_PATH};

/// Sesión del concesionario para las vistas del portal.
pub struct UseDealerHandle {
    pub dealer_id: UseStateHandle<Option<String>>,
    pub dealer_name: UseStateHandle<String>,
    pub is_loading: UseStateHandle<bool>,
    pub logout: Callback<()>,
}

/// Valida la sesión persistida una vez por montaje. Sin id guardado o con
/// validación fallida redirige al login; si no, publica `dealer_id` para
/// que `use_dealer_cars` cargue el inventario.
#[hook]
pub fn use_dealer() -> UseDealerHandle {
    let dealer_id = use_state(|| None::<String>);
    let dealer_name = use_state(String::new);
    let is_loading = use_state(|| true);

    {
        let dealer_id = dealer_id.clone();
        let dealer_name = dealer_name.clone();
        let is_loading = is_loading.clone();

        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = resolve_session(&BrowserStorage, &DirectoryClient::new()).await;

                // La vista pudo desmontarse mientras esperábamos la respuesta
                if flag.get() {
                    return;
                }

                match outcome {
                    SessionOutcome::Authenticated {
                        dealer_id: id,
                        dealer_name: name,
                    } => {
                        log::info!("✅ Sesión válida: {} ({})", name, id);
                        dealer_id.set(Some(id));
                        dealer_name.set(name);
                    }
                    SessionOutcome::Unauthenticated => {
                        log::info!("🔒 Sin sesión válida, redirigiendo al login");
                        redirect_to(LOGIN_PATH);
                    }
                }
                is_loading.set(false);
            });

            move || cancelled.set(true)
        });
    }

    // Logout: borrado síncrono de la sesión persistida + redirect
    let logout = Callback::from(move |_| {
        clear_session(&BrowserStorage);
        log::info!("👋 Logout");
        redirect_to(LOGIN_PATH);
    });

    UseDealerHandle {
        dealer_id,
        dealer_name,
        is_loading,
        logout,
    }
}
