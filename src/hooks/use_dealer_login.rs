use yew::prelude::*;

use crate::models::Notice;
use crate::services::{persist_session, DirectoryApi, DirectoryClient};
use crate::utils::{redirect_to, BrowserStorage, PORTAL_PATH};

/// Login de concesionario por número de identificación.
pub struct UseDealerLoginHandle {
    pub is_submitting: UseStateHandle<bool>,
    pub notice: UseStateHandle<Option<Notice>>,
    pub login: Callback<String>,
}

/// Un login correcto persiste la sesión y redirige al portal; uno fallido
/// solo muestra un aviso, sin tocar estado local.
#[hook]
pub fn use_dealer_login() -> UseDealerLoginHandle {
    let is_submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let login = {
        let is_submitting = is_submitting.clone();
        let notice = notice.clone();

        Callback::from(move |id_number: String| {
            if *is_submitting {
                return;
            }

            let is_submitting = is_submitting.clone();
            let notice = notice.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_submitting.set(true);

                match DirectoryClient::new().login_dealer(&id_number).await {
                    Ok(record) => {
                        persist_session(&BrowserStorage, &record);
                        log::info!("✅ Login correcto: {}", record.name);
                        redirect_to(PORTAL_PATH);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        notice.set(Some(Notice::error("Invalid dealer ID")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    UseDealerLoginHandle {
        is_submitting,
        notice,
        login,
    }
}
