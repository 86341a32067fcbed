use web_sys::window;
use yew::prelude::*;

use crate::components::{InventoryList, LoginScreen, Toast};
use crate::hooks::{use_dealer, use_dealer_cars, use_dealer_login};
use crate::utils::constants::LOGIN_PATH;

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Raíz de la app: `/dealer` es la superficie de login, cualquier otra
/// ruta es el portal (que redirige a `/dealer` si no hay sesión válida).
#[function_component(App)]
pub fn app() -> Html {
    if current_path() == LOGIN_PATH {
        html! { <DealerLogin /> }
    } else {
        html! { <DealerPortal /> }
    }
}

#[function_component(DealerLogin)]
fn dealer_login() -> Html {
    let auth = use_dealer_login();

    let on_dismiss = {
        let notice = auth.notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <>
            <LoginScreen on_login={auth.login.clone()} is_submitting={*auth.is_submitting} />
            <Toast notice={(*auth.notice).clone()} on_dismiss={on_dismiss} />
        </>
    }
}

#[function_component(DealerPortal)]
fn dealer_portal() -> Html {
    let session = use_dealer();
    let inventory = use_dealer_cars((*session.dealer_id).clone());

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let on_dismiss = {
        let notice = inventory.notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    // Estado transitorio mientras se valida la sesión persistida
    if *session.is_loading {
        return html! {
            <div class="portal-loading">{"Checking session..."}</div>
        };
    }

    html! {
        <div class="dealer-portal">
            <header class="portal-header">
                <h1>{(*session.dealer_name).clone()}</h1>
                <button class="logout" onclick={on_logout}>{"Log out"}</button>
            </header>

            <InventoryList
                cars={inventory.cars.cars.clone()}
                is_loading={*inventory.is_loading}
                last_loaded={*inventory.last_loaded}
                on_toggle={inventory.toggle_status.clone()}
                on_refresh={inventory.refresh.clone()}
            />

            <Toast notice={(*inventory.notice).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
