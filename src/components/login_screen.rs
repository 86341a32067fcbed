use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<String>,
    pub is_submitting: bool,
}

/// Formulario de login: el concesionario entra con su número de
/// identificación (clave secundaria del Directory Service).
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let id_number_ref = use_node_ref();

    let on_submit = {
        let id_number_ref = id_number_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(input) = id_number_ref.cast::<HtmlInputElement>() {
                let id_number = input.value();

                if id_number.trim().is_empty() {
                    return;
                }

                on_login.emit(id_number);
            }
        })
    };

    html! {
        <div class="login-screen">
            <h1>{"Dealer Portal"}</h1>
            <form onsubmit={on_submit}>
                <input
                    ref={id_number_ref}
                    type="text"
                    placeholder="Dealer ID number"
                    autocomplete="off"
                />
                <button type="submit" disabled={props.is_submitting}>
                    { if props.is_submitting { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
