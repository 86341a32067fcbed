// ============================================================================
// TOAST COMPONENT - Notificaciones no bloqueantes
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::{Notice, NoticeLevel};
use crate::utils::constants::TOAST_DISMISS_MS;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Muestra el aviso actual y lo auto-descarta pasados unos segundos.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notice.clone(), move |notice| {
            let timeout = notice.as_ref().map(|_| {
                Timeout::new(TOAST_DISMISS_MS, move || {
                    on_dismiss.emit(());
                })
            });
            // Un aviso nuevo cancela el timer del anterior
            move || drop(timeout)
        });
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (icon, class) = match notice.level {
        NoticeLevel::Success => ("✅", "toast toast-success"),
        NoticeLevel::Error => ("⚠️", "toast toast-error"),
    };

    html! {
        <div class={class} role="status">
            <span class="toast-icon">{icon}</span>
            <span class="toast-text">{&notice.message}</span>
        </div>
    }
}
