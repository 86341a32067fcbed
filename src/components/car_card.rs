use yew::prelude::*;

use crate::models::Car;

#[derive(Properties, PartialEq)]
pub struct CarCardProps {
    pub car: Car,
    pub on_toggle: Callback<Car>,
}

/// Tarjeta de un coche: datos básicos, badge de estado y botón de toggle.
#[function_component(CarCard)]
pub fn car_card(props: &CarCardProps) -> Html {
    let car = &props.car;

    let onclick = {
        let car = car.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(car.clone());
        })
    };

    let badge = if car.is_sold {
        html! { <span class="badge badge-sold">{"Sold"}</span> }
    } else {
        html! { <span class="badge badge-available">{"Available"}</span> }
    };

    html! {
        <div class={classes!("car-card", car.is_sold.then_some("is-sold"))}>
            {
                if let Some(url) = &car.image_url {
                    html! { <img class="car-photo" src={url.clone()} alt={car.display_name()} /> }
                } else {
                    html! {}
                }
            }
            <div class="car-info">
                <h3>{car.display_name()}</h3>
                <p class="car-price">{format!("{:.0} €", car.price)}</p>
                {badge}
            </div>
            <button class="toggle-status" onclick={onclick}>
                { if car.is_sold { "Mark available" } else { "Mark sold" } }
            </button>
        </div>
    }
}
