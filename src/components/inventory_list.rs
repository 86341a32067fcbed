use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::components::CarCard;
use crate::models::Car;

#[derive(Properties, PartialEq)]
pub struct InventoryListProps {
    pub cars: Vec<Car>,
    pub is_loading: bool,
    pub last_loaded: Option<DateTime<Utc>>,
    pub on_toggle: Callback<Car>,
    pub on_refresh: Callback<()>,
}

/// Listado de inventario con indicador de carga y botón de refresco.
#[function_component(InventoryList)]
pub fn inventory_list(props: &InventoryListProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    if props.is_loading {
        return html! {
            <div class="inventory-loading">{"Loading inventory..."}</div>
        };
    }

    html! {
        <div class="inventory">
            <div class="inventory-header">
                <h2>{format!("Inventory ({})", props.cars.len())}</h2>
                <button class="refresh" onclick={on_refresh}>{"🔄 Refresh"}</button>
            </div>

            {
                if props.cars.is_empty() {
                    html! { <p class="inventory-empty">{"No cars in inventory"}</p> }
                } else {
                    props.cars.iter().map(|car| {
                        html! {
                            <CarCard
                                key={car.id.clone()}
                                car={car.clone()}
                                on_toggle={props.on_toggle.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            }

            {
                if let Some(ts) = props.last_loaded {
                    html! {
                        <p class="inventory-footer">
                            {format!("Last updated: {}", ts.format("%H:%M:%S"))}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
