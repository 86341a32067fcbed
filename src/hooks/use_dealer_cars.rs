use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::models::{Car, Notice};
use crate::services::{
    apply_toggle, load_inventory, status_message, toggle_car_status, DirectoryClient,
    ToggleOutcome,
};

/// Lista de coches como estado reducible: cada acción se aplica sobre el
/// estado más reciente, no sobre el snapshot del render que lanzó la
/// operación, así dos toggles solapados de coches distintos no se pisan.
#[derive(PartialEq)]
pub struct CarList {
    pub cars: Vec<Car>,
}

pub enum CarsAction {
    /// Carga completada: reemplaza la lista entera
    Replace(Vec<Car>),
    /// Toggle confirmado por el backend: aplica solo ese campo
    SetSold { car_id: String, is_sold: bool },
}

impl Reducible for CarList {
    type Action = CarsAction;

    fn reduce(self: Rc<Self>, action: CarsAction) -> Rc<Self> {
        match action {
            CarsAction::Replace(cars) => Rc::new(CarList { cars }),
            CarsAction::SetSold { car_id, is_sold } => Rc::new(CarList {
                cars: apply_toggle(&self.cars, &car_id, is_sold),
            }),
        }
    }
}

/// Inventario del concesionario con toggle vendido/disponible.
pub struct UseDealerCarsHandle {
    pub cars: UseReducerHandle<CarList>,
    pub is_loading: UseStateHandle<bool>,
    pub notice: UseStateHandle<Option<Notice>>,
    pub last_loaded: UseStateHandle<Option<DateTime<Utc>>>,
    pub toggle_status: Callback<Car>,
    pub refresh: Callback<()>,
}

/// Carga el inventario cada vez que cambia `dealer_id` (incluida la
/// transición None -> Some cuando `use_dealer` resuelve la sesión).
/// Un fallo de carga conserva la lista anterior y notifica al usuario.
#[hook]
pub fn use_dealer_cars(dealer_id: Option<String>) -> UseDealerCarsHandle {
    let cars = use_reducer(|| CarList { cars: Vec::new() });
    let is_loading = use_state(|| true);
    let notice = use_state(|| None::<Notice>);
    let last_loaded = use_state(|| None::<DateTime<Utc>>);
    let reload_tick = use_state(|| 0u32);

    // Guard por id: toggles del mismo coche no se solapan
    let in_flight = use_mut_ref(HashSet::<String>::new);

    {
        let cars = cars.clone();
        let is_loading = is_loading.clone();
        let notice = notice.clone();
        let last_loaded = last_loaded.clone();

        use_effect_with((dealer_id, *reload_tick), move |(dealer_id, _)| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();
            let dealer_id = dealer_id.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = load_inventory(&DirectoryClient::new(), dealer_id.as_deref()).await;

                if flag.get() {
                    return;
                }

                match outcome {
                    // Sesión aún sin resolver: no tocar la lista ni el loading
                    None => {}
                    Some(Ok(fetched)) => {
                        log::info!("🚗 Inventario cargado: {} coches", fetched.len());
                        cars.dispatch(CarsAction::Replace(fetched));
                        last_loaded.set(Some(Utc::now()));
                        is_loading.set(false);
                    }
                    Some(Err(e)) => {
                        log::error!("❌ Error cargando inventario: {}", e);
                        notice.set(Some(Notice::error("Failed to load inventory")));
                        is_loading.set(false);
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    let toggle_status = {
        let cars = cars.clone();
        let notice = notice.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |car: Car| {
            // Segundo toggle del mismo coche con uno pendiente: ignorado
            if !in_flight.borrow_mut().insert(car.id.clone()) {
                log::warn!("⏳ Toggle ignorado, el coche {} ya tiene uno en vuelo", car.id);
                return;
            }

            let cars = cars.clone();
            let notice = notice.clone();
            let in_flight = in_flight.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = toggle_car_status(&DirectoryClient::new(), &car).await;
                in_flight.borrow_mut().remove(&car.id);

                match outcome {
                    ToggleOutcome::Confirmed { now_sold } => {
                        log::info!("✅ {} -> is_sold={}", car.display_name(), now_sold);
                        cars.dispatch(CarsAction::SetSold {
                            car_id: car.id.clone(),
                            is_sold: now_sold,
                        });
                        notice.set(Some(Notice::success(status_message(now_sold))));
                    }
                    ToggleOutcome::Rejected => {
                        notice.set(Some(Notice::error("Failed to update car status")));
                    }
                }
            });
        })
    };

    let refresh = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_| reload_tick.set(reload_tick.wrapping_add(1)))
    };

    UseDealerCarsHandle {
        cars,
        is_loading,
        notice,
        last_loaded,
        toggle_status,
        refresh,
    }
}

// ============================================================================
// TESTS
// ============================================================================
