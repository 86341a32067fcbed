// ============================================================================
// INVENTORY SERVICE - Carga y toggle de estado de coches
// ============================================================================
// La mutación local es post-confirmación: la lista solo cambia después de
// que el backend acepte el update, así un fallo no deja nada que revertir.
// ============================================================================

use crate::models::Car;
use crate::services::directory::{DirectoryApi, DirectoryError};

/// Resultado de un toggle de estado sobre un coche.
#[derive(Clone, PartialEq, Debug)]
pub enum ToggleOutcome {
    /// El backend aceptó el cambio; `now_sold` es el estado nuevo a aplicar
    /// sobre la lista vigente en ese momento.
    Confirmed { now_sold: bool },
    /// El backend rechazó el cambio; no hay nada que aplicar localmente.
    Rejected,
}

/// Carga el inventario del concesionario.
///
/// Sin `dealer_id` (sesión aún sin resolver) devuelve `None` sin tocar el
/// Directory Service; la lista existente del llamador no debe cambiar.
pub async fn load_inventory<D: DirectoryApi>(
    directory: &D,
    dealer_id: Option<&str>,
) -> Option<Result<Vec<Car>, DirectoryError>> {
    let dealer_id = dealer_id?;
    Some(directory.get_dealer_cars(dealer_id).await)
}

/// Alterna el estado vendido/disponible de `car` contra el backend.
///
/// Solo devuelve `Confirmed` tras la aceptación remota; la aplicación local
/// (`apply_toggle`) la hace el llamador sobre su lista más reciente, no
/// sobre la que existía al iniciar la llamada.
pub async fn toggle_car_status<D: DirectoryApi>(directory: &D, car: &Car) -> ToggleOutcome {
    let now_sold = !car.is_sold;

    match directory.update_car_status(&car.id, now_sold).await {
        Ok(()) => ToggleOutcome::Confirmed { now_sold },
        Err(e) => {
            log::error!("❌ Error actualizando coche {}: {}", car.id, e);
            ToggleOutcome::Rejected
        }
    }
}

/// Reemplaza `is_sold` del coche con id coincidente, nada más: el resto de
/// coches, sus campos y el orden quedan exactamente igual.
pub fn apply_toggle(cars: &[Car], car_id: &str, is_sold: bool) -> Vec<Car> {
    cars.iter()
        .map(|c| {
            if c.id == car_id {
                Car { is_sold, ..c.clone() }
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Mensaje de éxito tras un toggle confirmado.
pub fn status_message(now_sold: bool) -> &'static str {
    if now_sold {
        "Car marked as sold"
    } else {
        "Car marked as available"
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DealerRecord;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn car(id: &str, is_sold: bool) -> Car {
        Car {
            id: id.into(),
            dealer_id: "42".into(),
            make: "Toyota".into(),
            model: "Corolla".into(),
            year: 2021,
            price: 18_500.0,
            is_sold,
            image_url: None,
        }
    }

    /// Mock con respuestas fijas que registra las llamadas recibidas
    struct MockDirectory {
        cars_result: Result<Vec<Car>, DirectoryError>,
        update_result: Result<(), DirectoryError>,
        calls: RefCell<Vec<String>>,
    }

    impl MockDirectory {
        fn new(
            cars_result: Result<Vec<Car>, DirectoryError>,
            update_result: Result<(), DirectoryError>,
        ) -> Self {
            Self {
                cars_result,
                update_result,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DirectoryApi for MockDirectory {
        async fn validate_dealer(
            &self,
            _dealer_id: &str,
        ) -> Result<DealerRecord, DirectoryError> {
            unreachable!("validate not exercised here")
        }

        async fn login_dealer(&self, _id_number: &str) -> Result<DealerRecord, DirectoryError> {
            unreachable!("login not exercised here")
        }

        async fn get_dealer_cars(&self, dealer_id: &str) -> Result<Vec<Car>, DirectoryError> {
            self.calls.borrow_mut().push(format!("cars:{}", dealer_id));
            self.cars_result.clone()
        }

        async fn update_car_status(
            &self,
            car_id: &str,
            is_sold: bool,
        ) -> Result<(), DirectoryError> {
            self.calls
                .borrow_mut()
                .push(format!("update:{}:{}", car_id, is_sold));
            self.update_result.clone()
        }
    }

    #[test]
    fn load_without_dealer_id_skips_the_directory() {
        let directory = MockDirectory::new(Ok(vec![car("1", false)]), Ok(()));

        let result = block_on(load_inventory(&directory, None));

        assert!(result.is_none());
        assert!(directory.calls.borrow().is_empty());
    }

    #[test]
    fn load_replaces_the_full_list_on_success() {
        let fetched = vec![car("1", false), car("2", true)];
        let directory = MockDirectory::new(Ok(fetched.clone()), Ok(()));

        let result = block_on(load_inventory(&directory, Some("42")));

        assert_eq!(result, Some(Ok(fetched)));
        assert_eq!(directory.calls.borrow().as_slice(), ["cars:42"]);
    }

    #[test]
    fn load_failure_surfaces_the_error() {
        let directory = MockDirectory::new(
            Err(DirectoryError::Network("offline".into())),
            Ok(()),
        );

        let result = block_on(load_inventory(&directory, Some("42")));

        assert_eq!(
            result,
            Some(Err(DirectoryError::Network("offline".into())))
        );
    }

    #[test]
    fn confirmed_toggle_reports_the_new_state() {
        let unsold = car("1", false);
        let directory = MockDirectory::new(Ok(Vec::new()), Ok(()));

        let outcome = block_on(toggle_car_status(&directory, &unsold));

        assert_eq!(outcome, ToggleOutcome::Confirmed { now_sold: true });
        assert_eq!(directory.calls.borrow().as_slice(), ["update:1:true"]);
    }

    #[test]
    fn toggling_a_sold_car_marks_it_available() {
        let sold = car("7", true);
        let directory = MockDirectory::new(Ok(Vec::new()), Ok(()));

        let outcome = block_on(toggle_car_status(&directory, &sold));

        assert_eq!(outcome, ToggleOutcome::Confirmed { now_sold: false });
        assert_eq!(directory.calls.borrow().as_slice(), ["update:7:false"]);
    }

    #[test]
    fn apply_toggle_flips_exactly_one_car() {
        let cars = vec![car("1", false), car("2", true)];

        let updated = apply_toggle(&cars, "1", true);

        assert_eq!(updated.len(), 2);
        assert!(updated[0].is_sold);
        // El resto de campos y el orden no cambian
        assert_eq!(updated[0].id, "1");
        assert_eq!(updated[0].make, "Toyota");
        assert_eq!(updated[1], cars[1]);
    }

    #[test]
    fn apply_toggle_is_idempotent_on_repeated_target_state() {
        let cars = vec![car("1", false)];

        let once = apply_toggle(&cars, "1", true);
        let again = apply_toggle(&once, "1", true);

        assert_eq!(once, again);
        // Y el toggle inverso vuelve al estado original
        assert_eq!(apply_toggle(&again, "1", false), cars);
    }

    #[test]
    fn rejected_toggle_leaves_the_list_untouched() {
        let cars = vec![car("1", false), car("2", true)];
        let directory = MockDirectory::new(Ok(Vec::new()), Err(DirectoryError::Status(500)));

        let before = cars.clone();
        let outcome = block_on(toggle_car_status(&directory, &cars[0]));

        assert_eq!(outcome, ToggleOutcome::Rejected);
        assert_eq!(cars, before);
    }

    #[test]
    fn status_messages_match_the_new_state() {
        assert_eq!(status_message(true), "Car marked as sold");
        assert_eq!(status_message(false), "Car marked as available");
    }
}
