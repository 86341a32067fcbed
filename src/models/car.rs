use serde::{Deserialize, Serialize};

/// Un coche del inventario del concesionario.
/// Este frontend nunca crea ni borra coches; solo alterna `is_sold`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub id: String,
    pub dealer_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub is_sold: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Car {
    /// Texto corto para cabeceras y logs ("2021 Toyota Corolla")
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
