use serde::{Deserialize, Serialize};

/// Registro de concesionario devuelto por el Directory Service.
/// El `id_number` (clave secundaria de login) vive solo en el backend;
/// las respuestas de lectura traen únicamente `id` y `name`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DealerRecord {
    pub id: String,
    pub name: String,
}
