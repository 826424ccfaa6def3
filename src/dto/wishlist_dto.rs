use serde::Deserialize;
use uuid::Uuid;

// Request para guardar un vehículo en la lista de deseos
#[derive(Debug, Deserialize)]
pub struct AddWishlistRequest {
    pub vehicle_id: Uuid,
}
