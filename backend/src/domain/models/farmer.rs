use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farmer {
    pub id: String,
    pub mobile: String,
    pub farm_name: String,
}

impl Farmer {
    pub fn generate_id() -> String {
        format!("farmer::{}", Uuid::new_v4().simple())
    }
}

impl From<Farmer> for shared::Farmer {
    fn from(farmer: Farmer) -> Self {
        shared::Farmer {
            id: farmer.id,
            mobile: farmer.mobile,
            farm_name: farmer.farm_name,
        }
    }
}
