use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cow {
    pub id: String,
    pub farmer_id: String,
    pub tag_number: String,
    pub name: String,
    /// YYYY-MM-DD
    pub dob: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Cow {
    pub fn generate_id() -> String {
        format!("cow::{}", Uuid::new_v4().simple())
    }

    /// Placeholder photo used when a cow has no usable image
    pub fn placeholder_image(seed: &str) -> String {
        format!("https://picsum.photos/seed/{}/300/200", seed)
    }
}

impl From<Cow> for shared::Cow {
    fn from(cow: Cow) -> Self {
        shared::Cow {
            id: cow.id,
            farmer_id: cow.farmer_id,
            tag_number: cow.tag_number,
            name: cow.name,
            dob: cow.dob,
            image: cow.image,
        }
    }
}

impl From<shared::Cow> for Cow {
    fn from(cow: shared::Cow) -> Self {
        Cow {
            id: cow.id,
            farmer_id: cow.farmer_id,
            tag_number: cow.tag_number,
            name: cow.name,
            dob: cow.dob,
            image: cow.image,
        }
    }
}
