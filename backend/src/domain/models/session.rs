use super::farmer::Farmer;

/// The farmer a request acts on behalf of
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub farmer: Farmer,
}

impl Session {
    pub fn new(farmer: Farmer) -> Self {
        Self { farmer }
    }

    pub fn farmer_id(&self) -> &str {
        &self.farmer.id
    }
}
