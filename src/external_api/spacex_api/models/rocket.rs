#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Rocket {
    pub id: String,
    pub name: String,
}

impl Rocket {
    #[cfg(test)]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}
