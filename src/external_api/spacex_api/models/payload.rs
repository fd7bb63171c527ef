#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Payload {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub payload_type: Option<String>,
}

impl Payload {
    #[cfg(test)]
    pub fn new(id: &str, name: Option<&str>, payload_type: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(str::to_string),
            payload_type: payload_type.map(str::to_string),
        }
    }
}
