#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Launchpad {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl Launchpad {
    #[cfg(test)]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            locality: None,
            region: None,
        }
    }

    /// "Vandenberg, California" when both parts are known
    pub fn location(&self) -> Option<String> {
        match (&self.locality, &self.region) {
            (Some(locality), Some(region)) => Some(format!("{locality}, {region}")),
            (Some(part), None) | (None, Some(part)) => Some(part.clone()),
            (None, None) => None,
        }
    }
}
