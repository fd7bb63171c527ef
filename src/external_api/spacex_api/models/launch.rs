use chrono::{DateTime, Utc};

pub const LIST_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DETAIL_DATE_FORMAT: &str = "%d/%m/%Y %H:%M UTC";

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct Patch {
    #[serde(default)]
    pub small: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Default)]
pub struct Links {
    #[serde(default)]
    pub patch: Patch,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub date_utc: DateTime<Utc>,
    /// `None` while the outcome is unknown (upcoming launches)
    #[serde(default)]
    pub success: Option<bool>,
    pub rocket: String,
    #[serde(default)]
    pub payloads: Vec<String>,
    pub launchpad: String,
    #[serde(default)]
    pub links: Links,
}

impl Launch {
    #[cfg(test)]
    pub fn new(id: &str, date_utc: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Launch {id}"),
            date_utc: date_utc.parse().unwrap(),
            success: None,
            rocket: "falcon9".to_string(),
            payloads: Vec::new(),
            launchpad: "slc40".to_string(),
            links: Links::default(),
        }
    }

    pub fn success_label(&self) -> &'static str {
        match self.success {
            None => "N/A",
            Some(true) => "Success",
            Some(false) => "Failed",
        }
    }

    pub fn mission_patch(&self) -> Option<&str> {
        self.links.patch.small.as_deref()
    }

    pub fn list_date(&self) -> String {
        self.date_utc.format(LIST_DATE_FORMAT).to_string()
    }

    pub fn detail_date(&self) -> String {
        self.date_utc.format(DETAIL_DATE_FORMAT).to_string()
    }
}
