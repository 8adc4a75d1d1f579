use serde::{Deserialize, Deserializer, Serialize};

/// A single entry of the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Label shown in the list, e.g. "Ann (a@x.com)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

// Il server remoto restituisce id numerici, i record creati localmente hanno id testuali
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Unsigned(n) => n.to_string(),
        RawId::Signed(n) => n.to_string(),
    })
}
