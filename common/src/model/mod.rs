use serde::{Deserialize, Deserializer};

pub mod booking;
pub mod property;
pub mod user;

/// Collection ids arrive as JSON strings or numbers depending on how the
/// record was created; both normalize to their decimal text form.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
