use serde::Deserialize;

/// Raw query string of the donate action. Every field is optional and kept as
/// text so that malformed values surface as our own validation errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DonateQuery {
    pub to: Option<String>,
    pub token: Option<String>,
    pub amount: Option<String>,
}

impl DonateQuery {
    /// Decodes a query string; when a key repeats, its first value wins.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "to" => &mut query.to,
                "token" => &mut query.token,
                "amount" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }
}
