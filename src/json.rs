//! JSON payloads: `null` is the none-equivalent sentinel, arrays and objects
//! iterate their elements. A JSON document cannot embed an option, so JSON
//! payloads never nest and an `and_then` closure can never satisfy its
//! contract. Chain lookups with `map` instead, which turns `null` into `None`.

use serde_json::Value as Json;

use crate::optional::Optional;
use crate::value::Value;

impl Value for Json {
    fn is_null(&self) -> bool {
        Json::is_null(self)
    }

    fn as_optional(&self) -> Option<&Optional<Self>> {
        None
    }

    fn into_optional(self) -> Result<Optional<Self>, Self> {
        Err(self)
    }

    fn as_bool(&self) -> Option<bool> {
        Json::as_bool(self)
    }

    fn into_elements(self) -> Result<Vec<Self>, Self> {
        match self {
            Json::Array(items) => Ok(items),
            Json::Object(entries) => Ok(entries.into_iter().map(|(_, item)| item).collect()),
            other => Err(other),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Json::Null => "null",
            Json::Bool(_) => "bool",
            Json::Number(_) => "number",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::OptionError;

    #[test]
    fn null_coerces_to_none() {
        assert!(Optional::create(Json::Null).is_none());
        assert!(Optional::create(json!(0)).is_some());
    }

    #[test]
    fn lookup_chain() {
        let doc = json!({ "server": { "port": 8080, "host": null } });
        let port = Optional::create(doc.clone())
            .map(|doc| doc["server"]["port"].clone())
            .unwrap_or(json!(80));
        assert_eq!(port, json!(8080));
        let host = Optional::create(doc)
            .map(|doc| doc["server"]["host"].clone())
            .unwrap_or(json!("localhost"));
        assert_eq!(host, json!("localhost"));
    }

    #[test]
    fn arrays_iterate_elements() {
        let items: Vec<Json> = Optional::create(json!([1, "two", null])).into_iter().collect();
        assert_eq!(items, [json!(1), json!("two"), Json::Null]);
    }

    #[test]
    fn and_then_requires_an_option() {
        let err = Optional::create(json!(1)).and_then(|_| json!(2)).unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidReturnType {
                operation: "and_then",
                expected: "an option",
                found: "number",
            }
        );
    }
}
