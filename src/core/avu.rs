use serde::{Deserialize, Deserializer, Serialize};

/// One attribute-value(-units) triple from the file catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avu {
    pub attribute: String,

    #[serde(deserialize_with = "deserialize_scalar")]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Avu {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
            units: None,
        }
    }
}

/// Catalog values are strings, but some exporters emit bare numbers
fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "AVU value must be a string or number, got {other}"
        ))),
    }
}

/// All catalog metadata attached to one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Path of the file in the catalog (or on disk)
    pub subject: String,

    pub avus: Vec<Avu>,
}

impl FileMetadata {
    pub fn new(subject: impl Into<String>, avus: Vec<Avu>) -> Self {
        Self {
            subject: subject.into(),
            avus,
        }
    }

    /// Values of every AVU with the given attribute, in catalog order
    pub fn values<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.avus
            .iter()
            .filter(move |avu| avu.attribute == attribute)
            .map(|avu| avu.value.as_str())
    }

    /// First value of the given attribute, if any
    #[must_use]
    pub fn first_value(&self, attribute: &str) -> Option<&str> {
        self.avus
            .iter()
            .find(|avu| avu.attribute == attribute)
            .map(|avu| avu.value.as_str())
    }

    /// File name component of the subject
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.subject
            .rsplit('/')
            .next()
            .unwrap_or(self.subject.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_preserve_order_and_repeats() {
        let metadata = FileMetadata::new(
            "/seq/5970/5970_1#23.bam",
            vec![
                Avu::new("sample", "A"),
                Avu::new("study_id", "2278"),
                Avu::new("sample", "B"),
                Avu::new("sample", "A"),
            ],
        );

        let samples: Vec<&str> = metadata.values("sample").collect();
        assert_eq!(samples, vec!["A", "B", "A"]);
        assert_eq!(metadata.first_value("study_id"), Some("2278"));
        assert_eq!(metadata.first_value("library_id"), None);
    }

    #[test]
    fn test_first_value_outlives_attribute_name() {
        let metadata = FileMetadata::new(
            "5970_1.bam",
            vec![Avu::new("md5", "b1946ac92492d2347c6235b4d2611184")],
        );

        let value = {
            let attribute = String::from("md5");
            metadata.first_value(&attribute)
        };
        assert_eq!(value, Some("b1946ac92492d2347c6235b4d2611184"));
    }

    #[test]
    fn test_file_name() {
        let metadata = FileMetadata::new("/seq/5970/5970_1#23.bam", vec![]);
        assert_eq!(metadata.file_name(), "5970_1#23.bam");

        let metadata = FileMetadata::new("5970_1.cram", vec![]);
        assert_eq!(metadata.file_name(), "5970_1.cram");
    }

    #[test]
    fn test_deserialize_numeric_value() {
        let avu: Avu = serde_json::from_str(r#"{"attribute": "lane", "value": 1}"#).unwrap();
        assert_eq!(avu.value, "1");
        assert!(avu.units.is_none());

        let result: Result<Avu, _> =
            serde_json::from_str(r#"{"attribute": "lane", "value": [1]}"#);
        assert!(result.is_err());
    }
}
