//! In-memory inventory tree
//!
//! The serde layout of these types is the structured export format: field
//! names `path`, `name`, `files`, `subContainers` and `extension`, with empty
//! sequences left out. Deserializing accepts omitted, empty or `null`
//! sequences alike.

use serde::{Deserialize, Deserializer, Serialize};

/// All root containers of one run, in the order the roots were given.
pub type Forest = Vec<Container>;

/// A directory and the collected content directly beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub path: String,
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable_vec"
    )]
    pub files: Vec<File>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable_vec"
    )]
    pub sub_containers: Vec<Container>,
}

/// A collected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub extension: String,
}

impl Container {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            files: Vec::new(),
            sub_containers: Vec::new(),
        }
    }

    /// True if nothing was collected beneath this container.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.sub_containers.is_empty()
    }

    /// Number of containers below this one, at any depth.
    pub fn dir_count(&self) -> usize {
        self.sub_containers
            .iter()
            .map(|sub| 1 + sub.dir_count())
            .sum()
    }

    /// Number of files in this container and every container below it.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .sub_containers
                .iter()
                .map(Container::file_count)
                .sum::<usize>()
    }
}

impl File {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Container {
        let mut sub = Container::new("/data/sub", "sub");
        sub.files.push(File::new("c.docx", ".docx"));
        sub.sub_containers.push(Container::new("/data/sub/empty", "empty"));

        let mut root = Container::new("/data", "data");
        root.files.push(File::new("a.pdf", ".pdf"));
        root.sub_containers.push(sub);
        root
    }

    #[test]
    fn test_counts() {
        let root = sample();
        assert_eq!(root.dir_count(), 2);
        assert_eq!(root.file_count(), 2);
        assert!(!root.is_empty());
        assert!(root.sub_containers[0].sub_containers[0].is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "data");
        assert_eq!(json["path"], "/data");
        assert_eq!(json["files"][0]["extension"], ".pdf");
        assert_eq!(json["subContainers"][0]["name"], "sub");
    }

    #[test]
    fn test_empty_sequences_omitted() {
        let json = serde_json::to_value(Container::new("/x", "x")).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("files"));
        assert!(!obj.contains_key("subContainers"));
    }

    #[test]
    fn test_null_and_missing_sequences_read_as_empty() {
        let from_null: Container = serde_json::from_str(
            r#"{"path":"/x","name":"x","files":null,"subContainers":null}"#,
        )
        .unwrap();
        let from_missing: Container = serde_json::from_str(r#"{"path":"/x","name":"x"}"#).unwrap();
        assert_eq!(from_null, Container::new("/x", "x"));
        assert_eq!(from_missing, from_null);
    }
}
