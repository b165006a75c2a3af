//! In-memory collection document
//!
//! Only the keys the codec interprets are typed. Everything else inside
//! `info`, `request`, headers and bodies is carried verbatim in an `extra`
//! map so it survives a round trip through the directory tree.

use crate::{Error, Result};
use coltree_fs::ConfigStore;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use std::path::Path;

/// Script type assigned to events that do not name one.
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";

/// Root of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDocument {
    pub info: Info,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(default)]
    pub item: Vec<Item>,
}

impl CollectionDocument {
    /// Empty collection with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: Info::new(name),
            auth: None,
            variable: None,
            event: Vec::new(),
            item: Vec::new(),
        }
    }

    /// Read a collection from a single JSON (or TOML) file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Write the collection to a single pretty-printed file.
    pub fn save(&self, path: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Count folders and requests in the whole tree.
    pub fn counts(&self) -> (usize, usize) {
        fn walk(items: &[Item], acc: &mut (usize, usize)) {
            for item in items {
                match item {
                    Item::Folder(folder) => {
                        acc.0 += 1;
                        walk(&folder.item, acc);
                    }
                    Item::Request(_) => acc.1 += 1,
                }
            }
        }

        let mut acc = (0, 0);
        walk(&self.item, &mut acc);
        acc
    }
}

/// Collection metadata. Only `name` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Info {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A node of the collection tree.
///
/// Objects carrying a `request` key are requests; anything else is a folder.
/// A request given as a bare URL string reads as `{"url": <string>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Request(RequestItem),
    Folder(Folder),
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let item = match object.get_mut("request") {
            Some(request) => {
                if let Value::String(url) = request {
                    let url = std::mem::take(url);
                    *request = serde_json::json!({ "url": url });
                }
                serde_json::from_value(Value::Object(object)).map(Item::Request)
            }
            None => serde_json::from_value(Value::Object(object)).map(Item::Folder),
        };

        item.map_err(|e| de::Error::custom(format!("invalid item {name:?}: {e}")))
    }
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Self::Request(request) => &request.name,
            Self::Folder(folder) => &folder.name,
        }
    }

    pub fn events(&self) -> &[Event] {
        match self {
            Self::Request(request) => &request.event,
            Self::Folder(folder) => &folder.event,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(default)]
    pub item: Vec<Item>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            event: Vec::new(),
            item: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub request: Request,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
}

impl RequestItem {
    pub fn new(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            request,
            response: None,
            event: Vec::new(),
        }
    }
}

/// An HTTP request definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Request {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(Value::String(url.into())),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.push(Header::new(key, value));
        self
    }

    pub fn with_raw_body(mut self, raw: impl Into<String>) -> Self {
        self.body = Some(Body::raw(raw));
        self
    }

    /// Whether the request declares a JSON payload.
    ///
    /// Either a `Content-Type: application/json` header (name compared
    /// case-insensitively, parameters such as `charset` allowed) or a raw
    /// body whose `options.raw.language` is `json`.
    pub fn declares_json(&self) -> bool {
        let json_header = self.header.iter().any(|h| {
            h.key.eq_ignore_ascii_case("content-type")
                && h.value
                    .split(';')
                    .next()
                    .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
        });

        json_header || self.body.as_ref().is_some_and(Body::language_is_json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Body {
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            mode: Some("raw".to_string()),
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    fn language_is_json(&self) -> bool {
        self.options
            .as_ref()
            .and_then(|o| o.pointer("/raw/language"))
            .and_then(Value::as_str)
            == Some("json")
    }
}

/// A script hook attached to the collection, a folder or a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

impl Event {
    pub fn new(listen: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            listen: listen.into(),
            script: Script {
                exec: lines.iter().map(|l| (*l).to_string()).collect(),
                kind: DEFAULT_SCRIPT_TYPE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub exec: Vec<String>,
    #[serde(rename = "type", default = "default_script_type")]
    pub kind: String,
}

fn default_script_type() -> String {
    DEFAULT_SCRIPT_TYPE.to_string()
}

impl TryFrom<Value> for CollectionDocument {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
