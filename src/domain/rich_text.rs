//! Structured rich-text documents as delivered by the CMS.
//!
//! The wire format is a tree of `{nodeType, data, content}` objects with `text` leaves carrying
//! `value` and `marks`. Deserialization is lenient: unknown node types are kept as
//! [`Node::Unknown`] so renderers can still walk their children.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Superscript,
    Subscript,
    Strikethrough,
}

impl Mark {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "italic" => Some(Self::Italic),
            "underline" => Some(Self::Underline),
            "code" => Some(Self::Code),
            "superscript" => Some(Self::Superscript),
            "subscript" => Some(Self::Subscript),
            "strikethrough" => Some(Self::Strikethrough),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    Paragraph(Vec<Node>),
    Heading {
        level: HeadingLevel,
        content: Vec<Node>,
    },
    UnorderedList(Vec<Node>),
    OrderedList(Vec<Node>),
    ListItem(Vec<Node>),
    Quote(Vec<Node>),
    HorizontalRule,
    Table(Vec<Node>),
    TableRow(Vec<Node>),
    TableCell {
        header: bool,
        content: Vec<Node>,
    },
    Hyperlink {
        uri: String,
        content: Vec<Node>,
    },
    /// Block-level asset embed; resolved against the document's asset links at render time.
    EmbeddedAsset {
        target_id: Option<String>,
    },
    /// Entry embeds, entry/asset hyperlinks and resource links: not resolved by this site.
    Reference {
        node_type: String,
        content: Vec<Node>,
    },
    Text {
        value: String,
        marks: Vec<Mark>,
    },
    Unknown {
        node_type: String,
        content: Vec<Node>,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
            marks: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    node_type: String,
    #[serde(default)]
    content: Vec<Node>,
    #[serde(default)]
    data: Option<RawData>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    marks: Vec<RawMark>,
}

#[derive(Debug, Default, Deserialize)]
struct RawData {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    target: Option<RawTarget>,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(default)]
    sys: Option<RawSys>,
}

#[derive(Debug, Deserialize)]
struct RawSys {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMark {
    #[serde(rename = "type")]
    kind: String,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            node_type,
            content,
            data,
            value,
            marks,
        } = raw;
        let data = data.unwrap_or_default();

        if let Some(level) = node_type
            .strip_prefix("heading-")
            .and_then(|level| level.parse::<u8>().ok())
            .and_then(HeadingLevel::new)
        {
            return Self::Heading { level, content };
        }

        match node_type.as_str() {
            "text" => Self::Text {
                value: value.unwrap_or_default(),
                marks: marks
                    .iter()
                    .filter_map(|mark| Mark::parse(&mark.kind))
                    .collect(),
            },
            "paragraph" => Self::Paragraph(content),
            "unordered-list" => Self::UnorderedList(content),
            "ordered-list" => Self::OrderedList(content),
            "list-item" => Self::ListItem(content),
            "blockquote" => Self::Quote(content),
            "hr" => Self::HorizontalRule,
            "table" => Self::Table(content),
            "table-row" => Self::TableRow(content),
            "table-cell" => Self::TableCell {
                header: false,
                content,
            },
            "table-header-cell" => Self::TableCell {
                header: true,
                content,
            },
            "hyperlink" => Self::Hyperlink {
                uri: data.uri.unwrap_or_default(),
                content,
            },
            "embedded-asset-block" => Self::EmbeddedAsset {
                target_id: data.target.and_then(|t| t.sys).and_then(|sys| sys.id),
            },
            "embedded-entry-block"
            | "embedded-entry-inline"
            | "embedded-resource-block"
            | "embedded-resource-inline"
            | "entry-hyperlink"
            | "asset-hyperlink"
            | "resource-hyperlink" => Self::Reference { node_type, content },
            _ => Self::Unknown { node_type, content },
        }
    }
}

/// Asset linked from a rich-text document (`links.assets.block`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub url: String,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Side-table of assets keyed by id. Documents may reference ids missing from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetLinks(HashMap<String, Asset>);

impl AssetLinks {
    pub fn resolve(&self, id: &str) -> Option<&Asset> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Asset> for AssetLinks {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|asset| (asset.id.clone(), asset))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    pub document: Document,
    pub assets: AssetLinks,
}
