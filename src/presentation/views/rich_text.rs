//! Rich-text documents to display nodes and HTML.
//!
//! [`render_document`] is a pure tree transform: one display node per top-level block, with
//! embedded assets resolved against the document's asset links. Embeds that do not resolve
//! become [`RenderNode::Empty`].

use super::image::{DEFAULT_WIDTH, image_url};
use crate::domain::rich_text::{Asset, AssetLinks, Document, Mark, Node};
use tera::escape_html;

pub type Attributes = Vec<(&'static str, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Element {
        tag: &'static str,
        attrs: Attributes,
        children: Vec<RenderNode>,
    },
    Image {
        src: String,
        alt: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    Rule,
    Text(String),
    Fragment(Vec<RenderNode>),
    Empty,
}

impl RenderNode {
    fn element(tag: &'static str, children: Vec<RenderNode>) -> Self {
        Self::Element {
            tag,
            attrs: Vec::new(),
            children,
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                write_attrs(out, attrs);
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Self::Image {
                src,
                alt,
                width,
                height,
            } => {
                let mut attrs: Attributes = vec![("src", src.clone()), ("alt", alt.clone())];
                if let Some(width) = width {
                    attrs.push(("width", width.to_string()));
                }
                if let Some(height) = height {
                    attrs.push(("height", height.to_string()));
                }
                attrs.push(("loading", "lazy".into()));
                out.push_str("<img class=\"rich-text-image\"");
                write_attrs(out, &attrs);
                out.push_str(" />");
            }
            Self::Rule => out.push_str("<hr />"),
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
            Self::Empty => {}
        }
    }
}

fn write_attrs(out: &mut String, attrs: &Attributes) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
}

pub fn render_document(document: &Document, assets: &AssetLinks) -> Vec<RenderNode> {
    document
        .content
        .iter()
        .map(|node| render_node(node, assets))
        .collect()
}

pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

fn render_children(children: &[Node], assets: &AssetLinks) -> Vec<RenderNode> {
    children
        .iter()
        .map(|node| render_node(node, assets))
        .collect()
}

fn render_node(node: &Node, assets: &AssetLinks) -> RenderNode {
    match node {
        Node::Paragraph(children) => RenderNode::element("p", render_children(children, assets)),
        Node::Heading { level, content } => {
            RenderNode::element(heading_tag(level.get()), render_children(content, assets))
        }
        Node::UnorderedList(items) => RenderNode::element("ul", render_children(items, assets)),
        Node::OrderedList(items) => RenderNode::element("ol", render_children(items, assets)),
        Node::ListItem(children) => RenderNode::element("li", render_children(children, assets)),
        Node::Quote(children) => {
            RenderNode::element("blockquote", render_children(children, assets))
        }
        Node::HorizontalRule => RenderNode::Rule,
        Node::Table(rows) => RenderNode::element(
            "table",
            vec![RenderNode::element("tbody", render_children(rows, assets))],
        ),
        Node::TableRow(cells) => RenderNode::element("tr", render_children(cells, assets)),
        Node::TableCell { header, content } => RenderNode::element(
            if *header { "th" } else { "td" },
            render_children(content, assets),
        ),
        Node::Hyperlink { uri, content } => {
            let children = render_children(content, assets);
            if !is_safe_href(uri) {
                return RenderNode::Fragment(children);
            }
            let mut attrs: Attributes = vec![("href", uri.clone())];
            if uri.starts_with("http://") || uri.starts_with("https://") {
                attrs.push(("rel", "noopener noreferrer".into()));
            }
            RenderNode::Element {
                tag: "a",
                attrs,
                children,
            }
        }
        Node::EmbeddedAsset { target_id } => target_id
            .as_deref()
            .and_then(|id| assets.resolve(id))
            .map_or_else(
                || {
                    tracing::debug!(asset_id = ?target_id, "unresolved embedded asset");
                    RenderNode::Empty
                },
                render_asset,
            ),
        Node::Text { value, marks } => marks
            .iter()
            .rev()
            .fold(RenderNode::Text(value.clone()), |inner, mark| {
                RenderNode::element(mark_tag(*mark), vec![inner])
            }),
        Node::Reference { content, .. } | Node::Unknown { content, .. } => {
            if content.is_empty() {
                RenderNode::Empty
            } else {
                RenderNode::Fragment(render_children(content, assets))
            }
        }
    }
}

fn render_asset(asset: &Asset) -> RenderNode {
    let width = asset.width.unwrap_or(DEFAULT_WIDTH).min(1920);
    RenderNode::Image {
        src: image_url(&asset.url, width, None),
        alt: asset.description.clone().unwrap_or_default(),
        width: asset.width,
        height: asset.height,
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

fn mark_tag(mark: Mark) -> &'static str {
    match mark {
        Mark::Bold => "strong",
        Mark::Italic => "em",
        Mark::Underline => "u",
        Mark::Code => "code",
        Mark::Superscript => "sup",
        Mark::Subscript => "sub",
        Mark::Strikethrough => "s",
    }
}

fn is_safe_href(uri: &str) -> bool {
    let lower = uri.trim_start().to_ascii_lowercase();
    ["http://", "https://", "mailto:", "tel:", "#"]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || (lower.starts_with('/') && !lower.starts_with("//"))
}
