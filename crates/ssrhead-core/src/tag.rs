//! Head tag descriptors.
//!
//! A [`HeadTag`] is what a page declares for its document head. It is not
//! markup yet: the collector merges descriptors first, and HTML is produced at
//! the very end with [`HeadTag::to_html`].

use std::fmt;

use askama_escape::{escape, Html};
use serde::Serialize;

/// Ordered tag descriptors produced by one render.
pub type MetadataTagSet = Vec<HeadTag>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeadTag {
    /// `<title>` with its text content.
    Title { text: String },
    /// `<meta>` with exactly one attribute selection.
    Meta(MetaAttr),
}

/// The attribute pair a `<meta>` tag carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaAttr {
    Charset { charset: String },
    HttpEquiv { http_equiv: String, content: String },
    Named { name: String, content: String },
}

/// Identity used by the collector to deduplicate declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    Title,
    Charset,
    HttpEquiv(String),
    Name(String),
}

impl HeadTag {
    pub fn title(text: impl Into<String>) -> Self {
        HeadTag::Title { text: text.into() }
    }

    pub fn charset(charset: impl Into<String>) -> Self {
        HeadTag::Meta(MetaAttr::Charset { charset: charset.into() })
    }

    pub fn http_equiv(http_equiv: impl Into<String>, content: impl Into<String>) -> Self {
        HeadTag::Meta(MetaAttr::HttpEquiv {
            http_equiv: http_equiv.into(),
            content: content.into(),
        })
    }

    pub fn named(name: impl Into<String>, content: impl Into<String>) -> Self {
        HeadTag::Meta(MetaAttr::Named {
            name: name.into(),
            content: content.into(),
        })
    }

    /// Element name: `title` or `meta`.
    pub fn kind(&self) -> &'static str {
        match self {
            HeadTag::Title { .. } => "title",
            HeadTag::Meta(_) => "meta",
        }
    }

    pub fn key(&self) -> TagKey {
        match self {
            HeadTag::Title { .. } => TagKey::Title,
            HeadTag::Meta(MetaAttr::Charset { .. }) => TagKey::Charset,
            HeadTag::Meta(MetaAttr::HttpEquiv { http_equiv, .. }) => {
                TagKey::HttpEquiv(http_equiv.to_ascii_lowercase())
            }
            HeadTag::Meta(MetaAttr::Named { name, .. }) => TagKey::Name(name.to_ascii_lowercase()),
        }
    }

    /// HTML attributes in emission order. Empty for `title`.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            HeadTag::Title { .. } => Vec::new(),
            HeadTag::Meta(MetaAttr::Charset { charset }) => vec![("charset", charset.as_str())],
            HeadTag::Meta(MetaAttr::HttpEquiv { http_equiv, content }) => {
                vec![("http-equiv", http_equiv.as_str()), ("content", content.as_str())]
            }
            HeadTag::Meta(MetaAttr::Named { name, content }) => {
                vec![("name", name.as_str()), ("content", content.as_str())]
            }
        }
    }

    /// Write as a single HTML element. Text and attribute values are escaped.
    pub fn write_html<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            HeadTag::Title { text } => write!(out, "<title>{}</title>", escape(text, Html)),
            HeadTag::Meta(_) => {
                out.write_str("<meta")?;
                for (name, value) in self.attributes() {
                    write!(out, " {name}=\"{}\"", escape(value, Html))?;
                }
                out.write_char('>')
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}
