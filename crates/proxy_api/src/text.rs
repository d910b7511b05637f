//! # Chat Component Text
//!
//! The rich-text component type used wherever the proxy shows formatted text
//! to a client: chat, titles, and boss bar names. The type is plain serde
//! data; the host protocol layer decides how a component is encoded for a
//! given client version.
//!
//! Unset style fields are omitted during serialization rather than written
//! as `null` - vanilla clients reject explicit nulls in component JSON.

use serde::{Deserialize, Serialize};

/// The sixteen named chat colors, serialized in their lowercase wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// A node in a chat component tree.
///
/// Components carry their own text plus optional styling, and may nest child
/// components under `extra`. Children inherit the parent's styling on the
/// client, so a plain wrapper with styled children is a common shape.
///
/// # Examples
///
/// ```rust
/// use proxy_api::{ChatColor, TextComponent};
///
/// let mut title = TextComponent::plain("Dragon");
/// title.color = Some(ChatColor::Red);
/// title.bold = Some(true);
///
/// let json = title.to_json()?;
/// assert!(json.contains("\"color\":\"red\""));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    /// Literal text of this node.
    pub text: String,
    /// Text color; `None` inherits from the enclosing component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ChatColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    /// Child components appended after this node's text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    /// Creates an unstyled component holding the given text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: None,
            italic: None,
            underlined: None,
            strikethrough: None,
            obfuscated: None,
            extra: Vec::new(),
        }
    }

    /// Serializes this component to the JSON string form embedded in
    /// packets by the protocol layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Flattens the component tree to its unstyled text, depth-first.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.extra {
            child.collect_text(out);
        }
    }
}

impl From<&str> for TextComponent {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for TextComponent {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl std::fmt::Display for TextComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}
