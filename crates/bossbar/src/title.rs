//! # Bar Titles
//!
//! A boss bar title is either plain text or a rich chat component. Plain
//! titles are the common case and convert to an unstyled component at
//! packet-construction time; rich titles pass through untouched.
//!
//! [`TitleBuilder`] covers the middle ground: a plain string with styling
//! applied, without hand-assembling a component.

use proxy_api::{ChatColor, TextComponent};
use serde::{Deserialize, Serialize};

/// Title of a boss bar.
///
/// # Examples
///
/// ```rust
/// use bossbar::BarTitle;
/// use proxy_api::ChatColor;
///
/// // Plain text
/// let title = BarTitle::from("Ender Dragon");
/// assert_eq!(title.plain_text(), "Ender Dragon");
///
/// // Styled via the builder
/// let title = BarTitle::builder()
///     .text("Ender Dragon")
///     .color(ChatColor::LightPurple)
///     .bold(true)
///     .build();
/// assert_eq!(title.plain_text(), "Ender Dragon");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BarTitle {
    /// Unstyled text.
    Plain(String),
    /// A full chat component, styling and children included.
    Component(TextComponent),
}

impl BarTitle {
    /// Creates a builder for styled titles.
    pub fn builder() -> TitleBuilder {
        TitleBuilder::default()
    }

    /// Returns the component form sent in packets. Plain titles wrap into
    /// an unstyled component.
    pub fn as_component(&self) -> TextComponent {
        match self {
            BarTitle::Plain(text) => TextComponent::plain(text.clone()),
            BarTitle::Component(component) => component.clone(),
        }
    }

    /// Returns the title's text with all styling stripped.
    pub fn plain_text(&self) -> String {
        match self {
            BarTitle::Plain(text) => text.clone(),
            BarTitle::Component(component) => component.plain_text(),
        }
    }
}

impl From<&str> for BarTitle {
    fn from(text: &str) -> Self {
        BarTitle::Plain(text.to_owned())
    }
}

impl From<String> for BarTitle {
    fn from(text: String) -> Self {
        BarTitle::Plain(text)
    }
}

impl From<TextComponent> for BarTitle {
    fn from(component: TextComponent) -> Self {
        BarTitle::Component(component)
    }
}

impl std::fmt::Display for BarTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plain_text())
    }
}

/// Builder producing a styled [`BarTitle`].
///
/// Starts from either a plain string ([`text`](TitleBuilder::text)) or an
/// existing component ([`component`](TitleBuilder::component)); the styling
/// setters then apply on top. Styles left untouched stay unset so the
/// client inherits its defaults.
#[derive(Debug, Clone, Default)]
pub struct TitleBuilder {
    text: Option<String>,
    component: Option<TextComponent>,
    color: Option<ChatColor>,
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
    obfuscated: bool,
}

impl TitleBuilder {
    /// Sets the title text. Replaces a previously set component.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self.component = None;
        self
    }

    /// Sets the title from an existing component. Replaces previously set
    /// text.
    pub fn component(mut self, component: TextComponent) -> Self {
        self.component = Some(component);
        self.text = None;
        self
    }

    /// Sets the title color.
    pub fn color(mut self, color: ChatColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    pub fn obfuscated(mut self, obfuscated: bool) -> Self {
        self.obfuscated = obfuscated;
        self
    }

    /// Builds the title, applying the staged styling.
    pub fn build(self) -> BarTitle {
        let mut component = match (self.component, self.text) {
            (Some(component), _) => component,
            (None, Some(text)) => TextComponent::plain(text),
            (None, None) => TextComponent::plain(""),
        };
        if self.color.is_some() {
            component.color = self.color;
        }
        if self.bold {
            component.bold = Some(true);
        }
        if self.italic {
            component.italic = Some(true);
        }
        if self.underlined {
            component.underlined = Some(true);
        }
        if self.strikethrough {
            component.strikethrough = Some(true);
        }
        if self.obfuscated {
            component.obfuscated = Some(true);
        }
        BarTitle::Component(component)
    }
}
