//! Leaf elements placed inside modules: text, paragraphs, images and buttons.

use serde::Serialize;

use crate::error::{Result, ValidationError, reject};
use crate::node::{Build, is_true};
use crate::types::{ImageSize, Theme};

/// Plain display text. `emoji` turns `:shortcut:` sequences into emoji on the
/// client and is only written out when disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "plain-text")]
pub struct PlainText {
    pub content: String,
    #[serde(skip_serializing_if = "is_true")]
    pub emoji: bool,
}

impl PlainText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            emoji: true,
        }
    }

    pub fn emoji(mut self, emoji: bool) -> Self {
        self.emoji = emoji;
        self
    }
}

impl Default for PlainText {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for PlainText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlainText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// KMarkdown text, passed through to the platform untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "kmarkdown")]
pub struct Kmarkdown {
    pub content: String,
}

impl Kmarkdown {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Either kind of text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextElement {
    PlainText(PlainText),
    Kmarkdown(Kmarkdown),
}

impl TextElement {
    pub fn content(&self) -> &str {
        match self {
            TextElement::PlainText(text) => &text.content,
            TextElement::Kmarkdown(text) => &text.content,
        }
    }
}

impl From<PlainText> for TextElement {
    fn from(value: PlainText) -> Self {
        TextElement::PlainText(value)
    }
}

impl From<Kmarkdown> for TextElement {
    fn from(value: Kmarkdown) -> Self {
        TextElement::Kmarkdown(value)
    }
}

impl From<&str> for TextElement {
    fn from(value: &str) -> Self {
        TextElement::PlainText(value.into())
    }
}

impl From<String> for TextElement {
    fn from(value: String) -> Self {
        TextElement::PlainText(value.into())
    }
}

impl TryFrom<Accessory> for TextElement {
    type Error = ValidationError;

    fn try_from(value: Accessory) -> Result<Self> {
        match value {
            Accessory::PlainText(text) => Ok(text.into()),
            Accessory::Kmarkdown(text) => Ok(text.into()),
            Accessory::Paragraph(_) => Err(ValidationError::NestedParagraph),
            other => Err(ValidationError::NonTextField(other.kind())),
        }
    }
}

/// Multi-column text. Holds exactly `cols` text fields, `cols` in `1..=3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "paragraph")]
pub struct Paragraph {
    cols: usize,
    fields: Vec<TextElement>,
}

impl Paragraph {
    pub const MAX_COLS: usize = 3;

    pub fn new<I, A>(cols: usize, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Accessory>,
    {
        if !(1..=Self::MAX_COLS).contains(&cols) {
            return Err(reject(ValidationError::ParagraphCols(cols)));
        }
        let fields: Vec<Accessory> = fields.into_iter().map(Into::into).collect();
        if fields.len() != cols {
            return Err(reject(ValidationError::ParagraphFields {
                cols,
                fields: fields.len(),
            }));
        }
        let fields = fields
            .into_iter()
            .map(TextElement::try_from)
            .collect::<Result<Vec<_>>>()
            .map_err(reject)?;
        Ok(Self { cols, fields })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn fields(&self) -> &[TextElement] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub size: ImageSize,
    /// Round crop, honoured when the image sits next to section text.
    pub circle: bool,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            size: ImageSize::default(),
            circle: false,
        }
    }

    pub fn size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }
}

/// A clickable button. `click` names the interaction kind, for example
/// `link` (open `value` as a URL) or `return-val` (send `value` back as an
/// event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    pub theme: Theme,
    pub value: String,
    pub click: String,
    pub text: TextElement,
}

impl Button {
    pub const CLICK_LINK: &'static str = "link";
    pub const CLICK_RETURN_VALUE: &'static str = "return-val";

    pub fn new(text: impl Into<TextElement>) -> Self {
        Self {
            theme: Theme::default(),
            value: String::new(),
            click: String::new(),
            text: text.into(),
        }
    }

    pub fn link(text: impl Into<TextElement>, url: impl Into<String>) -> Self {
        Self::new(text).click(Self::CLICK_LINK).value(url)
    }

    pub fn return_value(text: impl Into<TextElement>, value: impl Into<String>) -> Self {
        Self::new(text).click(Self::CLICK_RETURN_VALUE).value(value)
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn click(mut self, click: impl Into<String>) -> Self {
        self.click = click.into();
        self
    }
}

/// Anything a section may show next to its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NonText {
    Image(Image),
    Button(Button),
}

impl From<Image> for NonText {
    fn from(value: Image) -> Self {
        NonText::Image(value)
    }
}

impl From<Button> for NonText {
    fn from(value: Button) -> Self {
        NonText::Button(value)
    }
}

/// The body of a section: a single text element or a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionText {
    PlainText(PlainText),
    Kmarkdown(Kmarkdown),
    Paragraph(Paragraph),
}

impl From<PlainText> for SectionText {
    fn from(value: PlainText) -> Self {
        SectionText::PlainText(value)
    }
}

impl From<Kmarkdown> for SectionText {
    fn from(value: Kmarkdown) -> Self {
        SectionText::Kmarkdown(value)
    }
}

impl From<Paragraph> for SectionText {
    fn from(value: Paragraph) -> Self {
        SectionText::Paragraph(value)
    }
}

impl From<TextElement> for SectionText {
    fn from(value: TextElement) -> Self {
        match value {
            TextElement::PlainText(text) => text.into(),
            TextElement::Kmarkdown(text) => text.into(),
        }
    }
}

impl From<&str> for SectionText {
    fn from(value: &str) -> Self {
        SectionText::PlainText(value.into())
    }
}

/// Any accessory, as accepted by context modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Accessory {
    PlainText(PlainText),
    Kmarkdown(Kmarkdown),
    Paragraph(Paragraph),
    Image(Image),
    Button(Button),
}

impl Accessory {
    /// The wire `type` tag of the wrapped element.
    pub fn kind(&self) -> &'static str {
        match self {
            Accessory::PlainText(_) => "plain-text",
            Accessory::Kmarkdown(_) => "kmarkdown",
            Accessory::Paragraph(_) => "paragraph",
            Accessory::Image(_) => "image",
            Accessory::Button(_) => "button",
        }
    }
}

impl From<PlainText> for Accessory {
    fn from(value: PlainText) -> Self {
        Accessory::PlainText(value)
    }
}

impl From<Kmarkdown> for Accessory {
    fn from(value: Kmarkdown) -> Self {
        Accessory::Kmarkdown(value)
    }
}

impl From<Paragraph> for Accessory {
    fn from(value: Paragraph) -> Self {
        Accessory::Paragraph(value)
    }
}

impl From<Image> for Accessory {
    fn from(value: Image) -> Self {
        Accessory::Image(value)
    }
}

impl From<Button> for Accessory {
    fn from(value: Button) -> Self {
        Accessory::Button(value)
    }
}

impl From<TextElement> for Accessory {
    fn from(value: TextElement) -> Self {
        match value {
            TextElement::PlainText(text) => text.into(),
            TextElement::Kmarkdown(text) => text.into(),
        }
    }
}

impl From<NonText> for Accessory {
    fn from(value: NonText) -> Self {
        match value {
            NonText::Image(image) => image.into(),
            NonText::Button(button) => button.into(),
        }
    }
}

impl Build for PlainText {}
impl Build for Kmarkdown {}
impl Build for TextElement {}
impl Build for Paragraph {}
impl Build for Image {}
impl Build for Button {}
impl Build for NonText {}
impl Build for SectionText {}
impl Build for Accessory {}
