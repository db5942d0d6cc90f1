//! Card sections. Each module checks its arity and content when constructed,
//! so a built module always serializes.

use chrono::{Local, TimeZone, Utc};
use serde::Serialize;

use crate::accessory::{Accessory, Button, Image, NonText, PlainText, SectionText};
use crate::error::{Result, ValidationError, reject};
use crate::node::Build;
use crate::timestamp::parse_timestamp;
use crate::types::{CountdownMode, SectionMode};

/// Title line. Only plain text is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "header")]
pub struct Header {
    pub text: PlainText,
}

impl Header {
    pub fn new(text: impl Into<PlainText>) -> Self {
        Self { text: text.into() }
    }
}

/// Text with an optional image or button beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "section")]
pub struct Section {
    pub mode: SectionMode,
    pub text: SectionText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<NonText>,
}

impl Section {
    pub fn new(text: impl Into<SectionText>) -> Self {
        Self {
            mode: SectionMode::default(),
            text: text.into(),
            accessory: None,
        }
    }

    pub fn mode(mut self, mode: SectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn accessory(mut self, accessory: impl Into<NonText>) -> Self {
        self.accessory = Some(accessory.into());
        self
    }
}

fn check_arity(
    module: &'static str,
    count: usize,
    max: usize,
    too_many: fn(usize, usize) -> ValidationError,
) -> Result<()> {
    if count == 0 {
        return Err(reject(ValidationError::Empty(module)));
    }
    if count > max {
        return Err(reject(too_many(count, max)));
    }
    Ok(())
}

fn too_many_images(count: usize, max: usize) -> ValidationError {
    ValidationError::TooManyImages { count, max }
}

/// Up to nine images laid out as a square-cropped grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "image-group")]
pub struct ImageGroup {
    elements: Vec<Image>,
}

impl ImageGroup {
    pub const MAX_ELEMENTS: usize = 9;

    pub fn new(elements: impl IntoIterator<Item = Image>) -> Result<Self> {
        let elements: Vec<Image> = elements.into_iter().collect();
        check_arity("image-group", elements.len(), Self::MAX_ELEMENTS, too_many_images)?;
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[Image] {
        &self.elements
    }
}

/// Up to nine images stacked vertically without cropping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "container")]
pub struct Container {
    elements: Vec<Image>,
}

impl Container {
    pub const MAX_ELEMENTS: usize = 9;

    pub fn new(elements: impl IntoIterator<Item = Image>) -> Result<Self> {
        let elements: Vec<Image> = elements.into_iter().collect();
        check_arity("container", elements.len(), Self::MAX_ELEMENTS, too_many_images)?;
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[Image] {
        &self.elements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "action-group")]
pub struct ActionGroup {
    elements: Vec<Button>,
}

impl ActionGroup {
    pub const MAX_ELEMENTS: usize = 4;

    pub fn new(elements: impl IntoIterator<Item = Button>) -> Result<Self> {
        let elements: Vec<Button> = elements.into_iter().collect();
        check_arity(
            "action-group",
            elements.len(),
            Self::MAX_ELEMENTS,
            |count, max| ValidationError::TooManyButtons { count, max },
        )?;
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[Button] {
        &self.elements
    }
}

/// Small mixed text and image line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "context")]
pub struct Context {
    elements: Vec<Accessory>,
}

impl Context {
    pub const MAX_ELEMENTS: usize = 10;

    pub fn new<I, A>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Accessory>,
    {
        let elements: Vec<Accessory> = elements.into_iter().map(Into::into).collect();
        check_arity(
            "context",
            elements.len(),
            Self::MAX_ELEMENTS,
            |count, max| ValidationError::TooManyElements { count, max },
        )?;
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[Accessory] {
        &self.elements
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "divider")]
pub struct Divider {}

impl Divider {
    pub fn new() -> Self {
        Self {}
    }
}

/// Countdown timer. Times are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "countdown", rename_all = "camelCase")]
pub struct Countdown {
    mode: CountdownMode,
    end_time: i64,
    start_time: i64,
}

impl Countdown {
    pub fn new<M>(mode: M, end_time: i64, start_time: i64) -> Result<Self>
    where
        M: TryInto<CountdownMode>,
        ValidationError: From<M::Error>,
    {
        let mode = mode.try_into()?;
        if end_time < start_time {
            return Err(reject(ValidationError::CountdownRange {
                start_time,
                end_time,
            }));
        }
        Ok(Self {
            mode,
            end_time,
            start_time,
        })
    }

    /// Starts the countdown at the current system time.
    pub fn starting_now<M>(mode: M, end_time: i64) -> Result<Self>
    where
        M: TryInto<CountdownMode>,
        ValidationError: From<M::Error>,
    {
        Self::new(mode, end_time, Utc::now().timestamp_millis())
    }

    /// Builds a countdown from `YYYY-MM-DD HH:MM:SS` strings read in `tz`.
    /// A missing start falls back to `now_ms`.
    pub fn parse_in<Tz: TimeZone>(
        mode: CountdownMode,
        end: &str,
        start: Option<&str>,
        now_ms: i64,
        tz: &Tz,
    ) -> Result<Self> {
        let end_time = parse_timestamp(end, tz)?;
        let start_time = match start {
            Some(start) => parse_timestamp(start, tz)?,
            None => now_ms,
        };
        Self::new(mode, end_time, start_time)
    }

    pub fn parse_day(end: &str, now_ms: i64) -> Result<Self> {
        Self::parse_in(CountdownMode::Day, end, None, now_ms, &Local)
    }

    pub fn parse_hour(end: &str, now_ms: i64) -> Result<Self> {
        Self::parse_in(CountdownMode::Hour, end, None, now_ms, &Local)
    }

    /// Second-mode countdowns may also name their start time.
    pub fn parse_second(end: &str, start: Option<&str>, now_ms: i64) -> Result<Self> {
        Self::parse_in(CountdownMode::Second, end, start, now_ms, &Local)
    }

    pub fn mode(&self) -> CountdownMode {
        self.mode
    }

    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }
}

/// Server or voice channel invite, by code or full link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "invite")]
pub struct Invite {
    pub code: String,
}

impl Invite {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "file")]
pub struct File {
    pub src: String,
    pub title: String,
}

impl File {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "video")]
pub struct Video {
    pub src: String,
    pub title: String,
}

impl Video {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "audio")]
pub struct Audio {
    pub src: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Audio {
    pub fn new(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
            cover: None,
        }
    }

    pub fn cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

/// Any card module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Module {
    Header(Header),
    Section(Section),
    ImageGroup(ImageGroup),
    Container(Container),
    ActionGroup(ActionGroup),
    Context(Context),
    Divider(Divider),
    Countdown(Countdown),
    Invite(Invite),
    File(File),
    Video(Video),
    Audio(Audio),
}

impl Module {
    /// The wire `type` tag of the wrapped module.
    pub fn kind(&self) -> &'static str {
        match self {
            Module::Header(_) => "header",
            Module::Section(_) => "section",
            Module::ImageGroup(_) => "image-group",
            Module::Container(_) => "container",
            Module::ActionGroup(_) => "action-group",
            Module::Context(_) => "context",
            Module::Divider(_) => "divider",
            Module::Countdown(_) => "countdown",
            Module::Invite(_) => "invite",
            Module::File(_) => "file",
            Module::Video(_) => "video",
            Module::Audio(_) => "audio",
        }
    }
}

macro_rules! module_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Module {
                fn from(value: $variant) -> Self {
                    Module::$variant(value)
                }
            }

            impl Build for $variant {}
        )+
    };
}

module_from!(
    Header,
    Section,
    ImageGroup,
    Container,
    ActionGroup,
    Context,
    Divider,
    Countdown,
    Invite,
    File,
    Video,
    Audio,
);

impl Build for Module {}
