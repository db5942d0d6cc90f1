//! Fluent construction helpers.
//!
//! Builders are consumed by every call and `build` moves the finished value
//! out, so a builder cannot be observed half-way or reused after building.
//! Calls that can fail (keyword parsing, countdown strings) return
//! `Result<Self>` so chains read naturally with `?`.

use crate::accessory::{Accessory, Button, Image, NonText, PlainText, SectionText};
use crate::card::{Card, CardMessage};
use crate::color::Color;
use crate::error::{Result, ValidationError};
use crate::modules::{
    ActionGroup, Audio, Container, Context, Countdown, Divider, File, Header, ImageGroup, Invite,
    Module, Section, Video,
};
use crate::types::{SectionMode, Size, Theme};

#[derive(Debug, Clone, Default)]
pub struct CardMessageBuilder {
    message: CardMessage,
}

impl CardMessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card(mut self, card: Card) -> Self {
        self.message.append(card);
        self
    }

    pub fn build(self) -> CardMessage {
        self.message
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an existing card, keeping its modules and metadata.
    pub fn from_card(card: Card) -> Self {
        Self { card }
    }

    pub fn module(mut self, module: impl Into<Module>) -> Self {
        self.card.append(module);
        self
    }

    pub fn header(self, text: impl Into<PlainText>) -> Self {
        self.module(Header::new(text))
    }

    pub fn section(self, text: impl Into<SectionText>) -> Self {
        self.module(Section::new(text))
    }

    pub fn section_with(
        self,
        text: impl Into<SectionText>,
        mode: SectionMode,
        accessory: impl Into<NonText>,
    ) -> Self {
        self.module(Section::new(text).mode(mode).accessory(accessory))
    }

    pub fn image_group(self, image_group: ImageGroup) -> Self {
        self.module(image_group)
    }

    pub fn container(self, container: Container) -> Self {
        self.module(container)
    }

    pub fn action_group(self, action_group: ActionGroup) -> Self {
        self.module(action_group)
    }

    pub fn context(self, context: Context) -> Self {
        self.module(context)
    }

    pub fn divider(self) -> Self {
        self.module(Divider::new())
    }

    pub fn day_countdown(self, end: &str, now_ms: i64) -> Result<Self> {
        Ok(self.module(Countdown::parse_day(end, now_ms)?))
    }

    pub fn hour_countdown(self, end: &str, now_ms: i64) -> Result<Self> {
        Ok(self.module(Countdown::parse_hour(end, now_ms)?))
    }

    pub fn second_countdown(self, end: &str, start: Option<&str>, now_ms: i64) -> Result<Self> {
        Ok(self.module(Countdown::parse_second(end, start, now_ms)?))
    }

    pub fn invite(self, code: impl Into<String>) -> Self {
        self.module(Invite::new(code))
    }

    pub fn file(self, src: impl Into<String>, title: impl Into<String>) -> Self {
        self.module(File::new(src, title))
    }

    pub fn video(self, src: impl Into<String>, title: impl Into<String>) -> Self {
        self.module(Video::new(src, title))
    }

    pub fn audio(
        self,
        src: impl Into<String>,
        title: impl Into<String>,
        cover: Option<&str>,
    ) -> Self {
        let audio = Audio::new(src, title);
        self.module(match cover {
            Some(cover) => audio.cover(cover),
            None => audio,
        })
    }

    pub fn theme<T>(mut self, theme: T) -> Result<Self>
    where
        T: TryInto<Theme>,
        ValidationError: From<T::Error>,
    {
        self.card.set_theme(theme)?;
        Ok(self)
    }

    pub fn size<S>(mut self, size: S) -> Result<Self>
    where
        S: TryInto<Size>,
        ValidationError: From<S::Error>,
    {
        self.card.set_size(size)?;
        Ok(self)
    }

    pub fn color<C>(mut self, color: C) -> Result<Self>
    where
        C: TryInto<Color>,
        ValidationError: From<C::Error>,
    {
        self.card.set_color(color)?;
        Ok(self)
    }

    /// The card as built so far.
    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn build(self) -> Card {
        self.card
    }
}

macro_rules! element_builder {
    ($(#[$meta:meta])* $name:ident, $element:ty, $module:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            elements: Vec<$element>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn add(mut self, element: impl Into<$element>) -> Self {
                self.elements.push(element.into());
                self
            }

            pub fn len(&self) -> usize {
                self.elements.len()
            }

            pub fn is_empty(&self) -> bool {
                self.elements.is_empty()
            }

            /// Arity is checked here, by the module constructor.
            pub fn build(self) -> Result<$module> {
                $module::new(self.elements)
            }
        }
    };
}

element_builder!(ImageGroupBuilder, Image, ImageGroup);
element_builder!(ContainerBuilder, Image, Container);
element_builder!(ActionGroupBuilder, Button, ActionGroup);
element_builder!(
    /// Accepts any accessory, including paragraphs.
    ContextBuilder,
    Accessory,
    Context
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessory::Kmarkdown;
    use crate::node::Build;
    use crate::types::CountdownMode;
    use serde_json::json;

    #[test]
    fn card_builder_appends_in_order() {
        let card = CardBuilder::new()
            .header("Test Header")
            .section("body")
            .divider()
            .invite("12345sdaf")
            .file("https://f", "f.txt")
            .video("https://v", "v.mp4")
            .audio("https://a", "a.mp3", Some("https://c"))
            .build();
        let kinds: Vec<_> = card.iter().map(Module::kind).collect();
        assert_eq!(
            kinds,
            ["header", "section", "divider", "invite", "file", "video", "audio"]
        );
        assert_eq!(card.build()["modules"][6]["cover"], "https://c");
    }

    #[test]
    fn card_builder_metadata() {
        let card = CardBuilder::new()
            .theme("success")
            .and_then(|b| b.size(Size::Sm))
            .and_then(|b| b.color("#00ff00"))
            .expect("metadata")
            .build();
        assert_eq!(card.theme(), Theme::Success);
        assert_eq!(card.color(), Some("#00ff00"));
        assert!(CardBuilder::new().theme("glow").is_err());
    }

    #[test]
    fn countdown_shortcuts_propagate_errors() {
        let builder = CardBuilder::new()
            .second_countdown("2031-01-01 00:00:10", Some("2031-01-01 00:00:00"), 0)
            .expect("countdown");
        match &builder.card()[0] {
            Module::Countdown(countdown) => {
                assert_eq!(countdown.mode(), CountdownMode::Second);
                assert_eq!(countdown.end_time() - countdown.start_time(), 10_000);
            }
            other => panic!("unexpected module {}", other.kind()),
        }
        assert!(CardBuilder::new().day_countdown("soon", 0).is_err());
        assert!(CardBuilder::new().hour_countdown("2000-01-01 00:00:00", i64::MAX).is_err());
    }

    #[test]
    fn element_builders_enforce_limits() {
        let group = (0..9)
            .fold(ImageGroupBuilder::new(), |b, i| b.add(Image::new(format!("u{i}"))))
            .build()
            .expect("group");
        assert_eq!(group.elements().len(), 9);

        let over = (0..5).fold(ActionGroupBuilder::new(), |b, i| b.add(Button::new(format!("b{i}"))));
        assert_eq!(over.len(), 5);
        assert!(over.build().is_err());

        assert!(ContainerBuilder::new().build().is_err());
    }

    #[test]
    fn context_builder_mixes_kinds() {
        let context = ContextBuilder::new()
            .add(Kmarkdown::new("by **someone**"))
            .add(Image::new("https://avatar").circle(true))
            .build()
            .expect("context");
        assert_eq!(
            context.build(),
            json!({
                "type": "context",
                "elements": [
                    {"type": "kmarkdown", "content": "by **someone**"},
                    {"type": "image", "src": "https://avatar", "alt": "", "size": "lg", "circle": true}
                ]
            })
        );
    }

    #[test]
    fn message_builder_keeps_card_order() {
        let message = CardMessageBuilder::new()
            .card(CardBuilder::new().invite("first").build())
            .card(CardBuilder::new().invite("second").build())
            .build();
        assert_eq!(message.len(), 2);
        assert_eq!(message[1][0], Module::from(Invite::new("second")));
    }
}
