use std::ops::{Index, IndexMut};

use serde::Serialize;
use serde_json::Value;

use crate::color::Color;
use crate::config::{CardDefaults, OutputConfig};
use crate::error::{Result, ValidationError};
use crate::modules::Module;
use crate::node::{Build, build_value, render_json};
use crate::types::{Size, Theme};

/// One renderable card: an ordered list of modules plus theme, size and an
/// optional accent color (always stored as `#rrggbb`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "card")]
pub struct Card {
    theme: Theme,
    size: Size,
    modules: Vec<Module>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modules<I, M>(modules: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Module>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// An empty card carrying the configured theme, size and color.
    pub fn from_defaults(defaults: &CardDefaults) -> Result<Self> {
        let mut card = Self::new();
        card.theme = defaults.theme;
        card.size = defaults.size;
        if let Some(color) = defaults.color.as_deref() {
            card.set_color(color)?;
        }
        Ok(card)
    }

    pub fn append(&mut self, module: impl Into<Module>) -> &mut Self {
        self.modules.push(module.into());
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.modules.clear();
        self
    }

    pub fn set_theme<T>(&mut self, theme: T) -> Result<&mut Self>
    where
        T: TryInto<Theme>,
        ValidationError: From<T::Error>,
    {
        self.theme = theme.try_into()?;
        Ok(self)
    }

    pub fn set_size<S>(&mut self, size: S) -> Result<&mut Self>
    where
        S: TryInto<Size>,
        ValidationError: From<S::Error>,
    {
        self.size = size.try_into()?;
        Ok(self)
    }

    /// Accepts a [`Color`], a [`crate::NamedColor`] or a `#rrggbb` string.
    pub fn set_color<C>(&mut self, color: C) -> Result<&mut Self>
    where
        C: TryInto<Color>,
        ValidationError: From<C::Error>,
    {
        let color: Color = color.try_into()?;
        self.color = Some(color.to_hex());
        Ok(self)
    }

    pub fn clear_color(&mut self) -> &mut Self {
        self.color = None;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Module> {
        self.modules.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }
}

impl Build for Card {
    fn build(&self) -> Value {
        tracing::trace!(modules = self.modules.len(), "building card");
        build_value(self)
    }

    fn to_json_with(&self, output: &OutputConfig) -> String {
        tracing::trace!(modules = self.modules.len(), "rendering card");
        render_json(self, output)
    }
}

impl Index<usize> for Card {
    type Output = Module;

    fn index(&self, index: usize) -> &Module {
        &self.modules[index]
    }
}

impl IndexMut<usize> for Card {
    fn index_mut(&mut self, index: usize) -> &mut Module {
        &mut self.modules[index]
    }
}

impl<M: Into<Module>> Extend<M> for Card {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.modules.extend(iter.into_iter().map(Into::into));
    }
}

impl<M: Into<Module>> FromIterator<M> for Card {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self::with_modules(iter)
    }
}

impl IntoIterator for Card {
    type Item = Module;
    type IntoIter = std::vec::IntoIter<Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.into_iter()
    }
}

impl<'a> IntoIterator for &'a Card {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

/// Cards sent together. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardMessage {
    cards: Vec<Card>,
}

impl CardMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, card: Card) -> &mut Self {
        self.cards.push(card);
        self
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Build for CardMessage {
    fn build(&self) -> Value {
        tracing::trace!(cards = self.cards.len(), "building card message");
        build_value(self)
    }

    fn to_json_with(&self, output: &OutputConfig) -> String {
        tracing::trace!(cards = self.cards.len(), "rendering card message");
        render_json(self, output)
    }
}

impl From<Vec<Card>> for CardMessage {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl Index<usize> for CardMessage {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IndexMut<usize> for CardMessage {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl Extend<Card> for CardMessage {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromIterator<Card> for CardMessage {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CardMessage {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardMessage {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::modules::{Divider, Header, Invite};
    use serde_json::json;

    #[test]
    fn defaults_and_color_omission() {
        let card = Card::new();
        assert_eq!(card.theme(), Theme::Primary);
        assert_eq!(card.size(), Size::Lg);
        assert_eq!(
            card.to_json(),
            r#"{"type":"card","theme":"primary","size":"lg","modules":[]}"#
        );
    }

    #[test]
    fn color_inputs_normalize_to_hex() {
        let mut card = Card::new();
        card.set_color(Color::new(0x55, 0xff, 0xff)).expect("color");
        assert_eq!(card.color(), Some("#55ffff"));
        card.set_color(NamedColor::Gold).expect("color");
        assert_eq!(card.color(), Some("#ffaa00"));
        card.set_color("#AA00AA").expect("color");
        assert_eq!(card.color(), Some("#aa00aa"));
        assert_eq!(
            card.set_color("purple").unwrap_err(),
            ValidationError::InvalidColor("purple".into())
        );
        assert_eq!(card.color(), Some("#aa00aa"));
        assert_eq!(card.build()["color"], "#aa00aa");
        card.clear_color();
        assert!(card.build().get("color").is_none());
    }

    #[test]
    fn theme_and_size_accept_keywords() {
        let mut card = Card::new();
        card.set_theme("warning")
            .expect("theme")
            .set_size(Size::Sm)
            .expect("size");
        assert_eq!(card.theme(), Theme::Warning);
        assert_eq!(card.size(), Size::Sm);
        assert!(card.set_theme("rainbow").is_err());
        assert!(card.set_size("xl").is_err());
        assert_eq!(card.theme(), Theme::Warning);
    }

    #[test]
    fn append_is_visible_on_next_build() {
        let mut card = Card::new();
        card.append(Header::new("Test"));
        assert_eq!(card.build()["modules"].as_array().map(Vec::len), Some(1));
        card.append(Divider::new()).append(Invite::new("abc"));
        assert_eq!(card.len(), 3);
        assert_eq!(card.build()["modules"][2]["code"], "abc");
        card.clear();
        assert!(card.is_empty());
        assert_eq!(card.build()["modules"], json!([]));
    }

    #[test]
    fn indexed_access() {
        let mut card = Card::with_modules([Divider::new()]);
        card[0] = Invite::new("x").into();
        assert_eq!(card[0].kind(), "invite");
        assert!(card.get(1).is_none());
        let kinds: Vec<_> = card.iter().map(Module::kind).collect();
        assert_eq!(kinds, ["invite"]);
    }

    #[test]
    fn from_defaults_applies_metadata() {
        let defaults = CardDefaults {
            theme: Theme::Info,
            size: Size::Sm,
            color: Some("#123abc".into()),
        };
        let card = Card::from_defaults(&defaults).expect("card");
        assert_eq!(
            card.to_json(),
            r##"{"type":"card","theme":"info","size":"sm","modules":[],"color":"#123abc"}"##
        );
    }

    #[test]
    fn message_is_bare_array() {
        let mut message = CardMessage::new();
        assert_eq!(message.to_json(), "[]");
        message
            .append(Card::with_modules([Invite::new("one")]))
            .append(Card::with_modules([Invite::new("two")]));
        let value = message.build();
        assert_eq!(value[0]["modules"][0]["code"], "one");
        assert_eq!(value[1]["modules"][0]["code"], "two");
        message[1].set_theme(Theme::Danger).expect("theme");
        assert_eq!(message.build()[1]["theme"], "danger");
    }

    #[test]
    fn pretty_output_uses_configured_indent() {
        let card = Card::with_modules([Divider::new()]);
        let pretty = card.to_json_with(&OutputConfig::pretty(2));
        assert!(pretty.contains("\n  \"type\": \"card\""));
        assert!(card.to_json_pretty().contains("\n    \"theme\": \"primary\""));
        let parsed: Value = serde_json::from_str(&pretty).expect("json");
        assert_eq!(parsed, card.build());
    }
}
