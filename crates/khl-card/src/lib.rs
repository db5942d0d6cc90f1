//! Typed builder for KaiHeiLa card messages.
//!
//! Accessories are composed into modules, modules into a [`Card`], cards into
//! a [`CardMessage`]. Every constraint the platform enforces is checked when a
//! node is constructed, so serializing a finished tree through [`Build`]
//! cannot fail.
//!
//! ```
//! use khl_card::{Build, Card, Divider, Header, Invite};
//!
//! let mut card = Card::new();
//! card.append(Header::new("Test")).append(Divider::new()).append(Invite::new("abc123"));
//! assert_eq!(
//!     card.to_json(),
//!     r#"{"type":"card","theme":"primary","size":"lg","modules":[{"type":"header","text":{"type":"plain-text","content":"Test"}},{"type":"divider"},{"type":"invite","code":"abc123"}]}"#
//! );
//! ```

pub mod accessory;
pub mod builder;
pub mod card;
pub mod color;
pub mod config;
pub mod error;
pub mod modules;
mod node;
pub mod timestamp;
pub mod types;

pub use accessory::{
    Accessory, Button, Image, Kmarkdown, NonText, Paragraph, PlainText, SectionText, TextElement,
};
pub use builder::{
    ActionGroupBuilder, CardBuilder, CardMessageBuilder, ContainerBuilder, ContextBuilder,
    ImageGroupBuilder,
};
pub use card::{Card, CardMessage};
pub use color::{Color, NamedColor};
pub use config::{CardDefaults, ConfigError, JsonStyle, OutputConfig, RenderConfig};
pub use error::{Result, ValidationError};
pub use modules::{
    ActionGroup, Audio, Container, Context, Countdown, Divider, File, Header, ImageGroup, Invite,
    Module, Section, Video,
};
pub use node::Build;
pub use types::{CountdownMode, ImageSize, SectionMode, Size, Theme};
