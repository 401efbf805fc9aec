pub(crate) mod title;

use title::{TITLE_TEXT_FIELD, TitleProducer};

/// Capability tag of a producer the filter knows how to patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducerKind {
    /// No producer, or one without a known text field.
    #[default]
    None,
    /// Title generator; raw markup lives in `xmldata`.
    Title,
}

/// Closed set of text-bearing producers.
///
/// Each variant supplies the same capability triple: read the text field, write it, and toggle the
/// reload signal that tells the producer its cached layout is stale. New producer kinds are added
/// as variants here.
#[derive(Clone, Debug)]
pub enum Producer {
    /// Title generator.
    Title(TitleProducer),
}

impl Producer {
    /// Kind tag of this producer.
    pub fn kind(&self) -> ProducerKind {
        match self {
            Self::Title(_) => ProducerKind::Title,
        }
    }

    /// Name of the property holding the raw text.
    pub fn text_field_name(&self) -> &'static str {
        match self {
            Self::Title(_) => TITLE_TEXT_FIELD,
        }
    }

    /// Read a field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            Self::Title(t) => t.get(name),
        }
    }

    /// Overwrite a field by name.
    pub fn set_field(&mut self, name: &str, value: String) {
        match self {
            Self::Title(t) => t.set(name, value),
        }
    }

    /// Current state of the reload signal.
    pub fn force_reload(&self) -> bool {
        match self {
            Self::Title(t) => t.force_reload(),
        }
    }

    /// Raise or clear the reload signal.
    pub fn set_force_reload(&mut self, on: bool) {
        match self {
            Self::Title(t) => t.set_force_reload(on),
        }
    }

    /// Borrow the inner title producer, if this is one.
    pub fn as_title(&self) -> Option<&TitleProducer> {
        match self {
            Self::Title(t) => Some(t),
        }
    }

    /// Mutably borrow the inner title producer, if this is one.
    pub fn as_title_mut(&mut self) -> Option<&mut TitleProducer> {
        match self {
            Self::Title(t) => Some(t),
        }
    }
}

impl From<TitleProducer> for Producer {
    fn from(t: TitleProducer) -> Self {
        Self::Title(t)
    }
}
