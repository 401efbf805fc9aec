use std::collections::BTreeMap;

/// Property holding the title's raw markup.
pub const TITLE_TEXT_FIELD: &str = "xmldata";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Text layout as the title producer would hand it to its rasterizer.
pub struct TitleLayout {
    /// Markup the layout was built from.
    pub source: String,
    /// Lines of the laid-out text.
    pub lines: Vec<String>,
}

impl TitleLayout {
    fn build(source: String) -> Self {
        let lines = source.lines().map(str::to_owned).collect();
        Self { source, lines }
    }
}

/// Title generator with string properties and a cached text layout.
///
/// The layout is rebuilt lazily when `force_reload` is raised or when the markup no longer matches
/// what the cached layout was built from.
#[derive(Clone, Debug, Default)]
pub struct TitleProducer {
    properties: BTreeMap<String, String>,
    force_reload: bool,
    layout: Option<TitleLayout>,
    layout_builds: u64,
}

impl TitleProducer {
    /// Create a title whose markup field holds `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let mut p = Self::default();
        p.properties.insert(TITLE_TEXT_FIELD.to_owned(), text.into());
        p
    }

    /// Read a string property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Write a string property.
    pub fn set(&mut self, name: &str, value: String) {
        self.properties.insert(name.to_owned(), value);
    }

    /// Current markup, if set.
    pub fn text(&self) -> Option<&str> {
        self.get(TITLE_TEXT_FIELD)
    }

    /// Whether the cached layout must be rebuilt on the next [`TitleProducer::layout`] call.
    pub fn force_reload(&self) -> bool {
        self.force_reload
    }

    /// Raise or clear the reload signal.
    pub fn set_force_reload(&mut self, on: bool) {
        self.force_reload = on;
    }

    /// Number of times the layout has been (re)built.
    pub fn layout_builds(&self) -> u64 {
        self.layout_builds
    }

    /// Return the layout for the current markup, rebuilding it when stale.
    pub fn layout(&mut self) -> &TitleLayout {
        let source = self.text().unwrap_or_default().to_owned();
        let stale = self.force_reload || self.layout.as_ref().is_none_or(|l| l.source != source);
        if stale {
            self.layout_builds += 1;
            self.layout = Some(TitleLayout::build(source));
        }
        self.layout
            .get_or_insert_with(|| TitleLayout::build(String::new()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/producer/title.rs"]
mod tests;
