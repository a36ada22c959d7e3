//! Widget notifications
//!
//! Observers register a callback and get back an id they can use to
//! unsubscribe. Events carry no payload; observers query the widget.

use std::fmt;

/// Something that happened to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Text was inserted, deleted or replaced
    ContentChanged,
    /// The active language changed
    LanguageChanged,
    /// The active color scheme changed
    SchemeChanged,
    /// A full highlight pass finished
    AllHighlighted,
    /// Content was replaced from a file
    LoadedFromFile,
    /// Content was written to a file
    SavedToFile,
    /// Text was pasted into an editor
    TextPasted,
    /// The selection changed
    SelectionChanged,
    /// The editor switched between block and line cursor
    CursorModeChanged,
}

impl Event {
    /// Virtual-event style name, e.g. `<<ContentChanged>>`
    pub fn name(&self) -> &'static str {
        match self {
            Event::ContentChanged => "<<ContentChanged>>",
            Event::LanguageChanged => "<<LanguageChanged>>",
            Event::SchemeChanged => "<<SchemeChanged>>",
            Event::AllHighlighted => "<<AllHighlighted>>",
            Event::LoadedFromFile => "<<LoadedFromFile>>",
            Event::SavedToFile => "<<SavedToFile>>",
            Event::TextPasted => "<<TextPasted>>",
            Event::SelectionChanged => "<<SelectionChanged>>",
            Event::CursorModeChanged => "<<CursorModeChanged>>",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something the widget worked around instead of failing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The requested language is unknown; the fallback language is used
    LanguageFallback { requested: String, used: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LanguageFallback { requested, used } => write!(
                f,
                "Language '{}' is not supported, falling back to '{}'",
                requested, used
            ),
        }
    }
}

/// Handle returned by `subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(Event)>;

/// Registered observers of one widget
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every event
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Event) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false when the id is unknown
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    /// Deliver an event to every observer in subscription order
    pub fn notify(&mut self, event: Event) {
        tracing::trace!(%event, observers = self.callbacks.len(), "notify");
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish()
    }
}
