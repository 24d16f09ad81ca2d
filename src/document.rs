//! Document-level metadata touched when the language changes.
//!
//! Only the presentation controller writes through [`DocumentEffects`];
//! rendering code reads the resulting [`DocumentHead`].

/// Side-effect boundary for the hosting document.
pub trait DocumentEffects {
    /// Set the root element's `lang` attribute.
    fn set_lang(&mut self, code: &str);

    fn set_title(&mut self, title: &str);

    /// Set the `content` of `<meta name="description">`.
    ///
    /// Returns `false` when the document has no such element, in which case
    /// nothing is changed.
    fn set_meta_description(&mut self, content: &str) -> bool;
}

/// The `<head>` state of the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHead {
    pub lang: String,
    pub title: String,
    /// `None` when the document carries no meta description element
    pub meta_description: Option<String>,
}

impl DocumentHead {
    /// Empty head that includes a meta description element.
    pub fn new() -> Self {
        Self {
            lang: String::new(),
            title: String::new(),
            meta_description: Some(String::new()),
        }
    }

    pub fn without_meta_description() -> Self {
        Self {
            meta_description: None,
            ..Self::new()
        }
    }
}

impl Default for DocumentHead {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEffects for DocumentHead {
    fn set_lang(&mut self, code: &str) {
        self.lang = code.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_meta_description(&mut self, content: &str) -> bool {
        match self.meta_description.as_mut() {
            Some(meta) => {
                *meta = content.to_string();
                true
            }
            None => false,
        }
    }
}
