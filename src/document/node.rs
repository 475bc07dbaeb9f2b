/// Ordered attribute list of an element.
///
/// Source order is kept so a transformed document writes its attributes back in the order
/// they were read. Setting an existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterate `(key, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.set(k, v);
        }
        out
    }
}

/// One child slot of an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    /// Nested element.
    Element(DocumentNode),
    /// Character data, stored unescaped.
    Text(String),
    /// `<![CDATA[...]]>` section, stored verbatim.
    CData(String),
    /// `<!-- ... -->` comment body.
    Comment(String),
}

/// One element of the graphics tree. Children are owned exclusively by their parent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentNode {
    /// Tag name (`svg`, `g`, `circle`, `style`, ...).
    pub name: String,
    /// Geometry and presentation attributes.
    pub attributes: Attributes,
    /// Ordered child content.
    pub children: Vec<Child>,
}

impl DocumentNode {
    /// Element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Builder-style child element append.
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Builder-style text append.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Shorthand for `attributes.get`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Child elements in document order, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &DocumentNode> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Mutable child elements in document order.
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut DocumentNode> {
        self.children.iter_mut().filter_map(|c| match c {
            Child::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Raw CSS text of a style element: all text and CDATA children concatenated in order.
    pub fn style_text(&self) -> Option<String> {
        let mut css: Option<String> = None;
        for c in &self.children {
            if let Child::Text(t) | Child::CData(t) = c {
                css.get_or_insert_with(String::new).push_str(t);
            }
        }
        css
    }

    /// Append CSS to the style text, creating a text child when there is none.
    ///
    /// The CSS goes into the last text/CDATA child so it follows everything already there;
    /// that child keeps its kind.
    pub fn append_style_text(&mut self, css: &str) {
        let slot = self.children.iter_mut().rev().find_map(|c| match c {
            Child::Text(t) | Child::CData(t) => Some(t),
            _ => None,
        });
        match slot {
            Some(t) => t.push_str(css),
            None => self.children.push(Child::Text(css.to_string())),
        }
    }
}

/// Parsed `<?xml ...?>` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlDecl {
    /// `version` pseudo-attribute.
    pub version: String,
    /// `encoding` pseudo-attribute, if declared.
    pub encoding: Option<String>,
    /// `standalone` pseudo-attribute, if declared.
    pub standalone: Option<String>,
}

/// Top-level markup that precedes the root element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Misc {
    /// `<!DOCTYPE ...>` body.
    DocType(String),
    /// Comment body.
    Comment(String),
    /// Processing instruction body.
    ProcessingInstruction(String),
}

/// A whole graphics document: prolog plus a single root element.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// XML declaration, if the source had one.
    pub declaration: Option<XmlDecl>,
    /// Doctype, comments and processing instructions before the root, in order.
    pub prolog: Vec<Misc>,
    /// Root element, usually `<svg>`.
    pub root: DocumentNode,
}

impl Document {
    /// Document with no prolog around `root`.
    pub fn from_root(root: DocumentNode) -> Self {
        Self {
            declaration: None,
            prolog: Vec::new(),
            root,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/node.rs"]
mod tests;
