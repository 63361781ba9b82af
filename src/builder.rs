use crate::theme::{Scalar, TokenTree, TokenValue};

impl TokenTree {
    /// Create a new empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a leaf token.
    #[must_use]
    pub fn token(mut self, key: &str, value: impl Into<Scalar>) -> Self {
        self.insert(key, TokenValue::Scalar(value.into()));
        self
    }

    /// Add a nested group.
    #[must_use]
    pub fn group(mut self, key: &str, tree: Self) -> Self {
        self.insert(key, TokenValue::Group(tree));
        self
    }

    /// Add a color token under `key`.
    #[must_use]
    pub fn color(self, key: &str, value: &str) -> Self {
        self.token(key, value)
    }

    /// Add a reference token pointing at `path` (`{path}`).
    #[must_use]
    pub fn reference(self, key: &str, path: &str) -> Self {
        self.token(key, format!("{{{path}}}"))
    }

    /// Add a numeric scale: `50`, `100`, ... keyed by each step.
    #[must_use]
    pub fn scale(self, key: &str, steps: &[(u32, &str)]) -> Self {
        let palette = steps
            .iter()
            .fold(Self::new(), |tree, (step, value)| {
                tree.token(&step.to_string(), *value)
            });
        self.group(key, palette)
    }
}

impl FromIterator<(String, TokenValue)> for TokenTree {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}
