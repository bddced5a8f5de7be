//! Lenient `key=value` decoding of a `jsonschema` tag payload.
//!
//! Payloads are comma separated, but the commas are not escaped in the wild:
//!
//! ```text
//! title=Deprecation Date,description=The exact date, when deprecated.
//! ```
//!
//! A naive split yields the fragment ` when deprecated.` with no `=` in it.
//! [`decode`] treats every such fragment as the continuation of the value
//! before it and joins it back with the comma it was split on. The offsets of
//! those re-joined commas are kept so a fix can escape them in place.

/// A comma that was re-joined into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueComma {
    /// Byte offset of the comma inside the payload.
    pub offset: usize,
    /// `true` when the comma is written as `\,`.
    pub escaped: bool,
}

/// One decoded `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    key: String,
    value: String,
    commas: Vec<ValueComma>,
}

impl TagPair {
    /// The key, trimmed. May be empty for a segment such as `=x`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The trimmed value, with continuation segments joined back by `,`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Commas that ended up inside the value, in payload order.
    pub fn commas(&self) -> &[ValueComma] {
        &self.commas
    }

    /// Returns `true` if the value contains a comma not written as `\,`.
    pub fn has_unescaped_comma(&self) -> bool {
        self.commas.iter().any(|c| !c.escaped)
    }
}

/// Ordered key/value pairs decoded from one payload.
///
/// Keys are unique. A repeated key overwrites the earlier value but keeps the
/// position of its first occurrence, so iteration order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPairs {
    pairs: Vec<TagPair>,
}

impl TagPairs {
    /// Value of `key`, after any overwrite by a later duplicate.
    ///
    /// ```
    /// use golinter_jsonschema::decode::decode;
    ///
    /// let pairs = decode("enum=a,title=T,enum=b");
    /// assert_eq!(pairs.get("enum"), Some("b"));
    /// assert_eq!(pairs.keys().collect::<Vec<_>>(), ["enum", "title"]);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Pairs in first-occurrence order of their keys.
    pub fn iter(&self) -> impl Iterator<Item = &TagPair> {
        self.pairs.iter()
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.key.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `true` when the payload held no `key=value` segment at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Inserts or overwrites `key` and returns its index.
    fn set(&mut self, key: String, value: String) -> usize {
        match self.pairs.iter().position(|p| p.key == key) {
            Some(idx) => {
                let pair = &mut self.pairs[idx];
                pair.value = value;
                pair.commas.clear();
                idx
            }
            None => {
                self.pairs.push(TagPair {
                    key,
                    value,
                    commas: Vec::new(),
                });
                self.pairs.len() - 1
            }
        }
    }
}

impl<'a> IntoIterator for &'a TagPairs {
    type Item = &'a TagPair;
    type IntoIter = std::slice::Iter<'a, TagPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Decodes a `jsonschema` payload into [`TagPairs`].
///
/// - A segment containing `=` starts a pair; key and value are trimmed.
/// - A segment without `=` is appended, un-trimmed and prefixed with `,`,
///   to the value of the most recent non-empty key. Before any such key it
///   is dropped.
/// - An empty final segment (trailing comma) is ignored.
///
/// # Examples
///
/// ```
/// use golinter_jsonschema::decode::decode;
///
/// let pairs = decode("title=Date,description=The date, when deprecated.");
/// assert_eq!(pairs.get("title"), Some("Date"));
/// assert_eq!(pairs.get("description"), Some("The date, when deprecated."));
/// assert_eq!(pairs.len(), 2);
/// ```
pub fn decode(payload: &str) -> TagPairs {
    let mut pairs = TagPairs::default();
    let mut current: Option<usize> = None;

    let segment_count = payload.split(',').count();
    let mut seg_start = 0usize;

    for (i, segment) in payload.split(',').enumerate() {
        let this_start = seg_start;
        seg_start += segment.len() + 1;

        if let Some(eq) = segment.find('=') {
            let key = segment[..eq].trim().to_string();
            let value = segment[eq + 1..].trim().to_string();
            let empty_key = key.is_empty();
            let idx = pairs.set(key, value);
            current = if empty_key { None } else { Some(idx) };
            continue;
        }

        if segment.is_empty() && i + 1 == segment_count {
            continue;
        }

        // Segments after the first are always preceded by the comma they
        // were split on.
        let (Some(idx), Some(comma)) = (current, this_start.checked_sub(1)) else {
            continue;
        };
        let pair = &mut pairs.pairs[idx];
        pair.value.push(',');
        pair.value.push_str(segment);
        pair.commas.push(ValueComma {
            offset: comma,
            escaped: comma > 0 && payload.as_bytes()[comma - 1] == b'\\',
        });
    }

    pairs
}
