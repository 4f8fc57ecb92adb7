use {crate::*, indexmap::IndexMap};

/// Splits a bracketed `.ini` key into its path segments.
///
/// All trailing `']'` are stripped, then the key is split on `'['`, consuming a `']'` directly before it:
/// `a[b][c]` -> `["a", "b", "c"]`, `a[b][]` -> `["a", "b", ""]`, `plain` -> `["plain"]`.
/// Unbalanced brackets are not an error - they are just part of the segments (`a]b` -> `["a]b"]`).
pub fn split_key_path(key: &str) -> Vec<&str> {
    let key = key.trim_end_matches(']');
    let bytes = key.as_bytes();

    let mut segments = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let delimiter = match bytes[idx] {
            b']' if bytes.get(idx + 1) == Some(&b'[') => 2,
            b'[' => 1,
            _ => 0,
        };

        if delimiter > 0 {
            segments.push(&key[start..idx]);
            idx += delimiter;
            start = idx;
        } else {
            idx += 1;
        }
    }

    segments.push(&key[start..]);

    segments
}

/// Expands a single bracketed `key` / `value` pair into a fresh nested [`table`].
///
/// `expand("a[b][c]", v)` -> `{a: {b: {c: v}}}`.
/// An empty segment resolves to the current size of its parent table
/// (which, for a fresh table, is always `0`).
///
/// [`table`]: struct.IniTable.html
pub fn expand<V: Into<IniValue>>(key: &str, value: V) -> IniTable {
    let mut table = IniTable::new();
    expand_into(&mut table, key, value);
    table
}

/// Inserts the `value` into `table` at the path described by the bracketed `key`,
/// creating (or replacing non-table values with) nested tables as required.
/// Empty segments resolve to the current size of their parent table at the time they are visited.
pub fn expand_into<V: Into<IniValue>>(table: &mut IniTable, key: &str, value: V) {
    insert_segments(table, &split_key_path(key), value.into());
}

fn insert_segments(parent: &mut IniTable, segments: &[&str], value: IniValue) {
    match segments {
        [] => {}
        [last] => {
            let key = resolve_segment(parent, last);
            parent.insert(key, value);
        }
        [first, rest @ ..] => {
            let key = resolve_segment(parent, first);
            parent.with_table_entry(key, |child| insert_segments(child, rest, value));
        }
    }
}

fn resolve_segment(parent: &IniTable, segment: &str) -> IniKey {
    if segment.is_empty() {
        IniKey::Index(parent.next_index())
    } else {
        IniKey::from_segment(segment)
    }
}

/// Per-parse auto-increment counters for keys ending in an empty segment (`base[]`).
///
/// Keyed by the literal key string, so `a[b][]` and `a[b] []` are counted separately,
/// and an explicit `a[b][0]` does not affect the counter of `a[b][]`.
#[derive(Default, Debug)]
pub struct IniKeyCounters(IndexMap<String, i64>);

impl IniKeyCounters {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the canonical form of the `key`:
    /// a trailing `[]` is rewritten to `[n]`, where `n` is the number of times
    /// this exact key has been canonicalized before. Other keys are returned as-is.
    pub fn canonicalize(&mut self, key: &str) -> String {
        match key.strip_suffix("[]") {
            Some(base) => {
                let counter = self.0.entry(key.into()).or_insert(0);
                let index = *counter;
                *counter += 1;

                format!("{}[{}]", base, index)
            }
            None => key.into(),
        }
    }
}
