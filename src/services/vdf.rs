//! Valve KeyValues (VDF) block tree and text serializer.
//!
//! Steam's `steamcmd` build scripts use a nested key/value syntax:
//!
//! ```text
//! "DepotBuild"
//! {
//! 	"DepotID"		"WINDOWS_DEPOT_ID"
//! 	"FileMapping"
//! 	{
//! 		"LocalPath"		"*"
//! 	}
//! }
//! ```
//!
//! Entries are emitted in insertion order. Nothing here parses VDF; the
//! manifests are write-only.

use std::fmt::{self, Write};

/// A named block holding fields and nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// A single line (`"key" "value"`) or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Field(String, String),
    Block(Block),
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a field (builder style).
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(Entry::Field(key.into(), value.into()));
        self
    }

    /// Append a nested block (builder style).
    pub fn block(mut self, child: Block) -> Self {
        self.entries.push(Entry::Block(child));
        self
    }

    pub fn push_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry::Field(key.into(), value.into()));
    }

    pub fn push_block(&mut self, child: Block) {
        self.entries.push(Entry::Block(child));
    }

    /// Render the block as VDF text, terminated by a newline.
    pub fn to_vdf(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_vdf(&mut out, 0);
        out
    }

    fn write_vdf<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let indent = "\t".repeat(depth);
        writeln!(out, "{}\"{}\"", indent, escape(&self.name))?;
        writeln!(out, "{}{{", indent)?;
        for entry in &self.entries {
            match entry {
                Entry::Field(key, value) => {
                    writeln!(out, "{}\t\"{}\"\t\t\"{}\"", indent, escape(key), escape(value))?
                }
                Entry::Block(child) => child.write_vdf(out, depth + 1)?,
            }
        }
        writeln!(out, "{}}}", indent)
    }
}

#[cfg(test)]
impl Block {
    /// Value of the first field named `key` directly inside this block.
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Field(k, v) if k == key => Some(v.as_str()),
            _ => None,
        })
    }

    /// Nested blocks directly inside this block, in order.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Block> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Block(b) => Some(b),
            Entry::Field(..) => None,
        })
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_vdf(f, 0)
    }
}

// Only quotes are escaped: steamcmd reads backslashes in paths literally.
fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}
