//! String interning for identifier deduplication.
//!
//! Identifier names occur many times across an AST; interning stores each
//! distinct name once and hands out cheap `Atom` handles. Binding maps key
//! on `Atom`, so name comparison during the checker walk is a u32 compare.

use rustc_hash::FxHashMap;

/// Interned string handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Atom(pub u32);

impl Atom {
    /// Sentinel for "no atom".
    pub const NONE: Atom = Atom(u32::MAX);

    #[inline]
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Single-threaded string interner.
#[derive(Debug, Default)]
pub struct Interner {
    strings: Vec<String>,
    lookup: FxHashMap<String, Atom>,
}

impl Interner {
    #[must_use]
    pub fn new() -> Interner {
        Interner::default()
    }

    /// Intern a string, returning its atom. Repeated calls with the same
    /// text return the same atom.
    pub fn intern(&mut self, text: &str) -> Atom {
        if let Some(&atom) = self.lookup.get(text) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.lookup.insert(text.to_string(), atom);
        atom
    }

    /// Look up an atom without interning.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<Atom> {
        self.lookup.get(text).copied()
    }

    /// Resolve an atom back to its text. `Atom::NONE` and out-of-range
    /// atoms resolve to the empty string.
    #[must_use]
    pub fn resolve(&self, atom: Atom) -> &str {
        if atom.is_none() {
            return "";
        }
        self.strings.get(atom.0 as usize).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
