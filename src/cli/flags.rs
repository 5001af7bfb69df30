//! Declarative flag table and the single scan that resolves it.
//!
//! Flags may appear anywhere after the program name. The first occurrence
//! wins, a value flag takes the next token verbatim, and unknown tokens are
//! ignored.

use std::collections::HashMap;

use crate::models::config::{DEFAULT_FIELDS, DEFAULT_SEPARATOR, DEFAULT_SORT_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Presence-only toggle.
    Switch,
    /// Takes the following token, or `default` when it is the last argument.
    Value { default: Option<&'static str> },
}

#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub name: &'static str,
    pub kind: FlagKind,
}

pub const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

pub const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        name: "--logs",
        kind: FlagKind::Switch,
    },
    FlagSpec {
        name: "--sort",
        kind: FlagKind::Value {
            default: Some(DEFAULT_SORT_KEY),
        },
    },
    FlagSpec {
        name: "--data",
        kind: FlagKind::Value {
            default: Some(DEFAULT_FIELDS),
        },
    },
    FlagSpec {
        name: "--file",
        kind: FlagKind::Value { default: None },
    },
    FlagSpec {
        name: "--sep",
        kind: FlagKind::Value {
            default: Some(DEFAULT_SEPARATOR),
        },
    },
];

/// Flags found in one argument list, keyed by flag name.
#[derive(Debug, Default)]
pub struct ScannedFlags<'a> {
    found: HashMap<&'static str, Option<&'a str>>,
}

impl<'a> ScannedFlags<'a> {
    /// `args[0]` is the program name and is never treated as a flag.
    pub fn scan(args: &'a [String]) -> Self {
        let mut found = HashMap::new();
        for (index, token) in args.iter().enumerate().skip(1) {
            let Some(spec) = FLAGS.iter().find(|spec| spec.name == token) else {
                continue;
            };
            found.entry(spec.name).or_insert_with(|| match spec.kind {
                FlagKind::Switch => None,
                FlagKind::Value { .. } => args.get(index + 1).map(String::as_str),
            });
        }
        Self { found }
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.found.contains_key(name)
    }

    /// The value given on the command line, or the table default.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        if let Some(&Some(value)) = self.found.get(name) {
            return Some(value);
        }
        FLAGS
            .iter()
            .find(|spec| spec.name == name)
            .and_then(|spec| match spec.kind {
                FlagKind::Value { default } => default,
                FlagKind::Switch => None,
            })
    }
}

pub fn wants_help(args: &[String]) -> bool {
    args.len() <= 1
        || args
            .iter()
            .skip(1)
            .any(|arg| HELP_FLAGS.contains(&arg.as_str()))
}
