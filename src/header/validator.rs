//! Header template matching.
//!
//! The template regex is compiled once at startup via `LazyLock` and shared
//! read-only between threads.

use std::sync::LazyLock;

use regex::Regex;

/// Comment prefixes recognized by the checker, as a regex alternation.
/// Covers C-style sources (`//`), Windows batch (`::`) and scripts (`#`).
const COMMENT_PREFIX: &str = r"(?://|::|#)";

/// Organization named in the first copyright line of the stock template.
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "BMW AG";

/// The header must start within the first three lines of the file.
const MAX_PRELUDE_LINES: usize = 3;

/// Template compiled for the default copyright holder, initialized once.
pub static DEFAULT_TEMPLATE: LazyLock<HeaderTemplate> =
    LazyLock::new(|| HeaderTemplate::new(DEFAULT_COPYRIGHT_HOLDER));

/// An immutable license header template.
///
/// Matches the fixed MPL-2.0 notice block: a 75-hyphen separator line, one
/// copyright line naming the holder (optionally followed by further copyright
/// lines), another separator, the three-line license notice, and a closing
/// separator. Every line must carry one of the recognized comment prefixes.
pub struct HeaderTemplate {
    holder: String,
    pattern: Regex,
}

impl HeaderTemplate {
    /// Compile a template for the given copyright holder.
    ///
    /// Panics if the pattern fails to compile, which cannot happen for any
    /// holder string since it is embedded with `regex::escape`.
    pub fn new(holder: &str) -> Self {
        let pattern = build_pattern(holder);
        Self {
            holder: holder.to_string(),
            pattern: Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("Failed to compile header template regex: {}", e)),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Check whether `contents` carries a valid license header near the top.
    ///
    /// Returns `false` when the template does not occur at all, and also when
    /// it occurs but starts below line 3. A file that quotes the header
    /// further down is deliberately rejected. Empty input returns `false`.
    pub fn is_valid_header(&self, contents: &str) -> bool {
        let m = match self.pattern.find(contents) {
            Some(m) => m,
            None => return false,
        };

        let text_before_header = &contents[..m.start()];
        text_before_header.split('\n').count() <= MAX_PRELUDE_LINES
    }
}

/// Build the multi-line pattern string for one holder.
///
/// Anchors apply per physical line (`(?m)` mode). Each line of the block
/// independently accepts any of the three comment prefixes; a file is allowed
/// to mix them within one header.
fn build_pattern(holder: &str) -> String {
    let p = COMMENT_PREFIX;
    let separator = format!("{p}  -{{75}}");
    let holder = regex::escape(holder);
    let lines = [
        separator.clone(),
        format!(
            r"{p}  Copyright \(C\) \d{{4}}(?:-\d{{4}})? {holder}$(?:\n{p}  Copyright \(C\) .*$)*"
        ),
        separator.clone(),
        format!("{p}  This Source Code Form is subject to the terms of the Mozilla Public"),
        format!(r"{p}  License, v\. 2\.0\. If a copy of the MPL was not distributed with this"),
        format!(r"{p}  file, You can obtain one at https://mozilla\.org/MPL/2\.0/\."),
        separator,
    ];
    format!("(?m){}\n", lines.join("\n"))
}
