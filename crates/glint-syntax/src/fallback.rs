//! Regex fallback highlighting.
//!
//! Used for languages without a grammar and for any buffer whose structured
//! parse fails. Works line by line:
//!
//! 1. whole-text block rules (`/* */`, docstrings, fenced code) first
//! 2. strings and comments, leftmost match wins
//! 3. keywords, builtins, types, numbers and language rules, skipping
//!    anything that overlaps a span claimed in steps 1-2
//! 4. occurrences of imported names
//!
//! ## Learning: Compile Once
//!
//! `Regex::new` is far more expensive than matching. Every pattern of a
//! language is compiled once into [`CompiledRules`] when a highlighter is
//! created and reused for every pass afterwards.

use std::ops::Range;

use glint_buffer::Position;
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::SyntaxError;
use crate::batch::TagSink;
use crate::language::{BlockRule, Language};
use crate::mapper::LineIndex;
use crate::symbols::ImportedSymbolTable;

const NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

/// Compiled regex tables for one language.
#[derive(Debug)]
pub struct CompiledRules {
    language: Language,
    keywords: Option<Regex>,
    builtins: Option<Regex>,
    types: Option<Regex>,
    strings: Option<Regex>,
    comment: Option<Regex>,
    number: Option<Regex>,
    rules: Vec<(Regex, &'static str, usize)>,
    blocks: Vec<(Regex, BlockRule)>,
    errors: Vec<SyntaxError>,
}

impl CompiledRules {
    /// Compiles every pattern of `language`.
    ///
    /// A pattern that fails to compile is logged and left out; the rest of
    /// the language still highlights.
    pub fn new(language: Language) -> Self {
        let def = language.def();
        let mut errors = Vec::new();
        let mut compile = |tag: &'static str, pattern: &str, case_insensitive: bool| {
            match RegexBuilder::new(pattern)
                .case_insensitive(case_insensitive)
                .multi_line(false)
                .build()
            {
                Ok(re) => Some(re),
                Err(source) => {
                    warn!(%language, tag, error = %source, "Skipping invalid pattern");
                    errors.push(SyntaxError::Pattern { tag, source });
                    None
                }
            }
        };

        let ci = def.case_insensitive;
        let keywords = word_alternation(def.keywords).and_then(|p| compile("keyword", &p, ci));
        let builtins = word_alternation(def.builtins).and_then(|p| compile("builtin", &p, ci));
        let types = word_alternation(def.types).and_then(|p| compile("type", &p, ci));
        let strings = def.strings.and_then(|p| compile("string", p, false));
        let comment = def
            .comment
            .and_then(|marker| compile("comment", &format!("{}.*", regex::escape(marker)), false));
        let number = def.numbers.then(|| compile("number", NUMBER, false)).flatten();

        let rules = def
            .rules
            .iter()
            .filter_map(|rule| {
                compile(rule.tag, rule.pattern, false).map(|re| (re, rule.tag, rule.group))
            })
            .collect();
        let blocks = def
            .blocks
            .iter()
            .filter_map(|block| compile(block.tag, block.pattern, false).map(|re| (re, *block)))
            .collect();

        Self {
            language,
            keywords,
            builtins,
            types,
            strings,
            comment,
            number,
            rules,
            blocks,
            errors,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Patterns that failed to compile.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Emits fallback tags for the whole text.
    pub fn highlight_basic(
        &self,
        text: &str,
        lines: &LineIndex,
        symbols: &ImportedSymbolTable,
        sink: &mut dyn TagSink,
    ) {
        let shields = self.highlight_blocks(text, lines, sink);
        let imported = imported_alternation(symbols);

        for line_no in 1..=lines.line_count() {
            let line = lines.line(text, line_no);
            if line.is_empty() {
                continue;
            }
            let line_start = lines.offset_of(text, Position::new(line_no, 0));
            let line_range = line_start..line_start + line.len();

            let mut taken: Vec<Range<usize>> = shields
                .iter()
                .filter(|s| s.start < line_range.end && line_range.start < s.end)
                .map(|s| s.start.saturating_sub(line_start)..(s.end - line_start).min(line.len()))
                .collect();

            let mut emit = |tag: &'static str, range: Range<usize>| {
                let start = Position::new(line_no, line[..range.start].chars().count());
                let end = Position::new(line_no, line[..range.end].chars().count());
                sink.emit(tag, start, end);
            };

            self.strings_and_comments(line, &mut taken, &mut emit);

            let plain = [
                (&self.keywords, "keyword"),
                (&self.builtins, "builtin"),
                (&self.types, "type"),
                (&self.number, "number"),
            ];
            for (re, tag) in plain {
                let Some(re) = re else { continue };
                for m in re.find_iter(line) {
                    if !overlaps(&taken, &m.range()) {
                        emit(tag, m.range());
                    }
                }
            }

            for (re, tag, group) in &self.rules {
                for caps in re.captures_iter(line) {
                    let Some(m) = caps.get(*group) else { continue };
                    if !overlaps(&taken, &m.range()) {
                        emit(tag, m.range());
                    }
                }
            }

            if let Some(re) = &imported {
                for m in re.find_iter(line) {
                    if overlaps(&taken, &m.range()) {
                        continue;
                    }
                    let Some(kind) = symbols.kind_of(m.as_str()) else {
                        continue;
                    };
                    emit(kind.tag(), m.range());
                    if kind.is_namespace()
                        && let Some(member) = member_after(line, m.end())
                    {
                        let member_kind = self.language.classify_member(&line[member.clone()]);
                        emit(member_kind.tag(), member);
                    }
                }
            }
        }
    }

    /// Whole-text rules, returning the byte ranges that shield line matches.
    fn highlight_blocks(
        &self,
        text: &str,
        lines: &LineIndex,
        sink: &mut dyn TagSink,
    ) -> Vec<Range<usize>> {
        let mut shields = Vec::new();
        for (re, block) in &self.blocks {
            for m in re.find_iter(text) {
                let start = lines.position_of_offset(text, m.start());
                let end = lines.position_of_offset(text, m.end());
                sink.emit(block.tag, start, end);
                if block.shields {
                    shields.push(m.range());
                }
            }
        }
        shields.sort_by_key(|r| r.start);
        shields
    }

    /// Claims string and comment spans, scanning left to right.
    fn strings_and_comments(
        &self,
        line: &str,
        taken: &mut Vec<Range<usize>>,
        emit: &mut impl FnMut(&'static str, Range<usize>),
    ) {
        let mut pos = 0;
        while pos < line.len() {
            let string = self.strings.as_ref().and_then(|re| re.find_at(line, pos));
            let comment = self.comment.as_ref().and_then(|re| re.find_at(line, pos));

            let (tag, m) = match (string, comment) {
                (Some(s), Some(c)) if c.start() <= s.start() => ("comment", c),
                (Some(s), _) => ("string", s),
                (None, Some(c)) => ("comment", c),
                (None, None) => break,
            };

            if m.is_empty() || overlaps(taken, &m.range()) {
                // resume after the first character of this match
                pos = m.start() + line[m.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }

            emit(tag, m.range());
            taken.push(m.range());
            pos = m.end();
            if tag == "comment" {
                break;
            }
        }
    }
}

fn overlaps(taken: &[Range<usize>], range: &Range<usize>) -> bool {
    taken
        .iter()
        .any(|t| t.start < range.end && range.start < t.end)
}

/// One alternation for a word list, longest words first.
fn word_alternation(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted.dedup();

    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let alternatives: Vec<String> = sorted
        .iter()
        .map(|w| {
            let lead = if is_word(w.chars().next()) { r"\b" } else { "" };
            let trail = if is_word(w.chars().next_back()) { r"\b" } else { "" };
            format!("{lead}{}{trail}", regex::escape(w))
        })
        .collect();
    Some(format!("(?:{})", alternatives.join("|")))
}

fn imported_alternation(symbols: &ImportedSymbolTable) -> Option<Regex> {
    let names: Vec<&str> = symbols.iter().map(|(name, _)| name).collect();
    let pattern = word_alternation(&names)?;
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, "Could not build imported symbol pattern");
            None
        }
    }
}

/// Byte range of an identifier directly after `.` at `at`.
fn member_after(line: &str, at: usize) -> Option<Range<usize>> {
    let rest = line.get(at..)?.strip_prefix('.')?;
    let len = rest
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
        .map_or(rest.len(), |(i, _)| i);
    (len > 0).then(|| at + 1..at + 1 + len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::mapper::is_valid_position;

    fn run(language: Language, text: &str) -> Vec<(&'static str, String)> {
        let lines = LineIndex::new(text);
        let rules = CompiledRules::new(language);
        let symbols = language.extract_symbols(text);
        let mut out: Vec<(&'static str, Position, Position)> = Vec::new();
        rules.highlight_basic(text, &lines, &symbols, &mut out);
        out.into_iter()
            .map(|(tag, s, e)| {
                let (a, b) = (lines.offset_of(text, s), lines.offset_of(text, e));
                (tag, text[a..b].to_string())
            })
            .collect()
    }

    fn count(tags: &[(&'static str, String)], tag: &str) -> usize {
        tags.iter().filter(|(t, _)| *t == tag).count()
    }

    fn has(tags: &[(&'static str, String)], tag: &str, text: &str) -> bool {
        tags.iter().any(|(t, s)| *t == tag && s == text)
    }

    #[test]
    fn test_every_language_compiles() {
        for &language in Language::ALL {
            let rules = CompiledRules::new(language);
            assert!(rules.errors().is_empty(), "{language}: {:?}", rules.errors());
        }
    }

    #[test]
    fn test_number_and_comment() {
        let tags = run(Language::Python, "x = 123  # comment");
        assert_eq!(count(&tags, "number"), 1);
        assert_eq!(count(&tags, "comment"), 1);
        assert!(has(&tags, "number", "123"));
        assert!(has(&tags, "comment", "# comment"));
    }

    #[test]
    fn test_strings_shield_other_matches() {
        let tags = run(Language::Python, "s = \"if # 42\"  # if 7\nt = 'it\\'s'\n");
        assert!(has(&tags, "string", "\"if # 42\""));
        assert!(has(&tags, "comment", "# if 7"));
        assert!(has(&tags, "string", "'it\\'s'"));
        assert_eq!(count(&tags, "keyword"), 0);
        assert_eq!(count(&tags, "number"), 0);
        assert_eq!(count(&tags, "comment"), 1);
    }

    #[test]
    fn test_keywords_are_whole_words() {
        let tags = run(Language::Python, "def f(:\n    return iffy\n");
        assert!(has(&tags, "keyword", "def"));
        assert!(has(&tags, "keyword", "return"));
        assert!(!tags.iter().any(|(_, s)| s == "if"));
        assert!(has(&tags, "function", "f"));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let text = "int a; /* one\nint b; */ int c;";
        let lines = LineIndex::new(text);
        let mut out: Vec<(&'static str, Position, Position)> = Vec::new();
        CompiledRules::new(Language::C).highlight_basic(
            text,
            &lines,
            &ImportedSymbolTable::new(),
            &mut out,
        );
        assert!(out.contains(&("comment", Position::new(1, 7), Position::new(2, 9))));
        let ints: Vec<_> = out.iter().filter(|(tag, ..)| *tag == "keyword").collect();
        assert_eq!(ints.len(), 2);
    }

    #[test]
    fn test_language_rules() {
        let sql = run(Language::Sql, "select name FROM users -- all\n");
        assert!(has(&sql, "keyword", "select"));
        assert!(has(&sql, "keyword", "FROM"));
        assert!(has(&sql, "comment", "-- all"));

        let md = run(Language::Markdown, "# Title\nSome **bold** and `code`.\n```\n# not a heading\n```\n");
        assert!(has(&md, "heading", "# Title"));
        assert!(has(&md, "bold", "**bold**"));
        assert!(has(&md, "inline_code", "`code`"));
        assert!(!has(&md, "heading", "# not a heading"));
        assert_eq!(count(&md, "code_block"), 1);

        let rs = run(Language::Rust, "#[derive(Debug)]\nfn go<'a>(c: char) { println!(\"{}\", 'x'); }\n");
        assert!(has(&rs, "attribute", "#[derive(Debug)]"));
        assert!(has(&rs, "lifetime", "'a"));
        assert!(has(&rs, "macro", "println!"));
        assert!(has(&rs, "string", "'x'"));
        assert!(has(&rs, "type", "char"));

        let log = run(Language::Log, "2024-01-02 10:00:00 ERROR failed at 10.0.0.1\n");
        assert!(has(&log, "timestamp", "2024-01-02 10:00:00"));
        assert!(has(&log, "log_level_error", "ERROR"));
        assert!(has(&log, "ip_address", "10.0.0.1"));

        let ruby = run(Language::Ruby, "@@count = @name + $stdout.to_s(:sym)\n");
        assert!(has(&ruby, "class_var", "@@count"));
        assert!(has(&ruby, "instance_var", "@name"));
        assert!(has(&ruby, "global_var", "$stdout"));
        assert!(has(&ruby, "symbol", ":sym"));
    }

    #[test]
    fn test_imported_occurrences() {
        let tags = run(
            Language::Python,
            "import os\nfrom pathlib import Path\nos.getcwd(); Path('x'); os.SEP\n",
        );
        assert!(has(&tags, "imported_module", "os"));
        assert!(has(&tags, "imported_function", "getcwd"));
        assert!(has(&tags, "imported_class", "Path"));
        assert!(has(&tags, "imported_constant", "SEP"));
        assert!(!has(&tags, "imported_class", "'x'"));
    }

    #[test]
    fn test_word_alternation() {
        assert_eq!(word_alternation(&[]), None);
        let pattern = word_alternation(&["in", "int", "@end"]).unwrap();
        assert_eq!(pattern, r"(?:\bint\b|@end\b|\bin\b)");
    }

    proptest! {
        #[test]
        fn prop_positions_are_valid(text in "[a-z0-9 #\"'\\\\\n/*.=@$:-]{0,120}") {
            for &language in &[Language::Python, Language::C, Language::Ruby, Language::Markdown] {
                let lines = LineIndex::new(&text);
                let mut out: Vec<(&'static str, Position, Position)> = Vec::new();
                CompiledRules::new(language).highlight_basic(
                    &text,
                    &lines,
                    &language.extract_symbols(&text),
                    &mut out,
                );
                for (_, start, end) in out {
                    prop_assert!(start < end);
                    prop_assert!(is_valid_position(&lines, &text, start));
                    prop_assert!(is_valid_position(&lines, &text, end));
                }
            }
        }
    }
}
