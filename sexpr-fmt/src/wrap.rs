use log::debug;

use crate::LayoutConfig;

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Greedily packs the words of `text` into lines narrower than `width`. Words are never split:
/// one that is too wide on its own gets a line to itself. The last line is always returned, so
/// the result is never empty.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in text.split_whitespace() {
        let word_width = self::width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width < width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }
    lines.push(current);
    lines
}

/// Word-wraps a single line to `column_width`, repeating its leading indentation on every
/// continuation line.
pub fn wrap_line(line: &str, column_width: usize) -> String {
    let content = line.trim_start();
    let indent = width(line) - width(content);
    let prefix = " ".repeat(indent);
    word_wrap(content, column_width.saturating_sub(indent))
        .iter()
        .map(|wrapped| format!("{prefix}{wrapped}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps every line of `text` that is at least `column_width` wide and terminates each line with
/// a newline. Lines that already fit are copied unchanged.
pub fn wrap_lines(text: &str, config: &LayoutConfig) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        if width(line) < config.column_width {
            out.push_str(line);
        } else {
            debug!("wrapping line of width {}", width(line));
            out.push_str(&wrap_line(line, config.column_width));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(column_width: usize) -> LayoutConfig {
        LayoutConfig {
            column_width,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_word_wrap_packs_greedily() {
        assert_eq!(word_wrap("aa bb cc dd", 6), vec!["aa bb", "cc dd"]);
        assert_eq!(word_wrap("aa bb", 100), vec!["aa bb"]);
    }

    #[test]
    fn test_word_wrap_keeps_wide_words_whole() {
        let wide = "x".repeat(20);
        assert_eq!(
            word_wrap(&format!("tiny {wide} y"), 10),
            vec!["tiny", wide.as_str(), "y"]
        );
        assert_eq!(word_wrap(&wide, 10), vec![wide.clone()]);
    }

    #[test]
    fn test_word_wrap_empty_text_yields_one_line() {
        assert_eq!(word_wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_line_repeats_indentation() {
        let words: Vec<_> = (0..20).map(|i| format!("word{i:02}")).collect();
        let line = format!("    {}", words.join(" "));
        assert_eq!(
            wrap_line(&line, 40),
            [
                "    word00 word01 word02 word03 word04",
                "    word05 word06 word07 word08 word09",
                "    word10 word11 word12 word13 word14",
                "    word15 word16 word17 word18 word19",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_wrap_line_over_wide_word_keeps_indent() {
        let line = format!("      {}", "z".repeat(30));
        assert_eq!(wrap_line(&line, 20), line);
    }

    #[test]
    fn test_wrap_lines_only_touches_long_lines() {
        let text = format!("short\n  {}\n(x)", vec!["ab"; 30].join(" "));
        let expected = expect![[r#"
            short
              ab ab ab ab ab ab ab ab ab ab ab ab
              ab ab ab ab ab ab ab ab ab ab ab ab
              ab ab ab ab ab ab
            (x)
        "#]];
        expected.assert_eq(&wrap_lines(&text, &config(40)));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let fits = "a".repeat(79);
        assert_eq!(wrap_lines(&fits, &config(80)), format!("{fits}\n"));
        let words = vec!["abcd"; 15].join(" ");
        let at_width = format!("{words} abcde");
        assert_eq!(at_width.len(), 80);
        assert_eq!(
            wrap_lines(&at_width, &config(80)),
            format!("{words}\nabcde\n")
        );
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let line = vec!["∧"; 39].join(" ");
        assert_eq!(wrap_lines(&line, &config(80)), format!("{line}\n"));
    }

    #[test]
    fn test_rewrapping_is_idempotent() {
        let text = format!(
            "(a\n    {}\n  {}\nb)",
            vec!["word"; 50].join(" "),
            "q".repeat(120)
        );
        let once = wrap_lines(&text, &config(30));
        assert_eq!(wrap_lines(&once, &config(30)), once);
    }

    #[test]
    fn test_wrapped_words_keep_order() {
        let words: Vec<_> = (0..200).map(|i| "w".repeat(i % 13 + 1)).collect();
        let line = format!("      {}", words.join(" "));
        let wrapped = wrap_line(&line, 50);
        assert!(wrapped.lines().all(|l| l.starts_with("      ")));
        assert!(wrapped.lines().all(|l| l.chars().count() < 50));
        assert_eq!(wrapped.split_whitespace().collect::<Vec<_>>(), words);
    }
}
