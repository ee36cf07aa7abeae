use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One or more leading bullet markers (`*`, `-`, `+`, `•`), each followed by whitespace.
static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[*\-+•]\s+)+").unwrap());

/// A bullet whose text opens with a bold segment: `- **Durable**: built to last`.
static FEATURE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-+•]\s+\*\*(.+?)\*\*(.*)$").unwrap());

/// A line that is nothing but a bold segment: `**Key Features**`.
static BOLD_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\*(.+)\*\*$").unwrap());

const MORE_INFORMATION: &str = "More Information:";
const BACKEND_TAGS: &str = "Backend Tags:";

// ── Types ─────────────────────────────────────────────

/// One classified line of an optimized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    Subheading(String),
    FeatureBullet(String),
    Paragraph(String),
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(t) | Self::Subheading(t) | Self::FeatureBullet(t) | Self::Paragraph(t) => t,
        }
    }
}

// ── Lists ─────────────────────────────────────────────

/// Split provider text into list entries: one per non-blank line, bullet markers removed.
/// Bold section titles are kept as entries of their own.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_bullet)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Same as `parse_list` but drops bold section titles, for feeding an editing table.
pub fn parse_editable_list(text: &str) -> Vec<String> {
    parse_list(text)
        .into_iter()
        .filter(|entry| !is_bold_line(entry))
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    match BULLET_PREFIX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

fn is_bold_line(line: &str) -> bool {
    BOLD_LINE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|inner| !inner.as_str().trim().is_empty())
        .unwrap_or(false)
}

// ── Description ───────────────────────────────────────

/// Classify a single description line. First matching rule wins; anything unrecognised is a paragraph.
pub fn classify_line(line: &str) -> Block {
    let line = line.trim();

    if let Some(caps) = FEATURE_BULLET.captures(line) {
        let title = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let rest = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        return Block::FeatureBullet(format!("{}{}", title.to_uppercase(), rest));
    }

    if let Some(inner) = BOLD_LINE.captures(line).and_then(|c| c.get(1)) {
        if !inner.as_str().trim().is_empty() {
            return Block::Heading(inner.as_str().replace("**", ""));
        }
    }

    if line.starts_with(MORE_INFORMATION) || line.starts_with(BACKEND_TAGS) {
        return Block::Subheading(line.to_string());
    }

    Block::Paragraph(line.to_string())
}

/// Split an optimized description into typed blocks, dropping blank lines and keeping order.
pub fn parse_description(text: &str) -> Vec<Block> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(classify_line)
        .collect()
}

/// Flatten blocks back to plain text, one block per line (clipboard copy).
pub fn blocks_to_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_strips_bullets() {
        assert_eq!(
            parse_list("* wireless\n* durable\n* lightweight"),
            vec!["wireless", "durable", "lightweight"]
        );
    }

    #[test]
    fn test_list_mixed_markers_and_blank_lines() {
        let text = "- one\n\n  + two  \n• three\r\nfour\n   \n";
        assert_eq!(parse_list(text), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_list_keeps_bold_titles() {
        let text = "**Primary Keywords**\n* lamp\n**Long Tail**\n* desk lamp for reading";
        assert_eq!(
            parse_list(text),
            vec!["**Primary Keywords**", "lamp", "**Long Tail**", "desk lamp for reading"]
        );
    }

    #[test]
    fn test_editable_list_drops_bold_titles() {
        let text = "**Primary Keywords**\n* lamp\n**Long Tail**\n* desk lamp for reading";
        assert_eq!(parse_editable_list(text), vec!["lamp", "desk lamp for reading"]);
    }

    #[test]
    fn test_list_marker_without_space_is_kept() {
        assert_eq!(parse_list("-free shipping\n*starred"), vec!["-free shipping", "*starred"]);
    }

    #[test]
    fn test_list_reparse_is_stable() {
        let inputs = [
            "* a\n- b\nc",
            "* * nested\n- - - deep\n**Title**",
            "  spaced out  \n•\tbullet tab",
            "- **bold item**: trailing",
        ];
        for input in inputs {
            let first = parse_list(input);
            let second = parse_list(&first.join("\n"));
            assert_eq!(first, second, "input: {:?}", input);
        }
    }

    #[test]
    fn test_description_scenario() {
        let text = "**Key Features**\n- **Durable**: built to last\nMore Information: ships in 2 days";
        assert_eq!(
            parse_description(text),
            vec![
                Block::Heading("Key Features".into()),
                Block::FeatureBullet("DURABLE: built to last".into()),
                Block::Subheading("More Information: ships in 2 days".into()),
            ]
        );
    }

    #[test]
    fn test_heading_drops_inner_bold_markers() {
        assert_eq!(classify_line("**Fast** and **Quiet**"), Block::Heading("Fast and Quiet".into()));
    }

    #[test]
    fn test_backend_tags_is_subheading() {
        assert_eq!(
            classify_line("Backend Tags: lamp, desk, led"),
            Block::Subheading("Backend Tags: lamp, desk, led".into())
        );
    }

    #[test]
    fn test_bullet_without_bold_is_paragraph() {
        assert_eq!(classify_line("- just a dash"), Block::Paragraph("- just a dash".into()));
    }

    #[test]
    fn test_empty_bold_is_paragraph() {
        assert_eq!(classify_line("****"), Block::Paragraph("****".into()));
    }

    #[test]
    fn test_bold_prefix_with_trailing_text_is_paragraph() {
        assert_eq!(
            classify_line("**Note** this is inline"),
            Block::Paragraph("**Note** this is inline".into())
        );
    }

    #[test]
    fn test_feature_bullet_wins_over_heading() {
        assert_eq!(classify_line("* **Bright**"), Block::FeatureBullet("BRIGHT".into()));
    }

    #[test]
    fn test_labels_must_lead_the_line() {
        assert_eq!(
            classify_line("See More Information: below"),
            Block::Paragraph("See More Information: below".into())
        );
    }

    #[test]
    fn test_classification_is_total_and_ordered() {
        let text = "**H**\n\nplain\n- **F**: x\nBackend Tags: a\n  \nlast";
        let blocks = parse_description(text);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[1], Block::Paragraph("plain".into()));
        assert_eq!(blocks[4], Block::Paragraph("last".into()));
    }

    #[test]
    fn test_blocks_to_text() {
        let blocks = parse_description("**Key Features**\n- **Durable**: built to last");
        assert_eq!(blocks_to_text(&blocks), "Key Features\nDURABLE: built to last");
    }

    #[test]
    fn test_block_serializes_tagged() {
        let v = serde_json::to_value(Block::FeatureBullet("X".into())).unwrap();
        assert_eq!(v, serde_json::json!({"kind": "feature_bullet", "text": "X"}));
    }
}
