use std::sync::LazyLock;

use regex::Regex;

use crate::feed::FeedEntry;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Parse one table row: `| name | [label](url) | [label](other) |`.
///
/// The name is the second `|` segment, the URL is the target of the first
/// markdown link anywhere on the line. Headers, separators and anything else
/// that can't supply both yield `None`.
pub fn parse_row(line: &str) -> Option<FeedEntry> {
    let caps = LINK_RE.captures(line)?;
    let url = caps.get(2)?.as_str();

    let name = line.split('|').nth(1)?.trim_matches(is_blank);
    if name.is_empty() || url.is_empty() {
        return None;
    }

    Some(FeedEntry {
        name: name.to_string(),
        url: url.to_string(),
    })
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_row() {
        let e = parse_row("| Name | [L](https://a.com/rss) | [L2](https://b.com) |").unwrap();
        assert_eq!(e.name, "Name");
        assert_eq!(e.url, "https://a.com/rss");
    }

    #[test]
    fn first_link_wins() {
        let line = "| 知乎每日精选 | [https://www.zhihu.com/rss](https://www.zhihu.com/rss) | [查看](https://webfollow.cc/channel/www.zhihu.com/rss) |";
        let e = parse_row(line).unwrap();
        assert_eq!(e.name, "知乎每日精选");
        assert_eq!(e.url, "https://www.zhihu.com/rss");
    }

    #[test]
    fn separator_row() {
        assert!(parse_row("|---|---|---|").is_none());
        assert!(parse_row("| --- | :---: | ---: |").is_none());
    }

    #[test]
    fn header_row() {
        assert!(parse_row("| 名称 | RSS | 订阅 |").is_none());
    }

    #[test]
    fn empty_line() {
        assert!(parse_row("").is_none());
        assert!(parse_row("   ").is_none());
    }

    #[test]
    fn blank_name() {
        assert!(parse_row("|   | [L](https://a.com/rss) |").is_none());
        assert!(parse_row("|| [L](https://a.com/rss) |").is_none());
    }

    #[test]
    fn no_pipes() {
        // Has a link but no name column
        assert!(parse_row("[Feed](https://a.com/rss)").is_none());
    }

    #[test]
    fn empty_label_skipped_for_next_link() {
        let e = parse_row("| Blog | [](https://skip.me) | [RSS](https://blog.com/feed) |").unwrap();
        assert_eq!(e.url, "https://blog.com/feed");
    }

    #[test]
    fn empty_target_never_matches() {
        assert!(parse_row("| Blog | [RSS]() |").is_none());
    }

    #[test]
    fn name_is_trimmed() {
        let e = parse_row("|\t  Some Blog \t| [x](https://x.io/atom.xml) |").unwrap();
        assert_eq!(e.name, "Some Blog");
    }

    #[test]
    fn name_trims_separator_controls() {
        let e = parse_row("|\u{1c}\u{3000}Feed\u{1f} | [x](https://x.io/rss) |").unwrap();
        assert_eq!(e.name, "Feed");
        assert!(parse_row("| \u{1d}\u{1e} | [x](https://x.io/rss) |").is_none());
    }

    #[test]
    fn link_in_name_column() {
        // The name column keeps its raw text; the URL comes from the first link.
        let e = parse_row("| [Site](https://site.dev) | [RSS](https://site.dev/rss) |").unwrap();
        assert_eq!(e.name, "[Site](https://site.dev)");
        assert_eq!(e.url, "https://site.dev");
    }

    #[test]
    fn no_leading_pipe() {
        let e = parse_row("Feeds | Title | [RSS](https://t.com/rss) |").unwrap();
        assert_eq!(e.name, "Title");
    }
}
