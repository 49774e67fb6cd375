//! The markdown subset used by project detail documents: ATX headings,
//! paragraphs, bullet and numbered lists, fenced code blocks, and inline
//! code, bold and links. Everything else is rendered as escaped text.

use super::layout::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Numbered => "ol",
        }
    }
}

struct CodeBlock<'a> {
    lang: &'a str,
    lines: Vec<&'a str>,
}

#[derive(Default)]
struct Renderer<'a> {
    out: String,
    paragraph: Vec<&'a str>,
    list: Option<(ListKind, Vec<&'a str>)>,
}

impl<'a> Renderer<'a> {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.out.push_str(&format!("<p>{}</p>\n", render_inline(&text)));
        self.paragraph.clear();
    }

    fn flush_list(&mut self) {
        let Some((kind, items)) = self.list.take() else {
            return;
        };
        self.out.push_str(&format!("<{}>\n", kind.tag()));
        for item in items {
            self.out.push_str(&format!("<li>{}</li>\n", render_inline(item)));
        }
        self.out.push_str(&format!("</{}>\n", kind.tag()));
    }

    fn flush_blocks(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn push_list_item(&mut self, kind: ListKind, item: &'a str) {
        self.flush_paragraph();
        if self.list.as_ref().is_some_and(|(current, _)| *current != kind) {
            self.flush_list();
        }
        self.list.get_or_insert_with(|| (kind, Vec::new())).1.push(item);
    }

    fn push_code(&mut self, block: CodeBlock<'a>) {
        let class = if block.lang.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{}\"", escape(block.lang))
        };
        self.out.push_str(&format!(
            "<pre><code{class}>{}</code></pre>\n",
            escape(&block.lines.join("\n"))
        ));
    }
}

/// Renders markdown to an HTML fragment.
pub fn render(markdown: &str) -> String {
    let mut r = Renderer::default();
    let mut code: Option<CodeBlock> = None;

    for line in markdown.lines() {
        if code.is_some() {
            if line.trim_start().starts_with("```") {
                if let Some(done) = code.take() {
                    r.push_code(done);
                }
            } else if let Some(block) = code.as_mut() {
                block.lines.push(line);
            }
            continue;
        }

        let trimmed = line.trim();
        if let Some(lang) = trimmed.strip_prefix("```") {
            r.flush_blocks();
            code = Some(CodeBlock {
                lang: lang.trim(),
                lines: Vec::new(),
            });
        } else if trimmed.is_empty() {
            r.flush_blocks();
        } else if let Some((level, text)) = heading(trimmed) {
            r.flush_blocks();
            r.out
                .push_str(&format!("<h{level}>{}</h{level}>\n", render_inline(text)));
        } else if let Some(item) = bullet_item(trimmed) {
            r.push_list_item(ListKind::Bullet, item);
        } else if let Some(item) = numbered_item(trimmed) {
            r.push_list_item(ListKind::Numbered, item);
        } else {
            r.flush_list();
            r.paragraph.push(trimmed);
        }
    }

    // An unterminated fence runs to the end of the document.
    if let Some(block) = code.take() {
        r.push_code(block);
    }
    r.flush_blocks();
    r.out
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    line[level..]
        .strip_prefix(' ')
        .map(|text| (level, text.trim().trim_end_matches('#').trim_end()))
}

fn bullet_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
}

fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ").map(str::trim)
}

fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('`') {
            if let Some(end) = after.find('`') {
                out.push_str(&format!("<code>{}</code>", escape(&after[..end])));
                rest = &after[end + 1..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix("**") {
            if let Some(end) = after.find("**") {
                out.push_str(&format!("<strong>{}</strong>", render_inline(&after[..end])));
                rest = &after[end + 2..];
                continue;
            }
        } else if rest.starts_with('[') {
            if let Some((label, url, remaining)) = split_link(rest) {
                if is_allowed_url(url) {
                    out.push_str(&format!(
                        "<a href=\"{}\">{}</a>",
                        escape(url),
                        render_inline(label)
                    ));
                } else {
                    out.push_str(&render_inline(label));
                }
                rest = remaining;
                continue;
            }
        }

        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            let mut buf = [0u8; 4];
            out.push_str(&escape(ch.encode_utf8(&mut buf)));
        }
        rest = chars.as_str();
    }
    out
}

/// `[label](url)rest` → `(label, url, rest)`.
fn split_link(text: &str) -> Option<(&str, &str, &str)> {
    let inner = text.strip_prefix('[')?;
    let label_end = inner.find("](")?;
    let after_label = &inner[label_end + 2..];
    let url_end = after_label.find(')')?;
    Some((
        &inner[..label_end],
        after_label[..url_end].trim(),
        &after_label[url_end + 1..],
    ))
}

/// Link targets allowed into an `href`.
pub fn is_allowed_url(url: &str) -> bool {
    ["https://", "http://", "mailto:", "/", "#"]
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render("# Title\n\nFirst line\ncontinues here.\n\n## Section ##\nBody");
        assert_eq!(
            html,
            "<h1>Title</h1>\n<p>First line continues here.</p>\n<h2>Section</h2>\n<p>Body</p>\n"
        );
    }

    #[test]
    fn test_hash_without_space_is_text() {
        assert_eq!(render("#hashtag"), "<p>#hashtag</p>\n");
    }

    #[test]
    fn test_lists() {
        let html = render("- one\n* two\n1. first\n2. second\nafter");
        assert_eq!(
            html,
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\
             <ol>\n<li>first</li>\n<li>second</li>\n</ol>\n\
             <p>after</p>\n"
        );
    }

    #[test]
    fn test_fenced_code_is_escaped_verbatim() {
        let html = render("```python\nif a < b:\n    print(\"**x**\")\n```\ntext");
        assert_eq!(
            html,
            "<pre><code class=\"language-python\">if a &lt; b:\n    print(&quot;**x**&quot;)</code></pre>\n<p>text</p>\n"
        );
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        assert_eq!(render("```\nraw"), "<pre><code>raw</code></pre>\n");
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(
            render("Use `grep -E` with **care** & see [docs](https://example.com/a?b=1&c=2)."),
            "<p>Use <code>grep -E</code> with <strong>care</strong> &amp; see \
             <a href=\"https://example.com/a?b=1&amp;c=2\">docs</a>.</p>\n"
        );
    }

    #[test]
    fn test_script_urls_and_raw_html_are_neutralised() {
        let html = render("[click](javascript:alert(1)) <script>x</script>");
        assert!(!html.contains("<a"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unclosed_markers_are_literal() {
        assert_eq!(render("a ** b ` c [d"), "<p>a ** b ` c [d</p>\n");
    }
}
