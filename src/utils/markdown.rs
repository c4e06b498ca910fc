use regex::Regex;

/// 頁與頁之間的分隔線
pub const PAGE_SEPARATOR: &str = "\n\n-----\n\n";

// 將 PDF 逐頁抽出的純文字整理為 Markdown
pub struct MarkdownRenderer {
    trailing_space: Regex,
    hyphen_break: Regex,
    blank_lines: Regex,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        MarkdownRenderer {
            trailing_space: Regex::new(r"(?m)[ \t]+$").expect("固定的正規表示式"),
            hyphen_break: Regex::new(r"(\p{L})-\n(\p{Ll})").expect("固定的正規表示式"),
            blank_lines: Regex::new(r"\n{3,}").expect("固定的正規表示式"),
        }
    }

    pub fn render_page(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n").replace(['\r', '\x0c'], "\n");
        let text = self.trailing_space.replace_all(&text, "");
        let text = self.hyphen_break.replace_all(&text, "$1$2");
        let text = self.blank_lines.replace_all(&text, "\n\n");
        text.trim().to_string()
    }

    /// 組合所有頁面，空白頁會被略過；結果以單一換行結尾
    pub fn render_pages<S: AsRef<str>>(&self, pages: &[S]) -> String {
        let rendered: Vec<String> = pages
            .iter()
            .map(|page| self.render_page(page.as_ref()))
            .filter(|page| !page.is_empty())
            .collect();

        if rendered.is_empty() {
            return String::new();
        }
        let mut markdown = rendered.join(PAGE_SEPARATOR);
        markdown.push('\n');
        markdown
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
