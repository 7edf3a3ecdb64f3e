//! The single HTML page and Markdown rendering

use pulldown_cmark::{Event, Options, Parser, html};
use summarizer_domain::VideoFormat;

/// Severity of a message shown above the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice info",
            NoticeKind::Warning => "notice warning",
            NoticeKind::Error => "notice error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Everything one render of the page needs.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub title: String,
    /// Model id shown under the title
    pub model: String,
    /// Query to keep in the textarea after a submit
    pub query: String,
    pub notice: Option<Notice>,
    /// Rendered answer HTML
    pub result_html: Option<String>,
}

impl PageView {
    pub fn new(title: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_notice(mut self, kind: NoticeKind, text: impl Into<String>) -> Self {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
        self
    }

    pub fn with_answer(mut self, markdown: &str) -> Self {
        self.result_html = Some(render_markdown(markdown));
        self
    }

    pub fn render(&self) -> String {
        let notice = self
            .notice
            .as_ref()
            .map(|n| format!(r#"<div class="{}">{}</div>"#, n.kind.class(), escape_html(&n.text)))
            .unwrap_or_default();

        let result = self
            .result_html
            .as_ref()
            .map(|body| format!(r#"<section class="result"><h2>Analysis result</h2>{}</section>"#, body))
            .unwrap_or_default();

        format!(
            include_str!("page.html"),
            title = escape_html(&self.title),
            model = escape_html(&self.model),
            accept = VideoFormat::accept_attribute(),
            query = escape_html(&self.query),
            notice = notice,
            result = result,
        )
    }
}

/// Render model output as HTML. Raw HTML in the Markdown is shown as text.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
