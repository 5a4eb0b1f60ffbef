use super::events::UiEvent;
use crate::services::{SharePayload, short_link};
use crate::storage::Link;
use crate::utils::escape_html;

/// 单行的二维码区域状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrView {
    Hidden,
    /// 已渲染好的 SVG
    Shown(String),
    /// 渲染器不可用或渲染失败
    Unavailable,
}

/// One row of the saved-links list
#[derive(Debug, Clone)]
pub struct LinkItem<'a> {
    link: &'a Link,
    base_path: &'a str,
    page_path: &'a str,
    qr: QrView,
}

impl<'a> LinkItem<'a> {
    pub fn new(link: &'a Link, base_path: &'a str) -> Self {
        Self {
            link,
            base_path,
            page_path: base_path,
            qr: QrView::Hidden,
        }
    }

    /// 短链接基于当前页面路径（如 `/index.html`）计算
    pub fn on_page(mut self, page_path: &'a str) -> Self {
        self.page_path = page_path;
        self
    }

    pub fn with_qr(mut self, qr: QrView) -> Self {
        self.qr = qr;
        self
    }

    pub fn short_link(&self) -> String {
        short_link(self.page_path, &self.link.id)
    }

    pub fn delete(&self) -> UiEvent {
        UiEvent::DeleteLink {
            id: self.link.id.clone(),
        }
    }

    pub fn render(&self) -> String {
        let base = escape_html(self.base_path);
        let id = escape_html(&self.link.id);
        let name = escape_html(&self.link.name);
        let url = escape_html(&self.link.url);
        let share = SharePayload::for_link(self.link);

        let qr_control = match self.qr {
            QrView::Hidden => format!(
                r#"<a class="qr-button" href="{base}?qr={id}" title="Show the QR code of the original link">QR code</a>"#
            ),
            QrView::Shown(_) => format!(
                r#"<a class="qr-button active" href="{base}" title="Hide the QR code">Hide QR</a>"#
            ),
            QrView::Unavailable => {
                r#"<span class="qr-button disabled" aria-disabled="true">QR code</span>"#.to_string()
            }
        };

        let qr_area = match &self.qr {
            QrView::Hidden => String::new(),
            QrView::Shown(svg) => format!(r#"<div class="qr-code-area">{svg}</div>"#),
            QrView::Unavailable => {
                r#"<p class="qr-unavailable" role="alert">Could not generate the QR code.</p>"#
                    .to_string()
            }
        };

        format!(
            r##"<li class="link-item" id="link-{id}">
    <div class="content-wrapper">
        <div class="link-info">
            <span class="link-name">{name}</span>
            <a href="{url}" target="_blank" rel="noopener noreferrer" class="link-url" title="Open the original link in a new tab">{url}</a>
            <div class="short-link-container">
                <span>Short link:</span>
                <a href="#{id}" class="short-link" title="Use the short link (opens through this app)">{short}</a>
            </div>
        </div>
        <div class="actions">
            <button type="button" class="share-button" hidden data-title="{share_title}" data-text="{share_text}" data-url="{share_url}" title="Share the original link">Share</button>
            {qr_control}
            <form method="post" action="{base}links/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this link?');">
                <button type="submit" class="delete-button" title="Delete link">Delete</button>
            </form>
        </div>
    </div>
    {qr_area}
</li>"##,
            short = escape_html(&self.short_link()),
            share_title = escape_html(&share.title),
            share_text = escape_html(&share.text),
            share_url = escape_html(&share.url),
        )
    }
}
