use tracing::warn;

use super::link_item::{LinkItem, QrView};
use crate::services::QrRenderer;
use crate::storage::Link;

/// The saved-links list
#[derive(Debug, Clone)]
pub struct LinkList<'a> {
    base_path: &'a str,
    page_path: &'a str,
    qr_for: Option<&'a str>,
    qr: QrRenderer,
}

impl<'a> LinkList<'a> {
    pub fn new(base_path: &'a str) -> Self {
        Self {
            base_path,
            page_path: base_path,
            qr_for: None,
            qr: QrRenderer::new(),
        }
    }

    pub fn on_page(mut self, page_path: &'a str) -> Self {
        self.page_path = page_path;
        self
    }

    /// 展开某一行的二维码
    pub fn show_qr_for(mut self, id: Option<&'a str>) -> Self {
        self.qr_for = id;
        self
    }

    fn qr_view(&self, link: &Link) -> QrView {
        if self.qr_for != Some(link.id.as_str()) {
            return QrView::Hidden;
        }
        if !self.qr.is_available() {
            return QrView::Unavailable;
        }
        // 二维码编码的是原始 URL
        match self.qr.render_svg(&link.url) {
            Ok(svg) => QrView::Shown(svg),
            Err(e) => {
                warn!("QR rendering failed for {}: {}", link.id, e);
                QrView::Unavailable
            }
        }
    }

    pub fn render(&self, links: &[Link]) -> String {
        let body = if links.is_empty() {
            r#"<p class="empty-message">No links saved yet.</p>"#.to_string()
        } else {
            let items: Vec<String> = links
                .iter()
                .map(|link| {
                    LinkItem::new(link, self.base_path)
                        .on_page(self.page_path)
                        .with_qr(self.qr_view(link))
                        .render()
                })
                .collect();
            format!("<ul>\n{}\n</ul>", items.join("\n"))
        };

        format!(
            "<section class=\"link-list\">\n<h2>Saved links</h2>\n{}\n</section>",
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        let html = LinkList::new("/").render(&[]);
        assert!(html.contains("Saved links"));
        assert!(html.contains("No links saved yet."));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_one_row_per_link() {
        let links = vec![
            Link::new("a1", "One", "https://one.example"),
            Link::new("b2", "Two", "https://two.example"),
        ];
        let html = LinkList::new("/").render(&links);
        assert_eq!(html.matches("class=\"link-item\"").count(), 2);
        assert!(!html.contains("No links saved yet."));
    }

    #[cfg(feature = "qr")]
    #[test]
    fn test_qr_only_for_selected_row() {
        let links = vec![
            Link::new("a1", "One", "https://one.example"),
            Link::new("b2", "Two", "https://two.example"),
        ];
        let html = LinkList::new("/").show_qr_for(Some("b2")).render(&links);
        assert_eq!(html.matches("qr-code-area").count(), 1);
        assert!(html.contains("<svg"));
    }
}
