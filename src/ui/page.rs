use rust_embed::Embed;

use super::link_form::LinkForm;
use super::link_list::LinkList;
use crate::errors::{LinkshelfError, Result};
use crate::services::Notice;
use crate::storage::Link;
use crate::utils::escape_html;

/// 页面模板
#[derive(Embed)]
#[folder = "templates/"]
struct Templates;

const DEFAULT_TITLE: &str = "Linkshelf";

/// The full document: header, notice banner, form and list
#[derive(Debug, Clone)]
pub struct Page<'a> {
    base_path: &'a str,
    page_path: &'a str,
    notice: Option<Notice>,
    qr_for: Option<&'a str>,
}

impl<'a> Page<'a> {
    pub fn new(base_path: &'a str) -> Self {
        Self {
            base_path,
            page_path: base_path,
            notice: None,
            qr_for: None,
        }
    }

    pub fn on_page(mut self, page_path: &'a str) -> Self {
        self.page_path = page_path;
        self
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn show_qr_for(mut self, id: Option<&'a str>) -> Self {
        self.qr_for = id;
        self
    }

    fn render_notice(&self) -> String {
        match &self.notice {
            Some(notice) => format!(
                r#"<div class="notice notice-{}" role="status">{}</div>"#,
                notice.level,
                escape_html(&notice.message)
            ),
            None => String::new(),
        }
    }

    pub fn render(&self, links: &[Link]) -> Result<String> {
        let template = Templates::get("index.html")
            .ok_or_else(|| LinkshelfError::not_found("Page template index.html is missing"))?;
        let template = String::from_utf8_lossy(&template.data);

        let form = LinkForm::new(self.base_path).render();
        let list = LinkList::new(self.base_path)
            .on_page(self.page_path)
            .show_qr_for(self.qr_for)
            .render(links);

        let notice = self.render_notice();
        let base_path = escape_html(self.base_path);
        Ok(fill_placeholders(
            &template,
            &[
                ("%TITLE%", DEFAULT_TITLE),
                ("%BASE_PATH%", &base_path),
                ("%LINKSHELF_VERSION%", env!("CARGO_PKG_VERSION")),
                ("%NOTICE%", &notice),
                ("%FORM%", &form),
                ("%LIST%", &list),
            ],
        ))
    }
}

/// 单次扫描替换占位符，已填入的内容不会再被解析
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match values.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push('%');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
