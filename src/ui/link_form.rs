use super::events::{AddLinkForm, UiEvent};
use crate::utils::escape_html;

/// The add-link form
#[derive(Debug, Clone)]
pub struct LinkForm<'a> {
    base_path: &'a str,
}

impl<'a> LinkForm<'a> {
    pub fn new(base_path: &'a str) -> Self {
        Self { base_path }
    }

    pub fn render(&self) -> String {
        format!(
            r#"<form class="link-form" method="post" action="{base}links">
    <label for="link-name">Name:</label>
    <input type="text" id="link-name" name="name" placeholder="Link name" required autofocus>
    <label for="link-url">URL:</label>
    <input type="text" id="link-url" name="url" placeholder="https://example.com" inputmode="url" required>
    <button type="submit">Add link</button>
</form>"#,
            base = escape_html(self.base_path)
        )
    }

    pub fn submit(&self, form: AddLinkForm) -> Option<UiEvent> {
        form.into_event()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_posts_to_links() {
        let html = LinkForm::new("/shelf/").render();
        assert!(html.contains(r#"action="/shelf/links""#));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="url""#));
    }
}
