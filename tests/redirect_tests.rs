//! Short-link resolver tests

use linkshelf::services::{
    LinkBook, Navigator, RecordingNavigator, RedirectOutcome, ShortLinkResolver, short_link,
};
use linkshelf::storage::Link;

fn book() -> LinkBook {
    LinkBook::from(vec![
        Link::new("lqu5m2o0", "Rust", "https://www.rust-lang.org"),
        Link::new("lqu5m2o1", "Docs", "https://docs.rs"),
    ])
}

/// Navigator that records the calls in order
#[derive(Default)]
struct ScriptedNavigator {
    fragment: Option<String>,
    calls: Vec<String>,
}

impl Navigator for ScriptedNavigator {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn clear_fragment(&mut self) {
        self.fragment = None;
        self.calls.push("clear".to_string());
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.calls.push(format!("open {}", url));
    }
}

#[test]
fn test_matching_fragment_clears_then_opens() {
    let mut nav = ScriptedNavigator {
        fragment: Some("lqu5m2o1".to_string()),
        ..Default::default()
    };
    let outcome = ShortLinkResolver::resolve(&mut nav, &book());

    assert!(matches!(outcome, RedirectOutcome::Opened(ref link) if link.url == "https://docs.rs"));
    assert_eq!(nav.calls, vec!["clear", "open https://docs.rs"]);
    assert!(nav.fragment.is_none());
}

#[test]
fn test_unknown_fragment_clears_without_opening() {
    let mut nav = ScriptedNavigator {
        fragment: Some("zzz".to_string()),
        ..Default::default()
    };
    let outcome = ShortLinkResolver::resolve(&mut nav, &book());

    assert_eq!(outcome, RedirectOutcome::NotFound("zzz".to_string()));
    assert_eq!(nav.calls, vec!["clear"]);
}

#[test]
fn test_no_fragment_does_nothing() {
    for fragment in [None, Some(String::new())] {
        let mut nav = ScriptedNavigator {
            fragment,
            ..Default::default()
        };
        assert_eq!(
            ShortLinkResolver::resolve(&mut nav, &book()),
            RedirectOutcome::NoFragment
        );
        assert!(nav.calls.is_empty());
    }
}

#[test]
fn test_recording_navigator_targets() {
    let mut nav = RecordingNavigator::from_target("http://127.0.0.1:8080/#lqu5m2o0");
    ShortLinkResolver::resolve(&mut nav, &book());
    assert!(nav.clear_fragment);
    assert_eq!(nav.open.as_deref(), Some("https://www.rust-lang.org"));

    let nav = RecordingNavigator::from_target("#lqu5m2o0");
    assert_eq!(nav.current_fragment(), Some("lqu5m2o0"));

    let nav = RecordingNavigator::from_target("lqu5m2o0");
    assert_eq!(nav.current_fragment(), Some("lqu5m2o0"));
}

#[test]
fn test_recording_navigator_json_shape() {
    let mut nav = RecordingNavigator::with_fragment("missing");
    ShortLinkResolver::resolve(&mut nav, &book());
    assert_eq!(
        serde_json::to_value(&nav).unwrap(),
        serde_json::json!({"clear_fragment": true, "open": null})
    );
}

#[test]
fn test_short_link_format() {
    assert_eq!(short_link("/", "abc"), "/#abc");
    assert_eq!(short_link("/app/index.html", "abc"), "/app/#abc");
    assert_eq!(short_link("/app/", "abc"), "/app/#abc");
}
