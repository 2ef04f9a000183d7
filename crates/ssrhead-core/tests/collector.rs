//! Head collector merge behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ssrhead_core::{
    render_head, render_into, HeadCollector, HeadSink, HeadTag, MetadataConfig, MetadataOverride,
};

#[test]
fn committing_twice_does_not_duplicate() {
    let mut head = HeadCollector::new();
    render_into(&MetadataConfig::default(), &mut head);
    render_into(&MetadataConfig::default(), &mut head);
    assert_eq!(head.tags(), render_head(&MetadataConfig::default()).as_slice());
}

#[test]
fn later_declaration_wins_in_place() {
    let base = MetadataConfig::default();
    let route = base.with_override(&MetadataOverride {
        long_title: Some("About".into()),
        description: Some("Who we are".into()),
        ..Default::default()
    });

    let mut head = HeadCollector::new();
    render_into(&base, &mut head);
    render_into(&route, &mut head);

    assert_eq!(head.len(), 9);
    assert_eq!(head.title(), Some("About ⚡"));
    assert_eq!(head.tags(), render_head(&route).as_slice());
}

#[test]
fn new_keys_append_after_existing() {
    let mut head = HeadCollector::new();
    render_into(&MetadataConfig::default(), &mut head);
    head.commit(&[
        HeadTag::named("robots", "noindex"),
        HeadTag::named("VIEWPORT", "width=device-width"),
    ]);

    assert_eq!(head.len(), 10);
    assert_eq!(head.tags()[9], HeadTag::named("robots", "noindex"));
    assert_eq!(head.tags()[8], HeadTag::named("VIEWPORT", "width=device-width"));
}

#[test]
fn empty_collector_has_no_title() {
    let head = HeadCollector::new();
    assert!(head.is_empty());
    assert_eq!(head.title(), None);
    assert_eq!(head.to_html(), "");
}

#[test]
fn http_equiv_dedup_ignores_case() {
    let mut head = HeadCollector::new();
    render_into(&MetadataConfig::default(), &mut head);
    head.commit(&[HeadTag::http_equiv("x-ua-compatible", "IE=11")]);

    assert_eq!(head.len(), 9);
    assert_eq!(head.tags()[2], HeadTag::http_equiv("x-ua-compatible", "IE=11"));
}
