//! HTML document shell.
//!
//! The head is assembled through [`HeadCollector`]; the body only carries the
//! mount point for the client bundle.

use ssrhead_core::{render_into, HeadCollector, MetadataConfig};

use crate::config::ServerSection;

pub fn render_document(server: &ServerSection, meta: &MetadataConfig) -> String {
    let mut head = HeadCollector::new();
    render_into(meta, &mut head);

    // lang and root_id are validated as plain tokens at config load.
    let mut out = String::with_capacity(1024);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", server.lang));
    out.push_str("<head>\n");
    out.push_str(&head.to_html());
    out.push_str("\n</head>\n");
    out.push_str("<body>\n");
    out.push_str(&format!("<div id=\"{}\"></div>\n", server.root_id));
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}
