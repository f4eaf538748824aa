// ABOUTME: Page adapter shipping interactive plotly plots as standalone HTML
// ABOUTME: No buffer needed since the library renders directly to a string

use plotly::Plot;

use crate::transport::{self, ContentType, Payload, Transport};

/// Render `plot` to a self-contained HTML document and send it to the default
/// wcat server for display.
pub fn show(plot: &Plot, name: &str) {
    show_with(transport::default_client(), plot, name)
}

/// Same as [`show`] but delivering through an explicit transport.
pub fn show_with<T: Transport + ?Sized>(transport: &T, plot: &Plot, name: &str) {
    let html = plot.to_html();
    transport.post_file(Payload::Text(html), ContentType::Html, name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTransport;
    use plotly::Scatter;

    #[test]
    fn test_show_sends_html_document() {
        let transport = RecordingTransport::new();
        let mut plot = Plot::new();
        plot.add_trace(Scatter::new(vec![1, 2, 3, 4, 5], vec![6, 7, 2, 4, 5]));

        show_with(&transport, &plot, "plt");

        let calls = transport.take_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].content_type, ContentType::Html);
        assert_eq!(calls[0].name, "plt");
        match &calls[0].payload {
            Payload::Text(html) => assert!(html.contains("<html")),
            Payload::Bytes(_) => panic!("page adapter must send text payloads"),
        }
    }
}
