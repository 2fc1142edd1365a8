//! Map page rendering.

const MAP_TEMPLATE: &str = include_str!("../../assets/map.html");
const PUBLIC_URL_PLACEHOLDER: &str = "{{TILESERVER_PUBLIC_URL}}";

/// Render the map page with `public_url` as the tile-service base.
///
/// The URL is HTML-escaped and read by the page script from a `<meta>` tag,
/// so it never lands inside script text.
#[must_use]
pub fn render_map_page(public_url: &str) -> String {
    MAP_TEMPLATE.replace(PUBLIC_URL_PLACEHOLDER, &escape_html(public_url))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn embeds_public_url() {
        let page = render_map_page("https://tiles.example.com");
        assert!(page.contains(r#"content="https://tiles.example.com""#));
        assert!(!page.contains(PUBLIC_URL_PLACEHOLDER));
    }

    #[rstest]
    fn page_loads_pois_and_style() {
        let page = render_map_page("http://localhost:8080");
        assert!(page.contains("fetch('/api/pois')"));
        assert!(page.contains("/styles/osm-bright/style.json"));
        assert!(page.contains("maplibre-gl@4.0.0"));
    }

    #[rstest]
    #[case("a&b", "a&amp;b")]
    #[case(r#""><script>"#, "&quot;&gt;&lt;script&gt;")]
    #[case("it's", "it&#x27;s")]
    #[case("http://plain", "http://plain")]
    fn escapes_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }

    #[rstest]
    fn hostile_url_cannot_break_out_of_attribute() {
        let page = render_map_page(r#"http://x/"><script>alert(1)</script>"#);
        assert!(!page.contains("<script>alert(1)</script>"));
    }
}
