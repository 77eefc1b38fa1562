/// Extracts the target of the `rel="next"` entry from an RFC 8288 `Link` header value.
///
/// Shopify sends headers of the form `<https://...page_info=abc>; rel="previous", <https://...page_info=def>;
/// rel="next"`. Entries are located by their angle brackets rather than by splitting on commas, since page URLs may
/// contain commas (e.g. in a `fields` list).
pub fn next_page_link(header: &str) -> Option<&str> {
    link_entries(header).into_iter().find(|(_, params)| has_next_relation(params)).map(|(target, _)| target)
}

/// Splits a `Link` header into `(target, parameters)` pairs.
fn link_entries(header: &str) -> Vec<(&str, &str)> {
    let mut entries = vec![];
    let mut rest = header;
    while let Some(start) = rest.find('<') {
        let after_start = &rest[start + 1..];
        let Some(end) = after_start.find('>') else {
            break;
        };
        let target = &after_start[..end];
        let tail = &after_start[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        entries.push((target.trim(), &tail[..params_end]));
        rest = &tail[params_end..];
    }
    entries
}

fn has_next_relation(params: &str) -> bool {
    params
        .split([';', ','])
        .filter_map(|p| p.split_once('='))
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case("rel"))
        .any(|(_, value)| value.trim().trim_matches('"').split_whitespace().any(|r| r.eq_ignore_ascii_case("next")))
}
