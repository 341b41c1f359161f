//! Plain-text cleanup for HTML fragments

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("hardcoded regex pattern is valid"));

/// Replaces every tag with a single space
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, " ").into_owned()
}

/// Collapses whitespace runs to one space and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes the entities descriptions actually use
///
/// Handles `&amp; &lt; &gt; &quot; &#39;` and numeric references in decimal
/// (`&#65;`) or hex (`&#x41;`). `&amp;` is decoded first and the rest run over
/// its output, so double-escaped markup such as `&amp;lt;b&amp;gt;` becomes
/// `<b>`. Unknown names and invalid code points are left as written.
pub fn decode_entities(text: &str) -> String {
    decode_references(&text.replace("&amp;", "&"))
}

fn decode_references(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        match candidate
            .find(';')
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|c| (c, semi)))
        {
            Some((decoded, semi)) => {
                out.push(decoded);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(&['x', 'X'][..]) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
