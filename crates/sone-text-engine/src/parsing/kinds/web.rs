use crate::parsing::Part;

/// `http://` and `https://` links.
pub struct WebLink;

impl WebLink {
    pub const HTTP: &'static str = "http://";
    pub const HTTPS: &'static str = "https://";
    /// Host label dropped from the front of the shortened form.
    pub const WWW: &'static str = "www";
    /// Stands in for the collapsed middle of a path.
    pub const ELLIPSIS: &'static str = "…";
}

pub fn build(link: &str) -> Part {
    Part::external(link, shorten(link))
}

/// Shortened display form of a URL.
///
/// Applied in order: drop the scheme, drop leading `www.` host labels, drop
/// the query string, collapse everything between the first and last path
/// segment into an ellipsis, drop one trailing `/`.
pub fn shorten(url: &str) -> String {
    let without_scheme = url.find("//").map_or(url, |index| &url[index + 2..]);
    let without_www = without_www_prefix(without_scheme);
    let without_query = without_www.split('?').next().unwrap_or_default();
    let collapsed = without_middle_path_segments(without_query);
    match collapsed.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => collapsed,
    }
}

fn without_www_prefix(s: &str) -> String {
    let (host, path) = match s.find('/') {
        Some(index) => s.split_at(index),
        None => (s, ""),
    };
    let host = host
        .split('.')
        .skip_while(|label| *label == WebLink::WWW)
        .collect::<Vec<_>>()
        .join(".");
    format!("{host}{path}")
}

fn without_middle_path_segments(s: &str) -> String {
    let segments: Vec<&str> = s.split('/').collect();
    match segments.as_slice() {
        [first, _, .., last] => format!("{first}/{}/{last}", WebLink::ELLIPSIS),
        _ => s.to_string(),
    }
}
