/// Requested capture framing. Unrecognized tokens normalize to
/// `Unspecified` so stray query values never break the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureAngle {
    X,
    Y,
    #[default]
    Unspecified,
}

impl CaptureAngle {
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("x") => CaptureAngle::X,
            Some("y") => CaptureAngle::Y,
            _ => CaptureAngle::Unspecified,
        }
    }
}

/// Viewer input, resolved once at session start from the query string and
/// immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerParams {
    /// Relative path of the puzzle resource; empty means no puzzle was
    /// specified and the session must fail with a parameter hint.
    pub puzzle_file: String,
    /// The identifier as given, for error messages.
    pub puzzle_label: String,
    /// Removed-piece override, only honored when the puzzle data itself
    /// carries none (capture scripts pass pieces this way).
    pub removed_override: Vec<String>,
    pub capture: bool,
    pub angle: CaptureAngle,
}

impl ViewerParams {
    pub fn has_puzzle(&self) -> bool {
        !self.puzzle_file.is_empty()
    }
}

/// Resolve all viewer input from a raw query string (`?id=...&mode=capture`).
/// `id` is preferred; `puzzle_id` is the legacy convention with its own file
/// naming. Pure function of the input.
pub fn resolve_params(search: &str) -> ViewerParams {
    let id = get_query_param(search, "id").filter(|s| !s.is_empty());
    let legacy = get_query_param(search, "puzzle_id").filter(|s| !s.is_empty());
    let removed_override =
        split_piece_list(&get_query_param(search, "removed_pieces").unwrap_or_default());
    let capture = get_query_param(search, "mode").as_deref() == Some("capture");
    let angle = CaptureAngle::parse(get_query_param(search, "angle").as_deref());

    let (puzzle_file, puzzle_label) = match (id, legacy) {
        (Some(id), _) => (format!("puzzles/{}.json", id), id),
        (None, Some(pid)) => (format!("puzzles/puzzle_{}.json", pid), pid),
        (None, None) => (String::new(), String::new()),
    };

    ViewerParams {
        puzzle_file,
        puzzle_label,
        removed_override,
        capture,
        angle,
    }
}

/// Split a comma-separated piece list, trimming whitespace and dropping
/// empty tokens. An empty or all-whitespace input yields an empty list.
pub fn split_piece_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_query_param(search: &str, key: &str) -> Option<String> {
    // naive parser for ?a=b&c=d
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}
