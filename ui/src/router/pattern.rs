use std::collections::HashMap;

/// One piece of a pattern segment
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    /// `:name` - one or more non-slash chars
    Param(String),
}

/// A path pattern like `/users/:id`, compiled once at registration.
///
/// The pattern is split on `/` and every segment becomes a list of literal
/// and wildcard pieces. A wildcard may sit inside a segment
/// (`/files/:name.txt`), so segments are matched with a small backtracking
/// walk rather than a plain equality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Vec<Piece>>,
}

impl PathPattern {
    pub fn compile(raw: &str) -> Self {
        let segments = raw.split('/').map(compile_segment).collect();
        Self { raw: raw.to_owned(), segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// true if the pattern has at least one `:name` wildcard
    pub fn is_parameterized(&self) -> bool {
        self.segments
            .iter()
            .flatten()
            .any(|p| matches!(p, Piece::Param(_)))
    }

    /// Names in the order they appear, duplicates included.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .flatten()
            .filter_map(|p| match p {
                Piece::Param(name) => Some(name.as_str()),
                Piece::Literal(_) => None,
            })
            .collect()
    }

    /// Full-path match. Returns the named captures on success.
    ///
    /// A repeated name keeps the last capture.
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pieces, part) in self.segments.iter().zip(parts) {
            let mut caught = Vec::new();
            if !match_pieces(pieces, part, &mut caught) {
                return None;
            }
            params.extend(caught);
        }
        Some(params)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn compile_segment(seg: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut literal = String::new();
    let mut chars = seg.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let starts_name = c == ':'
            && chars.peek().is_some_and(|&(_, next)| is_name_char(next));
        if !starts_name {
            literal.push(c);
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while let Some(&(j, next)) = chars.peek() {
            if !is_name_char(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(std::mem::take(&mut literal)));
        }
        pieces.push(Piece::Param(seg[start..end].to_owned()));
    }

    if !literal.is_empty() {
        pieces.push(Piece::Literal(literal));
    }
    pieces
}

fn match_pieces(pieces: &[Piece], input: &str, caught: &mut Vec<(String, String)>) -> bool {
    let Some((first, rest)) = pieces.split_first() else {
        return input.is_empty();
    };

    match first {
        Piece::Literal(lit) => match input.strip_prefix(lit.as_str()) {
            Some(tail) => match_pieces(rest, tail, caught),
            None => false,
        },
        Piece::Param(name) => {
            // greedy: try the longest capture first, like `[^/]+`
            let ends: Vec<usize> = input
                .char_indices()
                .map(|(i, c)| i + c.len_utf8())
                .collect();
            for &end in ends.iter().rev() {
                let mark = caught.len();
                caught.push((name.clone(), input[..end].to_owned()));
                if match_pieces(rest, &input[end..], caught) {
                    return true;
                }
                caught.truncate(mark);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/users/:id", "/users/42", true)]
    #[case("/users/:id", "/users/42/extra", false)]
    #[case("/users/:id", "/users/", false)]
    #[case("/users/:id", "/users", false)]
    #[case("/users/:id", "/people/42", false)]
    #[case("/users/:id/posts/:post", "/users/7/posts/hello-world", true)]
    #[case("/files/:name.txt", "/files/report.txt", true)]
    #[case("/files/:name.txt", "/files/.txt", false)]
    #[case("/files/:name.txt", "/files/report.md", false)]
    #[case("/v:major/docs", "/v2/docs", true)]
    #[case("/a:b", "/axyz", true)]
    #[case("/a:b", "/a", false)]
    #[case("/odd/:", "/odd/:", true)]
    #[case("/", "/", true)]
    #[case("/about", "/about", true)]
    #[case("/about", "/about/", false)]
    fn anchored_matching(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(PathPattern::compile(pattern).is_match(path), expected);
    }

    #[test]
    fn named_captures() {
        let pat = PathPattern::compile("/users/:id/posts/:post_id");
        let params = pat.captures("/users/42/posts/abc").unwrap();

        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert_eq!(params.get("post_id").map(String::as_str), Some("abc"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn mixed_segment_backtracks() {
        // `.` is literal, and the wildcard has to give back the `.tar`
        let pat = PathPattern::compile("/dl/:file.tar.gz");
        let params = pat.captures("/dl/pkg.v1.tar.gz").unwrap();
        assert_eq!(params["file"], "pkg.v1");
    }

    #[test]
    fn duplicate_names_are_accepted() {
        let pat = PathPattern::compile("/a/:id/:id");
        assert_eq!(pat.param_names(), vec!["id", "id"]);

        let params = pat.captures("/a/1/2").unwrap();
        assert_eq!(params["id"], "2");
    }

    #[test]
    fn plain_patterns_are_not_parameterized() {
        assert!(!PathPattern::compile("/about").is_parameterized());
        assert!(!PathPattern::compile("/odd/:").is_parameterized());
        assert!(PathPattern::compile("/users/:id").is_parameterized());
    }
}
