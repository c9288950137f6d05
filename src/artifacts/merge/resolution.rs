use derive_new::new;

/// How to settle a file during a merge
///
/// With a replacement, the replacement file's bytes overwrite the working copy
/// of `path`. Without one, the file is dropped from the merged index.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Resolution {
    pub path: String,
    pub replacement: Option<String>,
}

impl Resolution {
    /// Parse the `<path>[=<replacement>]` form used on the command line
    pub fn parse(spec: &str) -> Self {
        match spec.split_once('=') {
            Some((path, replacement)) if !replacement.is_empty() => {
                Self::new(path.to_string(), Some(replacement.to_string()))
            }
            Some((path, _)) => Self::new(path.to_string(), None),
            None => Self::new(spec.to_string(), None),
        }
    }
}

/// Find the resolution registered for `path`, first match wins
pub fn find_resolution<'r>(resolutions: &'r [Resolution], path: &str) -> Option<&'r Resolution> {
    resolutions.iter().find(|resolution| resolution.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_replacement_form() {
        assert_eq!(
            Resolution::parse("a.txt=fixed/a.txt"),
            Resolution::new("a.txt".to_string(), Some("fixed/a.txt".to_string()))
        );
    }

    #[test]
    fn bare_path_drops_the_file() {
        assert_eq!(
            Resolution::parse("a.txt"),
            Resolution::new("a.txt".to_string(), None)
        );
        assert_eq!(
            Resolution::parse("a.txt="),
            Resolution::new("a.txt".to_string(), None)
        );
    }

    #[test]
    fn lookup_uses_the_first_match() {
        let resolutions = vec![
            Resolution::new("a".to_string(), Some("x".to_string())),
            Resolution::new("a".to_string(), None),
        ];

        assert_eq!(
            find_resolution(&resolutions, "a").and_then(|r| r.replacement.as_deref()),
            Some("x")
        );
        assert!(find_resolution(&resolutions, "b").is_none());
    }
}
