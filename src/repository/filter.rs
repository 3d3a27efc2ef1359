//! Include/exclude path patterns for traversal

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Decides which paths are handed to the visitor.
///
/// A path passes when it matches an include pattern (or none were given)
/// and matches no exclude pattern.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl PathFilter {
    /// Build a filter from glob lists. Each item may hold several
    /// comma-separated patterns.
    pub fn new<S: AsRef<str>>(include: &[S], exclude: &[S]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include).context("invalid --include pattern")?,
            exclude: build_globset(exclude).context("invalid --exclude pattern")?,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.is_match(path) {
                return false;
            }
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(path),
            None => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }
}

fn build_globset<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>> {
    let mut builder = GlobSetBuilder::new();
    let mut count = 0;

    for pattern in patterns
        .iter()
        .flat_map(|p| p.as_ref().split(','))
        .map(|p| p.trim().trim_end_matches('/'))
        .filter(|p| !p.is_empty())
    {
        // Bare names match at any depth, and a directory matches everything below it.
        let mut variants = vec![pattern.to_string(), format!("{}/**", pattern)];
        if !pattern.contains('/') {
            variants.push(format!("**/{}", pattern));
            variants.push(format!("**/{}/**", pattern));
        }

        for variant in variants {
            let glob = Glob::new(&variant).with_context(|| format!("bad glob {:?}", pattern))?;
            builder.add(glob);
        }
        count += 1;
    }

    if count == 0 {
        return Ok(None);
    }
    Ok(Some(builder.build()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include: &[&str], exclude: &[&str]) -> PathFilter {
        PathFilter::new(include, exclude).unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let f = filter(&[], &[]);
        assert!(f.is_empty());
        assert!(f.matches("anything/at/all.txt"));
    }

    #[test]
    fn test_include_extension_at_any_depth() {
        let f = filter(&["*.png"], &[]);
        assert!(f.matches("logo.png"));
        assert!(f.matches("assets/img/logo.png"));
        assert!(!f.matches("src/main.rs"));
    }

    #[test]
    fn test_exclude_directory() {
        let f = filter(&[], &["vendor/"]);
        assert!(!f.matches("vendor/lib.js"));
        assert!(!f.matches("web/vendor/lib.js"));
        assert!(f.matches("src/vendor.rs"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let f = filter(&["*.bin"], &["tmp"]);
        assert!(f.matches("data/model.bin"));
        assert!(!f.matches("tmp/model.bin"));
    }

    #[test]
    fn test_comma_separated_patterns() {
        let f = filter(&["*.png,*.jpg"], &[]);
        assert!(f.matches("a.png"));
        assert!(f.matches("b.jpg"));
        assert!(!f.matches("c.gif"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PathFilter::new(&["a[b"], &[]).is_err());
    }
}
