use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;

use crate::pattern::parse_line;
use crate::{FilterError, MatchResult, Result};

/// Pattern used when no filters are configured: every path.
pub const DEFAULT_PATTERN: &str = "**/*";

/// A single entry of a [`FilterSet`].
///
/// Unnamed filters hold exactly one pattern and are keyed by its text. Named
/// filters may hold several patterns, including `!`-prefixed exclusions.
#[derive(Debug, Clone)]
pub struct Filter {
    name: String,
    named: bool,
    patterns: Vec<String>,
    include: GlobSet,
    exclude: GlobSet,
}

impl Filter {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        self.named
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

#[derive(Default)]
struct PendingFilter {
    named: bool,
    patterns: Vec<String>,
}

impl FilterSet {
    /// Parses newline-separated filter text.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is not valid glob syntax or the filter
    /// text is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }

    /// # Errors
    ///
    /// Returns an error if a pattern is not valid glob syntax or the filter
    /// text is malformed.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pending: IndexMap<String, PendingFilter> = IndexMap::new();

        for line in lines {
            let Some(parsed) = parse_line(line.as_ref())? else {
                continue;
            };

            match parsed.name {
                Some(name) => {
                    if parsed.patterns.is_empty() {
                        return Err(FilterError::EmptyFilter {
                            name: name.to_string(),
                        });
                    }

                    let entry = pending.entry(name.to_string()).or_insert(PendingFilter {
                        named: true,
                        patterns: Vec::new(),
                    });
                    if !entry.named {
                        return Err(FilterError::NameConflict {
                            name: name.to_string(),
                        });
                    }
                    entry
                        .patterns
                        .extend(parsed.patterns.iter().map(ToString::to_string));
                }
                None => {
                    for pattern in parsed.patterns {
                        if pattern.starts_with('!') {
                            return Err(FilterError::OrphanNegation {
                                pattern: pattern.to_string(),
                            });
                        }

                        let entry = pending.entry(pattern.to_string()).or_default();
                        if entry.named {
                            return Err(FilterError::NameConflict {
                                name: pattern.to_string(),
                            });
                        }
                        if entry.patterns.is_empty() {
                            entry.patterns.push(pattern.to_string());
                        }
                    }
                }
            }
        }

        let filters = pending
            .into_iter()
            .map(|(name, filter)| build_filter(name, filter))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { filters })
    }

    /// The set used when no filters are configured: a single `**/*` filter.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`FilterSet::parse`].
    pub fn match_everything() -> Result<Self> {
        Self::parse(DEFAULT_PATTERN)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn named(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter().filter(|f| f.named)
    }

    #[must_use]
    pub fn matches_any(&self, path: &str) -> bool {
        self.filters.iter().any(|f| f.is_match(path))
    }

    /// Groups `paths` by filter, keeping filter order and path order. Filters
    /// without any match are left out of the result.
    #[must_use]
    pub fn match_paths<S: AsRef<str>>(&self, paths: &[S]) -> MatchResult {
        let mut result = MatchResult::default();

        for filter in &self.filters {
            let matched: Vec<String> = paths
                .iter()
                .map(AsRef::as_ref)
                .filter(|path| filter.is_match(path))
                .map(ToString::to_string)
                .collect();

            result.insert(filter.name.clone(), matched);
        }

        result
    }
}

fn build_filter(name: String, pending: PendingFilter) -> Result<Filter> {
    let mut include = GlobSetBuilder::new();
    let mut exclude = GlobSetBuilder::new();
    let mut has_positive = false;

    for pattern in &pending.patterns {
        match pattern.strip_prefix('!') {
            Some(negated) => {
                exclude.add(compile(negated, pattern)?);
            }
            None => {
                include.add(compile(pattern, pattern)?);
                has_positive = true;
            }
        }
    }

    if !has_positive {
        return Err(FilterError::NoPositivePattern { name });
    }

    let build = |builder: GlobSetBuilder| {
        builder.build().map_err(|source| FilterError::InvalidPattern {
            pattern: pending.patterns.join(", "),
            source,
        })
    };

    Ok(Filter {
        include: build(include)?,
        exclude: build(exclude)?,
        name,
        named: pending.named,
        patterns: pending.patterns.clone(),
    })
}

fn compile(glob: &str, original: &str) -> Result<globset::Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|source| FilterError::InvalidPattern {
            pattern: original.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(text: &str) -> FilterSet {
        FilterSet::parse(text).expect("filter text should parse")
    }

    #[test]
    fn python_filter_matches_python_files_at_any_depth() {
        let result = set("**/*.py").match_paths(&["a.py", "b.txt", "pkg/mod/c.py"]);

        assert_eq!(result.get("**/*.py"), Some(&["a.py", "pkg/mod/c.py"].map(String::from)[..]));
        assert!(result.any_changed());
    }

    #[test]
    fn python_filter_yields_single_entry() {
        let result = set("**/*.py").match_paths(&["a.py", "b.txt"]);

        assert_eq!(result.len(), 1);
        assert_eq!(result.get("**/*.py"), Some(&["a.py".to_string()][..]));
        assert!(result.any_changed());
    }

    #[test]
    fn empty_path_list_yields_empty_mapping() {
        let paths: [&str; 0] = [];
        let result = set("**/*.py\ndocs/**").match_paths(&paths);

        assert!(result.is_empty());
        assert!(!result.any_changed());
    }

    #[test]
    fn empty_filter_set_yields_empty_mapping() {
        let result = set("").match_paths(&["a.py"]);

        assert!(result.is_empty());
        assert!(!result.any_changed());
    }

    #[test]
    fn path_matching_two_filters_appears_in_both() {
        let result = set("**/*.py\nsrc/**").match_paths(&["src/app.py", "README.md"]);

        assert_eq!(result.get("**/*.py"), Some(&["src/app.py".to_string()][..]));
        assert_eq!(result.get("src/**"), Some(&["src/app.py".to_string()][..]));
    }

    #[test]
    fn filters_keep_declaration_order() {
        let result = set("b/**\na/**").match_paths(&["a/x", "b/y"]);

        let names: Vec<&str> = result.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b/**", "a/**"]);
    }

    #[test]
    fn star_does_not_cross_directories() {
        let result = set("*.md").match_paths(&["README.md", "docs/guide.md"]);

        assert_eq!(result.get("*.md"), Some(&["README.md".to_string()][..]));
    }

    #[test]
    fn directory_filter_matches_everything_below() {
        let result = set("dir/**").match_paths(&["file1.txt", "dir/file3.md", "dir/sub/file4.txt"]);

        assert_eq!(
            result.get("dir/**"),
            Some(&["dir/file3.md", "dir/sub/file4.txt"].map(String::from)[..])
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let result = set("**/*.PY").match_paths(&["a.py"]);

        assert!(result.is_empty());
    }

    #[test]
    fn comma_separated_patterns_become_separate_filters() {
        let filters = set("**/*.py, **/*.md");

        let names: Vec<&str> = filters.iter().map(Filter::name).collect();
        assert_eq!(names, vec!["**/*.py", "**/*.md"]);
    }

    #[test]
    fn brace_alternation_stays_one_filter() {
        let filters = set("**/*.{yml,yaml}");

        assert_eq!(filters.len(), 1);
        assert!(filters.matches_any(".github/workflows/ci.yaml"));
        assert!(filters.matches_any("compose.yml"));
    }

    #[test]
    fn duplicate_bare_patterns_collapse() {
        let filters = set("**/*.py\n**/*.py");

        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn named_filter_collects_patterns_across_lines() {
        let filters = set("docs: docs/**\ndocs: *.md\nsrc/**");

        assert_eq!(filters.len(), 2);
        let docs = filters.iter().next().expect("docs filter");
        assert!(docs.is_named());
        assert_eq!(docs.name(), "docs");
        assert_eq!(docs.patterns(), ["docs/**", "*.md"]);

        let result = filters.match_paths(&["README.md", "docs/a.txt", "src/lib.rs"]);
        assert_eq!(
            result.get("docs"),
            Some(&["README.md", "docs/a.txt"].map(String::from)[..])
        );
    }

    #[test]
    fn named_filter_exclusions_remove_paths() {
        let result = set("docs: docs/**, !docs/generated/**")
            .match_paths(&["docs/guide.md", "docs/generated/api.md"]);

        assert_eq!(result.get("docs"), Some(&["docs/guide.md".to_string()][..]));
    }

    #[test]
    fn named_filters_are_listed_separately() {
        let filters = set("backend: src/**\n**/*.md");

        let named: Vec<&str> = filters.named().map(Filter::name).collect();
        assert_eq!(named, vec!["backend"]);
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let err = FilterSet::parse("src/[abc").expect_err("unclosed class should fail");

        assert!(matches!(err, FilterError::InvalidPattern { pattern, .. } if pattern == "src/[abc"));
    }

    #[test]
    fn malformed_filter_name_is_rejected() {
        let err = FilterSet::parse("**/*.py\nmy docs: docs/**").expect_err("name has a space");

        assert!(matches!(err, FilterError::InvalidName { name } if name == "my docs"));
    }

    #[test]
    fn colon_inside_a_glob_stays_a_pattern() {
        let filters = set("src/*:weird");

        assert_eq!(filters.len(), 1);
        assert!(filters.matches_any("src/a:weird"));
    }

    #[test]
    fn bare_negation_is_rejected() {
        let err = FilterSet::parse("!**/*.md").expect_err("bare negation should fail");

        assert!(matches!(err, FilterError::OrphanNegation { .. }));
    }

    #[test]
    fn negation_only_filter_is_rejected() {
        let err = FilterSet::parse("docs: !docs/**").expect_err("negation-only filter should fail");

        assert!(matches!(err, FilterError::NoPositivePattern { name } if name == "docs"));
    }

    #[test]
    fn named_filter_without_patterns_is_rejected() {
        let err = FilterSet::parse("docs:").expect_err("empty named filter should fail");

        assert!(matches!(err, FilterError::EmptyFilter { name } if name == "docs"));
    }

    #[test]
    fn name_used_as_bare_pattern_conflicts() {
        let err = FilterSet::parse("Makefile\nMakefile: build/**")
            .expect_err("name clash should fail");

        assert!(matches!(err, FilterError::NameConflict { name } if name == "Makefile"));
    }

    #[test]
    fn default_set_matches_every_path() {
        let filters = FilterSet::match_everything().expect("default set should build");
        let paths = ["file1.txt", "file2.py", "dir/file3.md", ".github/workflows/ci.yml"];

        let result = filters.match_paths(&paths);

        assert_eq!(result.get(DEFAULT_PATTERN), Some(&paths.map(String::from)[..]));
    }
}
