// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `${VAR}` templates for URLs that embed secrets.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::{env::EnvSource, secret::REDACTED};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

/// A string with `${VAR}` placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Variable names referenced by this template, in order of first appearance.
    pub fn vars(&self) -> Vec<String> {
        let mut vars: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(&self.0) {
            let name = &caps[1];
            if !vars.iter().any(|v| v == name) {
                vars.push(name.to_owned());
            }
        }
        vars
    }

    /// Substitutes every placeholder with its value from `env`.
    ///
    /// Returns `None` if any referenced variable is unresolved.
    pub fn render(&self, env: &impl EnvSource) -> Option<String> {
        self.substitute(|name| env.resolve(name))
    }

    fn substitute(&self, mut lookup: impl FnMut(&str) -> Option<String>) -> Option<String> {
        let mut out = String::with_capacity(self.0.len());
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(&self.0) {
            let whole = caps.get(0)?;
            out.push_str(&self.0[last..whole.start()]);
            out.push_str(&lookup(&caps[1])?);
            last = whole.end();
        }
        out.push_str(&self.0[last..]);
        Some(out)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A URL rendered from a [`UrlTemplate`] against an environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplatedUrl {
    template: UrlTemplate,
    rendered: Option<String>,
    unresolved: Vec<String>,
}

impl TemplatedUrl {
    pub fn render(template: UrlTemplate, env: &impl EnvSource) -> Self {
        let rendered = template.render(env);
        let unresolved = template
            .vars()
            .into_iter()
            .filter(|var| env.resolve(var).is_none())
            .collect();
        Self {
            template,
            rendered,
            unresolved,
        }
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }

    /// The rendered URL, if every placeholder resolved.
    pub fn expose(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Variables this URL needs that did not resolve, or all of them if the rendered URL is
    /// malformed. A malformed URL without placeholders is reported as `{label}.url`.
    pub fn missing(&self, label: &str) -> Vec<String> {
        match &self.rendered {
            Some(url) if url::Url::parse(url).is_ok() => Vec::new(),
            Some(_) => match self.template.vars() {
                vars if vars.is_empty() => vec![format!("{label}.url")],
                vars => vars,
            },
            None => self.unresolved.clone(),
        }
    }

    /// Copy with every substituted value masked.
    pub fn redacted(&self) -> Self {
        let rendered = self
            .rendered
            .as_ref()
            .and_then(|_| self.template.substitute(|_| Some(REDACTED.to_owned())));
        Self {
            template: self.template.clone(),
            rendered,
            unresolved: self.unresolved.clone(),
        }
    }
}

/// Serializes to the rendered URL, or `null` when a placeholder is unresolved.
impl Serialize for TemplatedUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rendered.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const GOERLI: &str = "https://eth-goerli.g.alchemy.com/v2/${ALCHEMY_GOERLI_API_KEY}";

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn vars_are_listed_once_in_order() {
        let template = UrlTemplate::new("${B}/${A}/${B}");
        assert_eq!(template.vars(), ["B", "A"]);
        assert!(UrlTemplate::new("http://127.0.0.1:8545").vars().is_empty());
    }

    #[test]
    fn render_substitutes_verbatim() {
        let template = UrlTemplate::new(GOERLI);
        let url = template
            .render(&env(&[("ALCHEMY_GOERLI_API_KEY", "abc123")]))
            .unwrap();
        assert_eq!(url, "https://eth-goerli.g.alchemy.com/v2/abc123");
        assert!(!url.contains("${"));
    }

    #[test]
    fn render_fails_on_unresolved_or_blank() {
        let template = UrlTemplate::new(GOERLI);
        assert_eq!(template.render(&env(&[])), None);
        assert_eq!(
            template.render(&env(&[("ALCHEMY_GOERLI_API_KEY", "")])),
            None
        );
    }

    #[test]
    fn malformed_render_reports_template_vars() {
        let url = TemplatedUrl::render(UrlTemplate::new("${HOST}"), &env(&[("HOST", "nope")]));
        assert_eq!(url.expose(), Some("nope"));
        assert_eq!(url.missing("goerli"), ["HOST"]);
    }

    #[test]
    fn malformed_literal_is_reported_by_label() {
        let url = TemplatedUrl::render(UrlTemplate::new("not a url"), &env(&[]));
        assert_eq!(url.expose(), Some("not a url"));
        assert_eq!(url.missing("goerli"), ["goerli.url"]);
        let ok = TemplatedUrl::render(UrlTemplate::new("http://127.0.0.1:8545"), &env(&[]));
        assert!(ok.missing("localhost").is_empty());
    }

    #[test]
    fn unresolved_vars_are_reported() {
        let url = TemplatedUrl::render(
            UrlTemplate::new("https://${HOST}/v2/${KEY}"),
            &env(&[("HOST", "example.org")]),
        );
        assert_eq!(url.expose(), None);
        assert_eq!(url.missing("goerli"), ["KEY"]);
    }

    #[test]
    fn redacted_url_hides_key() {
        let url = TemplatedUrl::render(
            UrlTemplate::new(GOERLI),
            &env(&[("ALCHEMY_GOERLI_API_KEY", "abc123")]),
        )
        .redacted();
        assert_eq!(
            url.expose(),
            Some("https://eth-goerli.g.alchemy.com/v2/<redacted>")
        );
    }
}
