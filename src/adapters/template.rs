use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::sync::OnceLock;

use crate::domain::AppError;

/// Placeholder substitution using Minijinja.
///
/// Only `{{ name }}` expressions are allowed. Unknown names fail the render.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `template` with the fields of `values`.
    ///
    /// `template_name` is only used for error reporting.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        template: &str,
        values: &T,
        template_name: &str,
    ) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(AppError::TemplateSyntaxNotAllowed {
                template: template_name.to_string(),
                token: token.to_string(),
            });
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, values).map_err(|err| AppError::TemplateMismatch {
            template: template_name.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn substitutes_placeholders_and_keeps_trailing_newline() {
        let out = MinijinjaTemplateRenderer::new()
            .render("URL='{{ url }}'\n", &values(&[("url", "https://x.org")]), "t")
            .unwrap();
        assert_eq!(out, "URL='https://x.org'\n");
    }

    #[test]
    fn unknown_placeholder_is_a_mismatch() {
        let err = MinijinjaTemplateRenderer::new()
            .render("A={{ missing }}\n", &values(&[("present", "x")]), "env.tmpl")
            .unwrap_err();
        assert!(matches!(err, AppError::TemplateMismatch { ref template, .. } if template == "env.tmpl"));
    }

    #[test]
    fn block_syntax_is_rejected() {
        let err = MinijinjaTemplateRenderer::new()
            .render("{% if x %}y{% endif %}", &values(&[("x", "1")]), "t")
            .unwrap_err();
        assert!(matches!(err, AppError::TemplateSyntaxNotAllowed { .. }));
    }

    #[test]
    fn shell_comments_are_left_alone() {
        let out = MinijinjaTemplateRenderer::new()
            .render("# comment\nA=1\n", &values(&[]), "t")
            .unwrap();
        assert_eq!(out, "# comment\nA=1\n");
    }
}
