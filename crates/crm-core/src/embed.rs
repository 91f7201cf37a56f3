//! Form Embed Snippet
//!
//! Two-line HTML a customer pastes into their site: a placeholder `<div>` and
//! the public, unauthenticated embed script for the form.

pub fn embed_script_url(public_origin: &str, form_id: &str) -> String {
    format!(
        "{}/public/v1/forms/{}/embed.js",
        public_origin.trim_end_matches('/'),
        form_id
    )
}

pub fn embed_snippet(public_origin: &str, form_id: &str) -> String {
    format!(
        "<div id=\"crm-form-{id}\"></div>\n<script src=\"{src}\"></script>",
        id = form_id,
        src = embed_script_url(public_origin, form_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_two_lines() {
        let snippet = embed_snippet("https://crm.example.com/", "f-42");
        let lines: Vec<_> = snippet.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"<div id="crm-form-f-42"></div>"#,
                r#"<script src="https://crm.example.com/public/v1/forms/f-42/embed.js"></script>"#,
            ]
        );
    }
}
