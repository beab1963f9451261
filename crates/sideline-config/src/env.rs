use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// An optional fallback can be supplied with
/// `{{ env.VAR | default("fallback") }}`; when the variable is unset the
/// fallback is substituted instead of failing. Expansion happens on the raw
/// text before deserialization so config structs stay plain
/// String/SecretString. Comment lines are passed through untouched.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn placeholder() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: dotted key (e.g. `env.STRIPE_SECRET_KEY`)
        // Group 2: optional default value inside default("...")
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut expanded = String::with_capacity(line.len());
        let mut cursor = 0;

        for captures in placeholder().captures_iter(line) {
            let whole = captures.get(0).unwrap();
            let key = captures.get(1).unwrap().as_str();
            let fallback = captures.get(2).map(|m| m.as_str());

            expanded.push_str(&line[cursor..whole.start()]);

            let Some(var_name) = key.strip_prefix("env.").filter(|rest| !rest.contains('.')) else {
                return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
            };

            match std::env::var(var_name) {
                Ok(value) => expanded.push_str(&value),
                Err(_) => match fallback {
                    Some(value) => expanded.push_str(value),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            cursor = whole.end();
        }

        expanded.push_str(&line[cursor..]);
        output.push_str(&expanded);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
