/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `<option>` list with `selected` set on the matching value.
pub fn options<'a, I>(choices: I, selected: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    choices
        .into_iter()
        .map(|(value, label)| {
            let marker = if value.eq_ignore_ascii_case(selected) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape(value),
                marker,
                escape(label)
            )
        })
        .collect()
}
