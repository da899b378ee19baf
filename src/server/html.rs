//! HTML rendering for the web form.

/// Landing page with the scoring form.
pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8" />
</head>
<body>
<div>
  <form method="POST" action="/">
    <label>Name<br>
      <input name="name" type="text" value="" />
    </label>
    <br>
    <label>Message<br>
      <textarea name="message" cols="40" rows="9"></textarea>
    </label>
    <br>
    <input type="submit" value="submit" />
  </form>
</div>
</body>
</html>
"#;

/// Escape the five HTML-special characters `& < > ' "`.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the scoring report shown after a form submission.
pub fn render_report(name: &str, message: &str, prob_is_bad: f64) -> String {
    format!(
        "<html><pre> \nName \t {}\nmessage \t {}\nprobabilityIsBad \t {:.6}\n<br><a href=\"/\">back</a>\n",
        escape(name),
        escape(message),
        prob_is_bad
    )
}
