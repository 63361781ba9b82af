//! Whitespace and comment stripping for CSS text.

/// Characters after which whitespace is dropped.
const NO_SPACE_AFTER: [char; 5] = ['{', '}', ':', ';', ','];

/// Characters before which whitespace is dropped.
const NO_SPACE_BEFORE: [char; 5] = ['{', '}', '!', ';', ','];

/// Minify CSS text.
///
/// Removes block comments (each counts as whitespace), collapses
/// whitespace runs to one space, drops
/// spaces after `{ } : ; ,` and before `{ } ! ; ,`, and trims the result.
/// Quoted strings are copied verbatim.
#[must_use]
pub fn minify_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    let mut pending_space = false;

    while let Some(ch) = chars.next() {
        if ch == '/' && chars.peek() == Some(&'*') {
            chars.next();
            skip_comment(&mut chars);
            // a removed comment still separates the text around it
            pending_space = true;
            continue;
        }

        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space
            && out
                .chars()
                .next_back()
                .is_some_and(|last| !NO_SPACE_AFTER.contains(&last))
            && !NO_SPACE_BEFORE.contains(&ch)
        {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);

        if ch == '"' || ch == '\'' {
            copy_string(&mut chars, ch, &mut out);
        }
    }

    out
}

fn skip_comment(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while let Some(ch) = chars.next() {
        if ch == '*' && chars.peek() == Some(&'/') {
            chars.next();
            return;
        }
    }
}

fn copy_string(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char, out: &mut String) {
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if ch == quote {
            return;
        }
    }
}
