//! Struct tag parsing.
//!
//! Tags follow Go's convention: space-separated `key:"value"` pairs, where
//! the value is a Go string literal. Only the `json` key matters here.

/// What the `json` tag says about a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagInfo {
    /// Serialized field name; empty when the field is never serialized.
    pub name: String,
    /// `omitempty` was given.
    pub optional: bool,
}

impl TagInfo {
    pub fn is_dropped(&self) -> bool {
        self.name.is_empty()
    }
}

/// Extract the JSON field name and optionality from a raw struct tag.
///
/// Accepts the tag with or without its surrounding backquotes. A missing
/// `json` key, an empty name and `json:"-"` all yield an empty name.
pub fn parse_tag(raw: &str) -> TagInfo {
    let Some(value) = lookup(strip_backquotes(raw), "json") else {
        return TagInfo::default();
    };
    if value == "-" {
        return TagInfo::default();
    }

    let mut options = value.split(',');
    let name = options.next().unwrap_or_default();
    if name.is_empty() {
        return TagInfo::default();
    }

    TagInfo {
        name: name.to_string(),
        optional: options.any(|opt| opt == "omitempty"),
    }
}

fn strip_backquotes(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .unwrap_or(raw)
}

/// Value for `key`, following the rules of Go's `reflect.StructTag.Lookup`.
///
/// Scanning stops at the first malformed pair.
fn lookup(mut tag: &str, key: &str) -> Option<String> {
    loop {
        tag = tag.trim_start_matches(' ');
        if tag.is_empty() {
            return None;
        }

        let name_len = tag
            .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
            .unwrap_or(tag.len());
        if name_len == 0 || !tag[name_len..].starts_with(":\"") {
            return None;
        }
        let name = &tag[..name_len];
        tag = &tag[name_len + 1..];

        let close = closing_quote(tag)?;
        let quoted = &tag[..=close];
        tag = &tag[close + 1..];

        if name == key {
            return unquote(quoted);
        }
    }
}

/// Byte index of the quote closing the literal that starts at `tag[0]`.
fn closing_quote(tag: &str) -> Option<usize> {
    let bytes = tag.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Decode a Go interpreted string literal, quotes included.
///
/// Returns `None` on a malformed escape, which makes the whole key lookup
/// fail just as `strconv.Unquote` failing does in Go.
fn unquote(quoted: &str) -> Option<String> {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        let escaped = chars.next()?;
        let simple = match escaped {
            'a' => Some(b'\x07'),
            'b' => Some(b'\x08'),
            'f' => Some(b'\x0c'),
            'n' => Some(b'\n'),
            'r' => Some(b'\r'),
            't' => Some(b'\t'),
            'v' => Some(b'\x0b'),
            '\\' => Some(b'\\'),
            '"' => Some(b'"'),
            _ => None,
        };
        if let Some(byte) = simple {
            out.push(byte);
            continue;
        }

        match escaped {
            'x' => out.push(hex_digits(&mut chars, 2)? as u8),
            '0'..='7' => {
                let rest = take(&mut chars, 2)?;
                let digits = format!("{escaped}{rest}");
                let value = u32::from_str_radix(&digits, 8).ok()?;
                out.push(u8::try_from(value).ok()?);
            }
            'u' | 'U' => {
                let len = if escaped == 'u' { 4 } else { 8 };
                let ch = char::from_u32(hex_digits(&mut chars, len)?)?;
                let mut buf = [0; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            _ => return None,
        }
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

fn take(chars: &mut std::str::Chars<'_>, len: usize) -> Option<String> {
    let taken: String = chars.by_ref().take(len).collect();
    (taken.chars().count() == len).then_some(taken)
}

fn hex_digits(chars: &mut std::str::Chars<'_>, len: usize) -> Option<u32> {
    let digits = take(chars, len)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
