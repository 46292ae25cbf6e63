//! ES shader sources on legacy desktop GLSL.
//!
//! GLSL 1.10 and 1.20 reject `#version 100` and know nothing about precision
//! qualifiers. For those dialects the source is rewritten; every other
//! dialect gets the source back untouched.

use std::borrow::Cow;

/// A parsed `GL_SHADING_LANGUAGE_VERSION` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlslDialect {
    /// `major * 100 + minor`, i.e. the number used in `#version` directives.
    pub version: u32,
    pub es: bool,
}

impl GlslDialect {
    /// Parses strings like `"1.20"`, `"4.60 NVIDIA"` or `"OpenGL ES GLSL ES 3.00"`.
    pub fn parse(reported: &str) -> Option<Self> {
        let trimmed = reported.trim();
        let (number, es) = match trimmed.strip_prefix("OpenGL ES GLSL ES") {
            Some(rest) => (rest.trim_start(), true),
            None => (trimmed, false),
        };

        let token = number.split_whitespace().next()?;
        let (major, minor) = token.split_once('.')?;
        let major: u32 = major.parse().ok()?;
        let minor_digits: String = minor.chars().take_while(char::is_ascii_digit).collect();
        let minor: u32 = match minor_digits.len() {
            0 => return None,
            1 => minor_digits.parse::<u32>().ok()? * 10,
            _ => minor_digits[..2].parse().ok()?,
        };

        Some(Self {
            version: major * 100 + minor,
            es,
        })
    }

    /// Desktop GLSL older than 1.30.
    pub fn needs_es_downgrade(self) -> bool {
        !self.es && self.version < 130
    }
}

/// Rewrites `source` for the dialect the driver reported, if it needs it.
pub fn adapt_shader_source<'a>(source: &'a str, reported_dialect: &str) -> Cow<'a, str> {
    match GlslDialect::parse(reported_dialect) {
        Some(dialect) if dialect.needs_es_downgrade() => {
            log::debug!(
                "downgrading shader source to GLSL {} (driver reports {reported_dialect:?})",
                dialect.version
            );
            Cow::Owned(downgrade(source, dialect.version))
        }
        _ => Cow::Borrowed(source),
    }
}

const PRECISION_QUALIFIERS: [&str; 3] = ["lowp", "mediump", "highp"];

/// Replaces `#version 100` with `#version <target>` and removes precision
/// statements and qualifiers outside comments and preprocessor lines.
fn downgrade(source: &str, target: u32) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut pos = 0;
    // Only whitespace seen since the last newline.
    let mut line_start = true;

    while pos < bytes.len() {
        let byte = bytes[pos];
        match byte {
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                let end = line_end(bytes, pos);
                out.push_str(&source[pos..end]);
                pos = end;
                line_start = false;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                let end = find(bytes, pos + 2, b"*/").map_or(bytes.len(), |at| at + 2);
                out.push_str(&source[pos..end]);
                pos = end;
                line_start = false;
            }
            b'#' if line_start => {
                let end = line_end(bytes, pos);
                out.push_str(&rewrite_directive(&source[pos..end], target));
                pos = end;
                line_start = false;
            }
            b if is_ident_start(b) => {
                let end = ident_end(bytes, pos);
                let word = &source[pos..end];
                if word == "precision" {
                    pos = skip_precision_statement(bytes, &mut out, end);
                    line_start = out.is_empty() || out.ends_with('\n');
                    continue;
                }
                if PRECISION_QUALIFIERS.contains(&word) {
                    pos = skip_horizontal_space(bytes, end);
                } else {
                    out.push_str(word);
                    pos = end;
                    line_start = false;
                }
            }
            b'\n' => {
                out.push('\n');
                pos += 1;
                line_start = true;
            }
            b' ' | b'\t' | b'\r' => {
                out.push(byte as char);
                pos += 1;
            }
            _ => {
                let end = next_boundary(source, pos);
                out.push_str(&source[pos..end]);
                pos = end;
                line_start = false;
            }
        }
    }

    out
}

/// Drops `precision ... ;` starting after the keyword at `after_keyword`.
///
/// When the statement is alone on its line the whole line goes with it.
/// Returns the position to resume scanning from.
fn skip_precision_statement(bytes: &[u8], out: &mut String, after_keyword: usize) -> usize {
    let Some(semicolon) = find(bytes, after_keyword, b";") else {
        // Unterminated; the compiler will complain either way.
        return bytes.len();
    };
    let mut pos = semicolon + 1;

    let line_begin = out.rfind('\n').map_or(0, |at| at + 1);
    if out[line_begin..].trim().is_empty() {
        let mut rest = skip_horizontal_space(bytes, pos);
        if bytes.get(rest) == Some(&b'\r') {
            rest += 1;
        }
        if rest == bytes.len() || bytes[rest] == b'\n' {
            out.truncate(line_begin);
            pos = (rest + 1).min(bytes.len());
        }
    }

    pos
}

fn rewrite_directive(line: &str, target: u32) -> String {
    let body = line[1..].trim_start_matches([' ', '\t']);
    let Some(args) = body.strip_prefix("version") else {
        return line.to_string();
    };
    if !args.starts_with([' ', '\t']) {
        return line.to_string();
    }

    let args = args.trim_start_matches([' ', '\t']);
    let digits = args.bytes().take_while(u8::is_ascii_digit).count();
    let (number, rest) = args.split_at(digits);
    let trailing = rest.trim_start_matches([' ', '\t', '\r']);
    let ends_cleanly =
        trailing.is_empty() || trailing.starts_with("//") || trailing.starts_with("/*");

    if number == "100" && ends_cleanly {
        format!("#version {target}{rest}")
    } else {
        line.to_string()
    }
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn ident_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !(b.is_ascii_alphanumeric() || b == b'_'))
        .map_or(bytes.len(), |len| start + len)
}

fn line_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |len| start + len)
}

fn skip_horizontal_space(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .map_or(bytes.len(), |len| start + len)
}

fn find(bytes: &[u8], start: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(start..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|at| start + at)
}

/// End of the character starting at `pos`, so slicing stays on UTF-8 boundaries.
fn next_boundary(source: &str, pos: usize) -> usize {
    source[pos..]
        .chars()
        .next()
        .map_or(source.len(), |c| pos + c.len_utf8())
}
