use crate::core::data::Quote;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fmt::{self, Write as _};
use std::io;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn render(&self, quotes: &[Quote]) -> String {
        match self {
            OutputFormat::Text => format_text(quotes),
            OutputFormat::Json => format_json(quotes),
            OutputFormat::Markdown => format_markdown(quotes),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    /// Exact, case-sensitive match against the format names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or(())
    }
}

/// Plain text: `Text\n   - Author\n`, numbered when there is more than one quote
pub fn format_text(quotes: &[Quote]) -> String {
    let numbered = quotes.len() > 1;
    let mut result = String::new();

    for (i, quote) in quotes.iter().enumerate() {
        if numbered {
            let _ = write!(result, "{}. ", i + 1);
        }
        let _ = write!(result, "{}\n   - {}\n", quote.text, quote.author);
    }

    result
}

/// Two-space indented JSON array of `{"Text", "Author"}` objects
///
/// `<`, `>`, `&`, U+2028 and U+2029 are written as `\u` escapes so the
/// output can be embedded in HTML or JavaScript unchanged.
pub fn format_json(quotes: &[Quote]) -> String {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter::new());
    if quotes.serialize(&mut serializer).is_err() {
        return "[]".to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| "[]".to_string())
}

/// Pretty printer that additionally escapes HTML-sensitive characters
struct HtmlSafeFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl HtmlSafeFormatter<'_> {
    fn new() -> Self {
        Self {
            pretty: PrettyFormatter::new(),
        }
    }
}

impl Formatter for HtmlSafeFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Markdown block quotes with an em-dash attribution line
pub fn format_markdown(quotes: &[Quote]) -> String {
    quotes
        .iter()
        .map(|quote| format!("> {}\n\n\u{2014} {}\n\n", quote.text, quote.author))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be_and_code() -> Vec<Quote> {
        vec![Quote::new("Be", "Gandhi"), Quote::new("Code", "Unknown")]
    }

    #[test]
    fn test_format_text_single() {
        let quotes = vec![Quote::new("Be", "Gandhi")];
        assert_eq!(format_text(&quotes), "Be\n   - Gandhi\n");
    }

    #[test]
    fn test_format_text_numbers_multiple() {
        assert_eq!(
            format_text(&be_and_code()),
            "1. Be\n   - Gandhi\n2. Code\n   - Unknown\n"
        );
    }

    #[test]
    fn test_format_text_empty_fields() {
        assert_eq!(format_text(&[Quote::new("", "Someone")]), "\n   - Someone\n");
        assert_eq!(
            format_text(&[Quote::new("Anonymous quote", "")]),
            "Anonymous quote\n   - \n"
        );
    }

    #[test]
    fn test_format_markdown() {
        assert_eq!(
            format_markdown(&[Quote::new("Be", "Gandhi")]),
            "> Be\n\n\u{2014} Gandhi\n\n"
        );
        assert_eq!(
            format_markdown(&be_and_code()),
            "> Be\n\n— Gandhi\n\n> Code\n\n— Unknown\n\n"
        );
    }

    #[test]
    fn test_format_json_layout() {
        let expected = "[\n  {\n    \"Text\": \"Be\",\n    \"Author\": \"Gandhi\"\n  }\n]";
        assert_eq!(format_json(&[Quote::new("Be", "Gandhi")]), expected);
    }

    #[test]
    fn test_format_json_round_trip() {
        let quotes = vec![
            Quote::new("Be", "Gandhi"),
            Quote::new("Quote with \"quotes\" and \nnewline", "Test"),
            Quote::new("Code", "Unknown"),
        ];
        let parsed: Vec<Quote> = serde_json::from_str(&format_json(&quotes)).unwrap();
        assert_eq!(parsed, quotes);
    }

    #[test]
    fn test_format_json_escapes_html_characters() {
        let quotes = vec![Quote::new("Tom & <Jerry>", "A\u{2028}B\u{2029}C")];
        let output = format_json(&quotes);

        assert!(output.contains(r#""Text": "Tom \u0026 \u003cJerry\u003e""#));
        assert!(output.contains(r#""Author": "A\u2028B\u2029C""#));
        assert!(!output.contains('&'));

        let parsed: Vec<Quote> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, quotes);
    }

    #[test]
    fn test_format_json_keeps_standard_escapes() {
        let output = format_json(&[Quote::new("say \"hi\"\n\tnow", "back\\slash")]);
        assert!(output.contains(r#""Text": "say \"hi\"\n\tnow""#));
        assert!(output.contains(r#""Author": "back\\slash""#));
    }

    #[test]
    fn test_formatters_empty_input() {
        assert_eq!(format_text(&[]), "");
        assert_eq!(format_markdown(&[]), "");
        assert_eq!(format_json(&[]), "[]");
    }

    #[test]
    fn test_output_format_from_str_is_exact() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("JSON".parse::<OutputFormat>(), Err(()));
        assert_eq!("xml".parse::<OutputFormat>(), Err(()));
        assert_eq!(" text".parse::<OutputFormat>(), Err(()));
    }

    #[test]
    fn test_render_dispatches_by_format() {
        let quotes = be_and_code();
        assert_eq!(OutputFormat::Text.render(&quotes), format_text(&quotes));
        assert_eq!(OutputFormat::Json.render(&quotes), format_json(&quotes));
        assert_eq!(OutputFormat::Markdown.render(&quotes), format_markdown(&quotes));
    }
}
