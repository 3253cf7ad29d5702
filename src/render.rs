use std::io::{self, Write};

use colored::Color;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::output::{ansi_fg, Output, ANSI_RESET};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Found {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub plain: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<SearchData>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    found: Option<Vec<Found>>,
}

/// Extracts the `data.found` pairs; absent or null levels count as no results.
pub fn found(body: &[u8]) -> Result<Vec<Found>> {
    let response: SearchResponse = serde_json::from_slice(body).map_err(Error::Decode)?;
    Ok(response
        .data
        .and_then(|data| data.found)
        .unwrap_or_default())
}

pub fn write_found<W: Write>(out: &mut W, found: &[Found]) -> io::Result<()> {
    for entry in found {
        writeln!(out, "{}:{}", entry.hash, entry.plain)?;
    }
    Ok(())
}

pub fn write_raw<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")
}

pub fn write_pretty<W: Write>(out: &mut W, body: &[u8], output: &Output) -> Result<()> {
    let value: Value = serde_json::from_slice(body).map_err(Error::Decode)?;
    let rendered = pretty(&value, output)?;
    writeln!(out, "{}", rendered).map_err(Error::Stdout)
}

pub fn pretty(value: &Value, output: &Output) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = JsonFormatter::new(Palette::for_output(output));
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(Error::Encode)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    pub key: Option<Color>,
    pub string: Option<Color>,
    pub number: Option<Color>,
    pub boolean: Option<Color>,
    pub null: Option<Color>,
}

impl Palette {
    /// Keys are blue to match the rest of the tool's output, unlike colorjson's
    /// uncolored keys.
    pub fn colored() -> Self {
        Self {
            key: Some(Color::Blue),
            string: Some(Color::Green),
            number: Some(Color::Cyan),
            boolean: Some(Color::Yellow),
            null: Some(Color::Magenta),
        }
    }

    pub fn for_output(output: &Output) -> Self {
        if output.color {
            Self::colored()
        } else {
            Self::default()
        }
    }
}

/// Four-space pretty printer that wraps scalars and keys in ANSI colors.
pub struct JsonFormatter<'a> {
    inner: PrettyFormatter<'a>,
    palette: Palette,
    in_key: bool,
}

impl<'a> JsonFormatter<'a> {
    pub fn new(palette: Palette) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
            palette,
            in_key: false,
        }
    }

    fn open<W: ?Sized + Write>(&self, writer: &mut W, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) => writer.write_all(ansi_fg(color).as_bytes()),
            None => Ok(()),
        }
    }

    fn close<W: ?Sized + Write>(&self, writer: &mut W, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(_) => writer.write_all(ANSI_RESET.as_bytes()),
            None => Ok(()),
        }
    }

    fn string_color(&self) -> Option<Color> {
        if self.in_key {
            self.palette.key
        } else {
            self.palette.string
        }
    }
}

impl Formatter for JsonFormatter<'_> {
    fn write_null<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, self.palette.null)?;
        self.inner.write_null(writer)?;
        self.close(writer, self.palette.null)
    }

    fn write_bool<W: ?Sized + Write>(&mut self, writer: &mut W, value: bool) -> io::Result<()> {
        self.open(writer, self.palette.boolean)?;
        self.inner.write_bool(writer, value)?;
        self.close(writer, self.palette.boolean)
    }

    fn write_i64<W: ?Sized + Write>(&mut self, writer: &mut W, value: i64) -> io::Result<()> {
        self.open(writer, self.palette.number)?;
        self.inner.write_i64(writer, value)?;
        self.close(writer, self.palette.number)
    }

    fn write_u64<W: ?Sized + Write>(&mut self, writer: &mut W, value: u64) -> io::Result<()> {
        self.open(writer, self.palette.number)?;
        self.inner.write_u64(writer, value)?;
        self.close(writer, self.palette.number)
    }

    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        self.open(writer, self.palette.number)?;
        self.inner.write_f64(writer, value)?;
        self.close(writer, self.palette.number)
    }

    fn begin_string<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, self.string_color())?;
        self.inner.begin_string(writer)
    }

    fn end_string<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_string(writer)?;
        self.close(writer, self.string_color())
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)?;
        self.in_key = true;
        Ok(())
    }

    fn end_object_key<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.in_key = false;
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plain() -> Output {
        Output::default()
    }

    fn colored() -> Output {
        Output {
            color: true,
            quiet: false,
        }
    }

    #[test]
    fn test_found_pairs_in_service_order() {
        let body = br#"{"data":{"found":[
            {"hash":"098f6bcd4621d373cade4e832627b4f6","plain":"test"},
            {"hash":"5f4dcc3b5aa765d61d8327deb882cf99","plain":"password"}
        ]}}"#;
        let found = found(body).unwrap();

        let mut out = Vec::new();
        write_found(&mut out, &found).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "098f6bcd4621d373cade4e832627b4f6:test\n5f4dcc3b5aa765d61d8327deb882cf99:password\n"
        );
    }

    #[test]
    fn test_found_empty_list() {
        assert!(found(br#"{"data":{"found":[]}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_found_missing_or_null_levels() {
        assert!(found(br#"{}"#).unwrap().is_empty());
        assert!(found(br#"{"data":null}"#).unwrap().is_empty());
        assert!(found(br#"{"data":{"found":null}}"#).unwrap().is_empty());
        assert!(found(br#"{"message":"Unauthenticated."}"#).unwrap().is_empty());
    }

    #[test]
    fn test_found_ignores_extra_fields() {
        let body = br#"{"data":{"found":[{"hash":"h","plain":"p","algorithm":["MD5"]}],"left":[]}}"#;
        assert_eq!(
            found(body).unwrap(),
            vec![Found {
                hash: "h".to_string(),
                plain: "p".to_string()
            }]
        );
    }

    #[test]
    fn test_found_null_fields_are_empty() {
        let body = br#"{"data":{"found":[{"hash":"h1","plain":"p1"},{"hash":"h2","plain":null}]}}"#;
        let found = found(body).unwrap();

        let mut out = Vec::new();
        write_found(&mut out, &found).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "h1:p1\nh2:\n");
    }

    #[test]
    fn test_found_invalid_json() {
        assert!(matches!(found(b"<html>"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_write_raw_is_verbatim() {
        let mut out = Vec::new();
        write_raw(&mut out, b"not {json").unwrap();
        assert_eq!(out, b"not {json\n");
    }

    #[test]
    fn test_pretty_uses_four_space_indent() {
        let value = json!({"data": {"found": [1, true, null]}});
        let rendered = pretty(&value, &plain()).unwrap();
        assert_eq!(
            rendered,
            "{\n    \"data\": {\n        \"found\": [\n            1,\n            true,\n            null\n        ]\n    }\n}"
        );
    }

    #[test]
    fn test_pretty_empty_containers() {
        let value = json!({"a": [], "b": {}});
        let rendered = pretty(&value, &plain()).unwrap();
        assert_eq!(rendered, "{\n    \"a\": [],\n    \"b\": {}\n}");
    }

    #[test]
    fn test_pretty_colors_by_role() {
        let value = json!({"k": "v", "n": 2, "b": false, "z": null});
        let rendered = pretty(&value, &colored()).unwrap();

        assert!(rendered.contains("\x1b[34m\"k\"\x1b[0m: \x1b[32m\"v\"\x1b[0m"));
        assert!(rendered.contains("\x1b[36m2\x1b[0m"));
        assert!(rendered.contains("\x1b[33mfalse\x1b[0m"));
        assert!(rendered.contains("\x1b[35mnull\x1b[0m"));
    }

    #[test]
    fn test_pretty_escapes_strings() {
        let value = json!({"plain": "a\"b\n"});
        let rendered = pretty(&value, &plain()).unwrap();
        assert_eq!(rendered, "{\n    \"plain\": \"a\\\"b\\n\"\n}");
    }

    #[test]
    fn test_write_pretty_rejects_invalid_json() {
        let mut out = Vec::new();
        let result = write_pretty(&mut out, b"oops", &plain());
        assert!(matches!(result, Err(Error::Decode(_))));
        assert!(out.is_empty());
    }
}
