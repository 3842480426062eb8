use serde::Deserialize;
use tracing::debug;

use crate::error::ProcessingError;

/// Field count the bracketed format commits to: year, month, day, time, value.
const BRACKETED_FIELDS: usize = 5;

/// On-wire rendering of one row. One datagram carries one rendered row in its
/// entirety; there is no binary framing and no schema versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// `[year, month, day, time, value]` — exactly five fields, no trailing
    /// framing.
    Bracketed,
    /// `f0,f1,...,fn` — every field the row has, one trailing newline.
    Delimited,
}

impl MessageFormat {
    /// Render a row into the bytes of a single datagram. Field content is
    /// passed through untouched; the bracketed format is the only place a
    /// field count is ever checked.
    pub fn render(&self, row: &[String]) -> Result<Vec<u8>, ProcessingError> {
        let text = match self {
            MessageFormat::Bracketed => {
                if row.len() != BRACKETED_FIELDS {
                    return Err(ProcessingError::FieldCount {
                        expected: BRACKETED_FIELDS,
                        got: row.len(),
                    });
                }
                format!("[{}]", row.join(", "))
            }
            MessageFormat::Delimited => format!("{}\n", row.join(",")),
        };
        debug!(message = %text.trim_end(), "prepared message");
        Ok(text.into_bytes())
    }

    /// Split a rendered message back into its fields: strip the framing this
    /// format added, then split on its delimiter. Consumers and the round-trip
    /// tests rely on this being lossless for field content.
    pub fn decode(&self, bytes: &[u8]) -> Vec<String> {
        let text = String::from_utf8_lossy(bytes);
        match self {
            MessageFormat::Bracketed => text
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split(", ")
                .map(str::to_string)
                .collect(),
            MessageFormat::Delimited => text
                .trim_end_matches('\n')
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn bracketed_renders_five_named_fields() -> anyhow::Result<()> {
        let bytes = MessageFormat::Bracketed.render(&row(&["2022", "1", "5", "07:00", "29.8"]))?;
        assert_eq!(bytes, b"[2022, 1, 5, 07:00, 29.8]");
        Ok(())
    }

    #[test]
    fn bracketed_rejects_wrong_field_count() {
        let err = MessageFormat::Bracketed
            .render(&row(&["2022", "1", "5"]))
            .unwrap_err();
        match err {
            ProcessingError::FieldCount { expected, got } => {
                assert_eq!(expected, 5);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn delimited_joins_any_width_with_trailing_newline() -> anyhow::Result<()> {
        let bytes = MessageFormat::Delimited.render(&row(&["a", "b", "c", "d", "e", "f"]))?;
        assert_eq!(bytes, b"a,b,c,d,e,f\n");
        let one = MessageFormat::Delimited.render(&row(&["solo"]))?;
        assert_eq!(one, b"solo\n");
        Ok(())
    }

    #[test]
    fn round_trip_preserves_fields_in_order() -> anyhow::Result<()> {
        let original = row(&["2022", "12", "31", "23:59", "-4.0"]);
        for format in [MessageFormat::Bracketed, MessageFormat::Delimited] {
            let bytes = format.render(&original)?;
            assert_eq!(format.decode(&bytes), original);
        }
        Ok(())
    }
}
