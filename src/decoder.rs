//! # Sentence Decoder
//!
//! [`Decoder`] is the configurable entry point: it settles the line ending according to
//! its [`LineEndingMode`], then hands the sentence to the record decoders.

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    combinator::{all_consuming, opt},
};

use crate::{Error, FromFields, NmeaSentence, Result, SentenceType};

/// Defines how the decoder should handle CRLF line endings.
///
/// Sentences read from a serial port or log file end with `\r\n`, while sentences that
/// went through a line reader usually do not.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// CRLF must not be present.
    ///
    /// A trailing `\r\n` would otherwise end up in the last field of the record.
    Forbidden,

    /// A trailing CRLF is removed if present.
    Optional,

    /// The sentence must end with CRLF, which is removed before decoding.
    Required,
}

/// A configured NMEA 0183 sentence decoder.
///
/// The decoder holds no state between calls: every call decodes one complete sentence.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Decoder, LineEndingMode, NmeaSentence, PositionFixIndicator};
///
/// let decoder = Decoder::builder()
///     .line_ending_mode(LineEndingMode::Required)
///     .build();
///
/// let sentence = decoder.decode(
///     "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E\r\n",
/// )?;
/// let NmeaSentence::GGA(gga) = sentence else {
///     unreachable!()
/// };
/// assert_eq!(gga.fix_indicator, PositionFixIndicator::GpsSps);
///
/// // the line ending is mandatory here
/// assert!(decoder.decode("$GPGLL,1929.045,S,02410.506,E,184353.07,A*33").is_err());
/// # Ok::<(), nmea0183_decoder::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    line_ending_mode: LineEndingMode,
}

impl Decoder {
    /// Creates a decoder with the default settings.
    ///
    /// The line ending mode is [`LineEndingMode::Forbidden`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts configuring a decoder.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    /// The configured line ending mode.
    pub fn line_ending_mode(&self) -> LineEndingMode {
        self.line_ending_mode
    }

    /// Decodes a sentence, selecting the decoder from its sentence ID field.
    pub fn decode(&self, sentence: &str) -> Result<NmeaSentence> {
        log::trace!("decoding {sentence:?}");

        self.sentence_body(sentence)
            .and_then(NmeaSentence::decode)
            .inspect_err(|e| log::debug!("rejected {sentence:?}: {e}"))
    }

    /// Decodes a sentence as `sentence_type`, ignoring its sentence ID field.
    pub fn decode_as(&self, sentence_type: SentenceType, sentence: &str) -> Result<NmeaSentence> {
        log::trace!("decoding {sentence:?} as {sentence_type}");

        self.sentence_body(sentence)
            .and_then(|body| NmeaSentence::decode_as(sentence_type, body))
            .inspect_err(|e| log::debug!("rejected {sentence:?} as {sentence_type}: {e}"))
    }

    /// Decodes a sentence straight into the record type `T`.
    ///
    /// ```rust
    /// use nmea0183_decoder::{Decoder, GSA};
    ///
    /// let gsa: GSA = Decoder::new().decode_record("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39")?;
    /// assert_eq!(gsa.satellite_ids, [4, 5, 9, 12, 24]);
    /// # Ok::<(), nmea0183_decoder::Error>(())
    /// ```
    pub fn decode_record<T: FromFields>(&self, sentence: &str) -> Result<T> {
        log::trace!("decoding {sentence:?} as {}", std::any::type_name::<T>());

        self.sentence_body(sentence)
            .and_then(T::decode)
            .inspect_err(|e| log::debug!("rejected {sentence:?}: {e}"))
    }

    fn sentence_body<'a>(&self, sentence: &'a str) -> Result<&'a str> {
        crlf(self.line_ending_mode, sentence)
    }
}

/// Builder for [`Decoder`].
///
/// ```rust
/// use nmea0183_decoder::{Decoder, LineEndingMode};
///
/// let decoder = Decoder::builder()
///     .line_ending_mode(LineEndingMode::Optional)
///     .build();
///
/// assert!(decoder.decode("$GPGLL,4916.45,N,12311.12,W,225444,A\r\n").is_ok());
/// assert!(decoder.decode("$GPGLL,4916.45,N,12311.12,W,225444,A").is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct DecoderBuilder {
    line_ending_mode: LineEndingMode,
}

impl DecoderBuilder {
    /// Creates a builder with the default settings.
    ///
    /// The default settings are:
    /// - Line ending mode: [`LineEndingMode::Forbidden`]
    pub fn new() -> Self {
        DecoderBuilder {
            line_ending_mode: LineEndingMode::Forbidden,
        }
    }

    /// Sets the line ending mode.
    ///
    /// # Arguments
    ///
    /// * `mode` - The desired line ending mode:
    ///   - [`LineEndingMode::Forbidden`]: Sentence must not contain `\r\n`
    ///   - [`LineEndingMode::Optional`]: A trailing `\r\n` is removed if present
    ///   - [`LineEndingMode::Required`]: Sentence must end with `\r\n`
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the decoder.
    pub fn build(self) -> Decoder {
        Decoder {
            line_ending_mode: self.line_ending_mode,
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        DecoderBuilder::new()
    }
}

/// Removes the line ending from `sentence` as `mode` dictates.
///
/// A CRLF that is not at the very end of the sentence is always an error.
fn crlf(mode: LineEndingMode, sentence: &str) -> Result<&str> {
    let result: IResult<&str, Option<&str>> = opt(take_until("\r\n")).parse(sentence);
    let Ok((line_ending, body)) = result else {
        return Err(Error::InvalidLineEnding(mode));
    };

    match (mode, body) {
        (LineEndingMode::Forbidden, None) | (LineEndingMode::Optional, None) => Ok(sentence),
        (LineEndingMode::Optional, Some(body)) | (LineEndingMode::Required, Some(body)) => {
            let result: IResult<&str, &str> = all_consuming(tag("\r\n")).parse(line_ending);
            result
                .map(|_| body)
                .map_err(|_| Error::InvalidLineEnding(mode))
        }
        (LineEndingMode::Forbidden, Some(_)) | (LineEndingMode::Required, None) => {
            Err(Error::InvalidLineEnding(mode))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GLL;

    const SENTENCE: &str = "$GPGLL,1929.045,S,02410.506,E,184353.07,A*33";

    #[test]
    fn test_crlf() {
        let cases = [
            (LineEndingMode::Forbidden, "12345", Ok("12345")),
            (LineEndingMode::Forbidden, "12345\r\n", Err(())),
            (LineEndingMode::Forbidden, "123\r\n45", Err(())),
            (LineEndingMode::Optional, "12345", Ok("12345")),
            (LineEndingMode::Optional, "12345\r\n", Ok("12345")),
            (LineEndingMode::Optional, "12345\r\n\r\n", Err(())),
            (LineEndingMode::Optional, "12345\n", Ok("12345\n")),
            (LineEndingMode::Required, "12345\r\n", Ok("12345")),
            (LineEndingMode::Required, "\r\n", Ok("")),
            (LineEndingMode::Required, "12345", Err(())),
            (LineEndingMode::Required, "12345\n", Err(())),
            (LineEndingMode::Required, "123\r\n45", Err(())),
        ];

        for (mode, input, expected) in cases {
            assert_eq!(
                crlf(mode, input),
                expected.map_err(|_| Error::InvalidLineEnding(mode)),
                "Failed: {mode:?} {input:?}"
            );
        }
    }

    #[test]
    fn test_builder_defaults() {
        assert_eq!(Decoder::new(), Decoder::builder().build());
        assert_eq!(Decoder::new(), DecoderBuilder::default().build());
        assert_eq!(Decoder::new().line_ending_mode(), LineEndingMode::Forbidden);

        let decoder = Decoder::builder()
            .line_ending_mode(LineEndingMode::Required)
            .build();
        assert_eq!(decoder.line_ending_mode(), LineEndingMode::Required);
    }

    #[test]
    fn test_decode_line_endings() {
        let with_crlf = format!("{SENTENCE}\r\n");

        let decoder = Decoder::new();
        assert!(decoder.decode(SENTENCE).is_ok());
        assert_eq!(
            decoder.decode(&with_crlf),
            Err(Error::InvalidLineEnding(LineEndingMode::Forbidden))
        );

        let decoder = Decoder::builder()
            .line_ending_mode(LineEndingMode::Optional)
            .build();
        assert_eq!(decoder.decode(SENTENCE), decoder.decode(&with_crlf));

        let decoder = Decoder::builder()
            .line_ending_mode(LineEndingMode::Required)
            .build();
        assert_eq!(decoder.decode(&with_crlf), NmeaSentence::decode(SENTENCE));
        assert_eq!(
            decoder.decode(SENTENCE),
            Err(Error::InvalidLineEnding(LineEndingMode::Required))
        );
    }

    #[test]
    fn test_decode_as_and_record() {
        let decoder = Decoder::new();

        // the ID field is not consulted when the type is given
        let sentence = "$XXYYY,1929.045,S,02410.506,E,184353.07,A";
        assert!(matches!(
            decoder.decode_as(SentenceType::GLL, sentence),
            Ok(NmeaSentence::GLL(_))
        ));
        assert_eq!(
            decoder.decode(sentence),
            Err(Error::UnsupportedSentenceType("$XXYYY".to_owned()))
        );

        let gll: GLL = decoder.decode_record(SENTENCE).unwrap();
        assert_eq!(Ok(NmeaSentence::GLL(gll)), decoder.decode(SENTENCE));
    }
}
