#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Fields, FromFields, NmeaField, Result, parsing::strip_checksum};

/// Index of the first satellite ID slot.
const FIRST_SATELLITE_SLOT: usize = 3;

/// Number of satellite ID slots, used or not.
const SATELLITE_SLOTS: usize = 12;

/// GSA - GNSS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      14 15  16  17
///         | | |                       | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Selection mode, `M` (manual) or `A` (automatic)
    pub mode: String,
    /// Fix mode, `1` (no fix), `2` (2D) or `3` (3D)
    pub mode_fix: String,
    /// IDs of the satellites used in the fix, in transmission order, up to 12
    pub satellite_ids: heapless::Vec<u8, SATELLITE_SLOTS>,
    /// Position Dilution of Precision
    pub pdop: String,
    /// Horizontal Dilution of Precision
    pub hdop: String,
    /// Vertical Dilution of Precision
    pub vdop: String,
}

impl GSA {
    /// Sentence type identifier.
    pub const ID: &'static str = "GSA";
}

impl FromFields for GSA {
    const FIELD_COUNT: usize = 18;

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        fields.require(Self::FIELD_COUNT)?;

        let mode = String::decode_at(fields, 1, "mode")?;
        let mode_fix = String::decode_at(fields, 2, "mode_fix")?;

        let slots = (FIRST_SATELLITE_SLOT..FIRST_SATELLITE_SLOT + SATELLITE_SLOTS)
            .map(|index| <Option<u8>>::decode_at(fields, index, "satellite_id"))
            .collect::<Result<heapless::Vec<_, SATELLITE_SLOTS>>>()?;

        let pdop = String::decode_at(fields, 15, "pdop")?;
        let hdop = String::decode_at(fields, 16, "hdop")?;
        let vdop = strip_checksum(fields.get(17)?).to_owned();

        Ok(Self {
            mode,
            mode_fix,
            satellite_ids: slots.into_iter().flatten().collect(),
            pdop,
            hdop,
            vdop,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_gsa_decoding() {
        let gsa = GSA::decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39").unwrap();

        assert_eq!(gsa.mode, "A");
        assert_eq!(gsa.mode_fix, "3");
        assert_eq!(gsa.satellite_ids.len(), 5);
        assert_eq!(gsa.satellite_ids, [4, 5, 9, 12, 24]);
        assert_eq!(gsa.pdop, "2.5");
        assert_eq!(gsa.hdop, "1.3");
        assert_eq!(gsa.vdop, "2.1");
    }

    #[test]
    fn test_gsa_satellite_slots() {
        let cases: [(&str, &[u8]); 5] = [
            ("01,02,03,04,05,06,07,08,09,10,11,12", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]),
            (",,,,,,,,,,,", &[]),
            ("24,,,,,,,,,,,03", &[24, 3]),
            (",,,,,,,,,,,99", &[99]),
            ("23,21,19,17,15,13,11,09,07,05,03,01", &[23, 21, 19, 17, 15, 13, 11, 9, 7, 5, 3, 1]),
        ];

        for (slots, expected) in cases {
            let sentence = format!("$GPGSA,M,2,{slots},3.0,2.5,3.5");

            let gsa = GSA::decode(&sentence).unwrap();
            assert_eq!(gsa.satellite_ids, expected, "Failed: {slots:?}");
            assert_eq!(gsa.vdop, "3.5");
        }
    }

    #[test]
    fn test_gsa_invalid_satellite_id() {
        for slot in ["A1", "256", "-4", "4.0"] {
            let sentence = format!("$GPGSA,A,3,04,{slot},,,,,,,,,,,2.5,1.3,2.1*39");

            assert_eq!(
                GSA::decode(&sentence),
                Err(Error::invalid_field("satellite_id", slot)),
                "Failed: {slot:?}"
            );
        }
    }

    #[test]
    fn test_gsa_malformed() {
        // VDOP missing
        let result = GSA::decode("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3*39");
        assert_eq!(
            result,
            Err(Error::MalformedSentence {
                required: 18,
                found: 17
            })
        );

        let result = GSA::decode("$GPGSA,A,3");
        assert!(matches!(result, Err(Error::MalformedSentence { .. })));
    }

    #[test]
    fn test_gsa_extra_fields_are_ignored() {
        // NMEA 4.11 appends a system ID after VDOP
        let gsa = GSA::decode("$GNGSA,A,3,80,71,73,79,69,,,,,,,,1.83,1.09,1.47,2*0E").unwrap();

        assert_eq!(gsa.satellite_ids, [80, 71, 73, 79, 69]);
        assert_eq!(gsa.vdop, "1.47");
    }
}
