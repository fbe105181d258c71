#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Fields, FromField, FromFields, NmeaField, Result,
    parsing::strip_checksum,
    sentences::{Latitude, Longitude, Status},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// The status field is optional: older receivers end the sentence after the time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GLL {
    /// UTC time of the position, `hhmmss.ss`
    pub time: String,
    /// Latitude and hemisphere
    pub latitude: Latitude,
    /// Longitude and hemisphere
    pub longitude: Longitude,
    /// Status Mode Indicator, if transmitted
    pub status: Option<Status>,
}

impl GLL {
    /// Sentence type identifier.
    pub const ID: &'static str = "GLL";

    /// Parses [`GLL::time`] into a time of day.
    #[cfg(feature = "time")]
    pub fn fix_time(&self) -> Result<time::Time> {
        crate::utc::parse_utc_time("time", &self.time)
    }
}

impl FromFields for GLL {
    const FIELD_COUNT: usize = 6;

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        fields.require(Self::FIELD_COUNT)?;

        let latitude = Latitude::decode_at(fields, 1, "latitude")?;
        let longitude = Longitude::decode_at(fields, 3, "longitude")?;
        let time = strip_checksum(fields.get(5)?).to_owned();
        let status = match fields.get(6) {
            Ok(status) => <Option<Status>>::from_field("status", strip_checksum(status))?,
            Err(_) => None,
        };

        Ok(Self {
            time,
            latitude,
            longitude,
            status,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        Error,
        sentences::{HorizontalHemisphere, VerticalHemisphere},
    };

    #[test]
    fn test_gll_decoding() {
        let gll = GLL::decode("$GPGLL,1929.045,S,02410.506,E,184353.07,A*33").unwrap();

        assert_eq!(gll.time, "184353.07");
        assert_eq!(gll.latitude.value, "1929.045");
        assert_eq!(gll.latitude.hemisphere, VerticalHemisphere::South);
        assert_eq!(gll.longitude.value, "02410.506");
        assert_eq!(gll.longitude.hemisphere, HorizontalHemisphere::East);
        assert_eq!(gll.status, Some(Status::Valid));
    }

    #[test]
    fn test_gll_status() {
        let cases = [
            ("", None),
            (",A", Some(Status::Valid)),
            (",V*2C", Some(Status::Invalid)),
            (",", None),
            (",*2C", None),
            (",A,A", Some(Status::Valid)),
        ];

        for (input, status) in cases {
            let sentence = format!("$GPGLL,4404.14012,N,12118.85993,W,001037.00{input}");

            let result = GLL::decode(&sentence);
            assert_eq!(
                result.as_ref().map(|gll| gll.status),
                Ok(status),
                "Failed: {input:?}\n\t{result:?}"
            );
        }

        let result = GLL::decode("$GPGLL,4404.14012,N,12118.85993,W,001037.00,Z");
        assert_eq!(result, Err(Error::invalid_field("status", "Z")));
    }

    #[test]
    fn test_gll_time_without_status() {
        let gll = GLL::decode("$GPGLL,4916.45,N,12311.12,W,225444*31").unwrap();
        assert_eq!(gll.time, "225444");
        assert_eq!(gll.status, None);
    }

    #[test]
    fn test_gll_malformed() {
        let cases = [
            "$GPGLL",
            "$GPGLL,1929.045,S,02410.506,E",
            "$GPGLL,1929.045,S,02410.506*33",
        ];

        for sentence in cases {
            let result = GLL::decode(sentence);
            assert!(
                matches!(result, Err(Error::MalformedSentence { required: 6, .. })),
                "Failed: {sentence:?}\n\t{result:?}"
            );
        }
    }

    #[test]
    fn test_gll_invalid_hemisphere() {
        let result = GLL::decode("$GPGLL,1929.045,X,02410.506,E,184353.07,A");
        assert_eq!(result, Err(Error::invalid_field("vertical_hemisphere", "X")));

        let result = GLL::decode("$GPGLL,1929.045,S,02410.506,N,184353.07,A");
        assert_eq!(result, Err(Error::invalid_field("horizontal_hemisphere", "N")));
    }
}
