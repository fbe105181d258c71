#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decoder, FromFields,
    sentences::{Latitude, Longitude, PositionFixIndicator},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Only fields 1 to 9 are decoded. Time, dilution and altitude stay raw text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, FromFields)]
pub struct GGA {
    #[nmea(index = 1)]
    /// UTC time of the fix, `hhmmss.sss`
    pub time: String,
    #[nmea(index = 2)]
    /// Latitude and hemisphere
    pub latitude: Latitude,
    #[nmea(index = 4)]
    /// Longitude and hemisphere
    pub longitude: Longitude,
    #[nmea(index = 6, name = "position_fix_indicator")]
    /// How the fix was obtained
    pub fix_indicator: PositionFixIndicator,
    #[nmea(index = 7)]
    /// Number of satellites in use
    pub satellite_count: u8,
    #[nmea(index = 8)]
    /// Horizontal Dilution of Precision
    pub hdop: String,
    #[nmea(index = 9)]
    /// Antenna altitude above mean sea level, in meters
    pub altitude: String,
}

impl GGA {
    /// Sentence type identifier.
    pub const ID: &'static str = "GGA";

    /// Parses [`GGA::time`] into a time of day.
    #[cfg(feature = "time")]
    pub fn fix_time(&self) -> nmea0183_decoder::Result<time::Time> {
        nmea0183_decoder::utc::parse_utc_time("time", &self.time)
    }
}
