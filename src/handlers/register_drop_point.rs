//! Handler for the RegisterDropPoint command.

use crate::commands::RegisterDropPoint;
use crate::error::Result;
use crate::geo::{DropOffPoint, GeoPoint};
use crate::validation::parse_coordinate;

/// Handle the RegisterDropPoint command.
///
/// Coordinates must parse as numbers; their range is not checked.
pub fn handle_register_drop_point(cmd: &RegisterDropPoint) -> Result<DropOffPoint> {
    let lat = parse_coordinate("latitude", &cmd.lat)?;
    let lon = parse_coordinate("longitude", &cmd.lon)?;

    Ok(DropOffPoint {
        name: cmd.name.trim().to_string(),
        address: cmd.address.trim().to_string(),
        location: GeoPoint::new(lat, lon),
    })
}
