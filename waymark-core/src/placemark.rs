//! Places returned by search and dropped as pins.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AddressComponents, format_address};

/// A named location with its postal address.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{AddressComponents, Placemark};
///
/// let place = Placemark::new(
///     Coord { x: -77.0365, y: 38.8977 },
///     AddressComponents::new().with_city("Washington").with_region("DC"),
/// )
/// .with_name("White House");
///
/// assert_eq!(place.title(), "White House");
/// assert_eq!(place.formatted_address(), "Washington DC");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placemark {
    /// Display name, when the service supplies one.
    pub name: Option<String>,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Postal address fields.
    pub address: AddressComponents,
}

impl Placemark {
    /// Construct an unnamed placemark.
    #[must_use]
    pub const fn new(location: Coord<f64>, address: AddressComponents) -> Self {
        Self {
            name: None,
            location,
            address,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Single-line postal address.
    #[must_use]
    pub fn formatted_address(&self) -> String {
        format_address(&self.address)
    }

    /// Primary label: the name, or the formatted address when unnamed.
    #[must_use]
    pub fn title(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map_or_else(|| self.formatted_address(), str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn unnamed_placemark_uses_address_as_title(#[case] name: Option<&str>) {
        let mut place = Placemark::new(
            Coord { x: 0.0, y: 0.0 },
            AddressComponents::new()
                .with_street_number("4")
                .with_street_name("Melrose Place"),
        );
        place.name = name.map(str::to_owned);
        assert_eq!(place.title(), "4 Melrose Place, ");
    }
}
