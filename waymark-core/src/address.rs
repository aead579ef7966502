//! Human-readable postal addresses from sparse geocoder fields.
//!
//! Geocoders rarely return every component of an address. The formatter
//! below joins whatever is present with fixed separator rules so a result can
//! be shown as a single line, e.g. `"4 Melrose Place, Los Angeles CA"`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structured address fields as supplied by a geocoding service.
///
/// Every field is optional and independent of the others. A field holding an
/// empty string is treated exactly like a missing one.
///
/// # Examples
/// ```
/// use waymark_core::AddressComponents;
///
/// let address = AddressComponents::new()
///     .with_street_number("4")
///     .with_street_name("Melrose Place")
///     .with_city("Los Angeles")
///     .with_region("CA");
/// assert_eq!(address.format(), "4 Melrose Place, Los Angeles CA");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddressComponents {
    /// House or building number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub street_number: Option<String>,
    /// Street or thoroughfare name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub street_name: Option<String>,
    /// Locality.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<String>,
    /// County or other sub-administrative area.
    ///
    /// Carried through from geocoders but never printed by
    /// [`format_address`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_region: Option<String>,
    /// State, province or other administrative area.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
}

impl AddressComponents {
    /// Construct an address with every field absent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            street_number: None,
            street_name: None,
            city: None,
            sub_region: None,
            region: None,
        }
    }

    /// Set the house number.
    #[must_use]
    pub fn with_street_number(mut self, value: impl Into<String>) -> Self {
        self.street_number = Some(value.into());
        self
    }

    /// Set the street name.
    #[must_use]
    pub fn with_street_name(mut self, value: impl Into<String>) -> Self {
        self.street_name = Some(value.into());
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Set the county or sub-administrative area.
    #[must_use]
    pub fn with_sub_region(mut self, value: impl Into<String>) -> Self {
        self.sub_region = Some(value.into());
        self
    }

    /// Set the state or province.
    #[must_use]
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    /// Format the address on a single line.
    ///
    /// Shorthand for [`format_address`].
    #[must_use]
    pub fn format(&self) -> String {
        format_address(self)
    }
}

/// Return the field's text when it is present and non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Join address components into a single display line.
///
/// Components are emitted in the order street number, street name, city,
/// region. Separators depend on which components are present:
///
/// - a space between street number and street name when both are present;
/// - `", "` between the street and the city/region groups when each group
///   has at least one present field;
/// - a space between city and region when both are present, otherwise
///   `", "`. This last separator is written even when city and region are
///   both absent, so an address with no fields at all formats as `", "`.
///
/// The function is total: it never fails and never inspects
/// [`AddressComponents::sub_region`].
///
/// # Examples
/// ```
/// use waymark_core::{AddressComponents, format_address};
///
/// let address = AddressComponents::new().with_city("Washington").with_region("DC");
/// assert_eq!(format_address(&address), "Washington DC");
///
/// assert_eq!(format_address(&AddressComponents::new()), ", ");
/// ```
#[must_use]
pub fn format_address(components: &AddressComponents) -> String {
    let number = present(&components.street_number);
    let street = present(&components.street_name);
    let city = present(&components.city);
    let region = present(&components.region);

    let number_gap = if number.is_some() && street.is_some() {
        " "
    } else {
        ""
    };
    let has_street = number.is_some() || street.is_some();
    let has_place = city.is_some() || region.is_some();
    let group_gap = if has_street && has_place { ", " } else { "" };
    let place_gap = if city.is_some() && region.is_some() {
        " "
    } else {
        ", "
    };

    [
        number.unwrap_or_default(),
        number_gap,
        street.unwrap_or_default(),
        group_gap,
        city.unwrap_or_default(),
        place_gap,
        region.unwrap_or_default(),
    ]
    .concat()
}

/// Subtitle for a dropped pin: `"{city}, {region}"`.
///
/// Returns `None` unless both city and region are present.
///
/// # Examples
/// ```
/// use waymark_core::{AddressComponents, pin_subtitle};
///
/// let address = AddressComponents::new().with_city("Los Angeles").with_region("CA");
/// assert_eq!(pin_subtitle(&address).as_deref(), Some("Los Angeles, CA"));
/// assert_eq!(pin_subtitle(&AddressComponents::new()), None);
/// ```
#[must_use]
pub fn pin_subtitle(components: &AddressComponents) -> Option<String> {
    let city = present(&components.city)?;
    let region = present(&components.region)?;
    Some(format!("{city}, {region}"))
}
