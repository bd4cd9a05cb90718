//! Unit converter
//!
//! Linear categories convert through a base unit (meter, kilogram, liter,
//! square meter) by multiplying with the source factor and dividing by the
//! target factor. Temperature goes through Celsius.

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    /// Size in base units. Unused for temperature.
    pub factor: f64,
}

const fn unit(id: &'static str, name: &'static str, symbol: &'static str, factor: f64) -> Unit {
    Unit {
        id,
        name,
        symbol,
        factor,
    }
}

const LENGTH: &[Unit] = &[
    unit("meter", "Meter", "m", 1.0),
    unit("kilometer", "Kilometer", "km", 1000.0),
    unit("centimeter", "Centimeter", "cm", 0.01),
    unit("millimeter", "Millimeter", "mm", 0.001),
    unit("inch", "Inch", "in", 0.0254),
    unit("feet", "Feet", "ft", 0.3048),
    unit("yard", "Yard", "yd", 0.9144),
    unit("mile", "Mile", "mi", 1609.34),
];

const WEIGHT: &[Unit] = &[
    unit("kilogram", "Kilogram", "kg", 1.0),
    unit("gram", "Gram", "g", 0.001),
    unit("pound", "Pound", "lb", 0.453592),
    unit("ounce", "Ounce", "oz", 0.0283495),
    unit("ton", "Ton", "t", 1000.0),
    unit("stone", "Stone", "st", 6.35029),
];

const TEMPERATURE: &[Unit] = &[
    unit("celsius", "Celsius", "c", 1.0),
    unit("fahrenheit", "Fahrenheit", "f", 1.0),
    unit("kelvin", "Kelvin", "k", 1.0),
];

const VOLUME: &[Unit] = &[
    unit("liter", "Liter", "l", 1.0),
    unit("milliliter", "Milliliter", "ml", 0.001),
    unit("gallon", "Gallon (US)", "gal", 3.78541),
    unit("quart", "Quart", "qt", 0.946353),
    unit("pint", "Pint", "pt", 0.473176),
    unit("cup", "Cup", "cup", 0.236588),
    unit("fluid_ounce", "Fluid Ounce", "floz", 0.0295735),
];

const AREA: &[Unit] = &[
    unit("square_meter", "Square Meter", "m2", 1.0),
    unit("square_kilometer", "Square Kilometer", "km2", 1_000_000.0),
    unit("square_centimeter", "Square Centimeter", "cm2", 0.0001),
    unit("square_inch", "Square Inch", "in2", 0.00064516),
    unit("square_feet", "Square Feet", "ft2", 0.092903),
    unit("acre", "Acre", "ac", 4046.86),
    unit("hectare", "Hectare", "ha", 10000.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Area,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Volume => "volume",
            UnitCategory::Area => "area",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "length" | "distance" => Some(UnitCategory::Length),
            "weight" | "mass" => Some(UnitCategory::Weight),
            "temperature" | "temp" => Some(UnitCategory::Temperature),
            "volume" => Some(UnitCategory::Volume),
            "area" => Some(UnitCategory::Area),
            _ => None,
        }
    }

    pub fn units(&self) -> &'static [Unit] {
        match self {
            UnitCategory::Length => LENGTH,
            UnitCategory::Weight => WEIGHT,
            UnitCategory::Temperature => TEMPERATURE,
            UnitCategory::Volume => VOLUME,
            UnitCategory::Area => AREA,
        }
    }

    /// Find a unit by id, name or symbol, ignoring case, spaces and hyphens
    pub fn unit(&self, key: &str) -> Result<&'static Unit, ToolError> {
        let wanted = normalize(key);
        self.units()
            .iter()
            .find(|u| normalize(u.id) == wanted || normalize(u.name) == wanted || u.symbol == wanted)
            .ok_or_else(|| ToolError::UnknownUnit {
                category: self.as_str().to_string(),
                unit: key.to_string(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '(' | ')'))
        .collect()
}

pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64, ToolError> {
    let from = category.unit(from)?;
    let to = category.unit(to)?;

    if category == UnitCategory::Temperature {
        return Ok(convert_temperature(value, from.id, to.id));
    }
    Ok(value * from.factor / to.factor)
}

fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return value;
    }

    let celsius = match from {
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => value,
    };

    match to {
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + 273.15,
        _ => celsius,
    }
}

/// Parse the raw input value
pub fn parse_value(raw: &str) -> Result<f64, ToolError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ToolError::NotANumber(raw.to_string()))
}

/// Six decimals with trailing zeros (and a bare point) removed
pub fn format_value(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_fmt(category: UnitCategory, value: f64, from: &str, to: &str) -> String {
        format_value(convert(category, value, from, to).unwrap())
    }

    #[test]
    fn test_length() {
        assert_eq!(convert_fmt(UnitCategory::Length, 1.0, "meter", "feet"), "3.28084");
        assert_eq!(convert_fmt(UnitCategory::Length, 1.0, "mile", "km"), "1.60934");
        assert_eq!(convert_fmt(UnitCategory::Length, 12.0, "in", "ft"), "1");
    }

    #[test]
    fn test_weight_and_area() {
        assert_eq!(convert_fmt(UnitCategory::Weight, 1.0, "kilogram", "pound"), "2.204624");
        assert_eq!(convert_fmt(UnitCategory::Area, 1.0, "hectare", "square meter"), "10000");
    }

    #[test]
    fn test_temperature() {
        assert_eq!(convert_fmt(UnitCategory::Temperature, 100.0, "celsius", "fahrenheit"), "212");
        assert_eq!(convert_fmt(UnitCategory::Temperature, 32.0, "f", "c"), "0");
        assert_eq!(convert_fmt(UnitCategory::Temperature, 0.0, "kelvin", "celsius"), "-273.15");
        assert_eq!(convert_fmt(UnitCategory::Temperature, 5.0, "kelvin", "kelvin"), "5");
    }

    #[test]
    fn test_unit_lookup() {
        let cat = UnitCategory::Volume;
        assert_eq!(cat.unit("Gallon (US)").unwrap().id, "gallon");
        assert_eq!(cat.unit("fluid-ounce").unwrap().id, "fluid_ounce");
        assert_eq!(cat.unit("ML").unwrap().id, "milliliter");
        let err = cat.unit("meter").unwrap_err();
        assert_eq!(err.to_string(), "Unknown volume unit: meter");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
        assert_eq!(format_value(0.0000001), "0");
        assert_eq!(format_value(-0.0000001), "0");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 2.5 ").unwrap(), 2.5);
        assert!(parse_value("abc").is_err());
        assert!(parse_value("inf").is_err());
    }
}
