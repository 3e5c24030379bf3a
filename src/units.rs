use crate::error::CalcError;

// Scale factors to each category's base unit (meter, kilogram, liter,
// pascal).
const LENGTH: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("kilometer", 1000.0),
    ("centimeter", 0.01),
    ("millimeter", 0.001),
    ("inch", 0.0254),
    ("foot", 0.3048),
    ("yard", 0.9144),
    ("mile", 1609.344),
];

const WEIGHT: &[(&str, f64)] = &[
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("pound", 0.453592),
    ("ounce", 0.0283495),
    ("ton", 1000.0),
];

const VOLUME: &[(&str, f64)] = &[
    ("liter", 1.0),
    ("milliliter", 0.001),
    ("gallon", 3.78541),
    ("quart", 0.946353),
    ("pint", 0.473176),
    ("cup", 0.236588),
    ("fluid_ounce", 0.0295735),
];

const PRESSURE: &[(&str, f64)] = &[
    ("pascal", 1.0),
    ("kilopascal", 1000.0),
    ("bar", 100000.0),
    ("atmosphere", 101325.0),
    ("psi", 6894.76),
    ("torr", 133.322),
];

const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

pub fn categories() -> &'static [&'static str] {
    &["length", "weight", "temperature", "volume", "pressure"]
}

fn linear_table(
    category: &str,
) -> Option<&'static [(&'static str, f64)]> {
    match category {
        "length" => Some(LENGTH),
        "weight" => Some(WEIGHT),
        "volume" => Some(VOLUME),
        "pressure" => Some(PRESSURE),
        _ => None,
    }
}

/// The unit names of a category, for populating a front end's pickers.
pub fn units(category: &str) -> Result<Vec<&'static str>, CalcError> {
    if category == "temperature" {
        return Ok(TEMPERATURE_UNITS.to_vec());
    }
    match linear_table(category) {
        Some(table) => Ok(table.iter().map(|&(name, _)| name).collect()),
        None => Err(CalcError::UnknownUnit(category.to_owned())),
    }
}

fn scale(
    table: &[(&str, f64)],
    unit: &str,
) -> Result<f64, CalcError> {
    table
        .iter()
        .find(|&&(name, _)| name == unit)
        .map(|&(_, factor)| factor)
        .ok_or_else(|| CalcError::UnknownUnit(unit.to_owned()))
}

fn to_celsius(value: f64, from: &str) -> Result<f64, CalcError> {
    match from {
        "celsius" => Ok(value),
        "fahrenheit" => Ok((value - 32.0) * 5.0 / 9.0),
        "kelvin" => Ok(value - 273.15),
        _ => Err(CalcError::UnknownUnit(from.to_owned())),
    }
}

fn from_celsius(celsius: f64, to: &str) -> Result<f64, CalcError> {
    match to {
        "celsius" => Ok(celsius),
        "fahrenheit" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "kelvin" => Ok(celsius + 273.15),
        _ => Err(CalcError::UnknownUnit(to.to_owned())),
    }
}

/// Convert `value` between two units of the same category. Linear
/// categories scale through the base unit; temperature routes through
/// Celsius with the affine formulas.
pub fn convert(
    category: &str,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::InvalidInput("value must be finite"));
    }
    if category == "temperature" {
        return from_celsius(to_celsius(value, from)?, to);
    }
    let table = linear_table(category)
        .ok_or_else(|| CalcError::UnknownUnit(category.to_owned()))?;
    Ok(value * scale(table, from)? / scale(table, to)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_conversions() {
        let mile = convert("length", 1.0, "mile", "meter").unwrap();
        assert!((mile - 1609.344).abs() < 1e-9);
        let kg = convert("weight", 32.0, "ounce", "kilogram").unwrap();
        assert!((kg - 32.0 * 0.0283495).abs() < 1e-9);
        let bar = convert("pressure", 101325.0, "pascal", "bar").unwrap();
        assert!((bar - 1.01325).abs() < 1e-9);
    }

    #[test]
    fn identity_conversion() {
        let same = convert("volume", 2.5, "cup", "cup").unwrap();
        assert!((same - 2.5).abs() < 1e-12);
    }

    #[test]
    fn temperature_routes_through_celsius() {
        let f = convert("temperature", 100.0, "celsius", "fahrenheit");
        assert_eq!(f, Ok(212.0));
        let k = convert("temperature", 32.0, "fahrenheit", "kelvin");
        assert_eq!(k, Ok(273.15));
        let c = convert("temperature", 0.0, "kelvin", "celsius");
        assert_eq!(c, Ok(-273.15));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            convert("length", 1.0, "cubit", "meter"),
            Err(CalcError::UnknownUnit("cubit".into()))
        );
        assert_eq!(
            convert("sound", 1.0, "phon", "sone"),
            Err(CalcError::UnknownUnit("sound".into()))
        );
        assert!(units("sound").is_err());
    }

    #[test]
    fn every_category_lists_units() {
        for &category in categories() {
            assert!(!units(category).unwrap().is_empty());
        }
    }
}
