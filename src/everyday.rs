use std::fmt;

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

/// Body mass index from weight in kilograms and height in centimeters,
/// classified on the usual thresholds (18.5 / 25 / 30).
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi, CalcError> {
    if !weight_kg.is_finite() || !height_cm.is_finite() ||
        weight_kg <= 0.0 || height_cm <= 0.0
    {
        return Err(CalcError::InvalidInput(
            "weight and height must be positive numbers",
        ));
    }
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Ok(Bmi { value, category })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipSplit {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
    pub tip_per_person: f64,
}

/// Split a bill plus tip across a party.
pub fn tip(
    bill: f64,
    tip_percent: f64,
    people: u32,
) -> Result<TipSplit, CalcError> {
    if !bill.is_finite() || !tip_percent.is_finite() || bill < 0.0 ||
        tip_percent < 0.0
    {
        return Err(CalcError::InvalidInput(
            "bill and tip percentage must be nonnegative numbers",
        ));
    }
    if people == 0 {
        return Err(CalcError::InvalidInput(
            "the party needs at least one person",
        ));
    }
    let tip = bill * tip_percent / 100.0;
    let total = bill + tip;
    let people = people as f64;
    Ok(TipSplit {
        tip,
        total,
        per_person: total / people,
        tip_per_person: tip / people,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_categories() {
        assert_eq!(bmi(50.0, 180.0).unwrap().category, BmiCategory::Underweight);
        assert_eq!(bmi(70.0, 180.0).unwrap().category, BmiCategory::Normal);
        assert_eq!(bmi(85.0, 180.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(100.0, 180.0).unwrap().category, BmiCategory::Obese);

        let b = bmi(80.0, 200.0).unwrap();
        assert_eq!(b.value, 20.0);
        assert!(bmi(70.0, 0.0).is_err());
        assert!(bmi(-70.0, 180.0).is_err());
    }

    #[test]
    fn tip_splits_evenly() {
        let t = tip(80.0, 25.0, 4).unwrap();
        assert_eq!(t.tip, 20.0);
        assert_eq!(t.total, 100.0);
        assert_eq!(t.per_person, 25.0);
        assert_eq!(t.tip_per_person, 5.0);
        assert!(tip(80.0, 15.0, 0).is_err());
    }
}
