use crate::error::CalcError;

/// Equated monthly installment on a loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emi {
    pub monthly: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Future value of a systematic investment plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sip {
    pub invested: f64,
    pub future_value: f64,
    pub gain: f64,
}

/// Compound growth of a principal, with the simple-interest figure the
/// calculator shows for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compound {
    pub amount: f64,
    pub interest: f64,
    pub simple_interest: f64,
}

/// Position gain or loss against its purchase price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitLoss {
    pub invested: f64,
    pub current_value: f64,
    pub gain: f64,
    pub gain_percent: f64,
}

fn check_finite(value: f64, what: &'static str) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::InvalidInput(what))
    }
}

/// `EMI = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate and
/// `n` the number of months. A zero rate degenerates the formula to
/// division by zero and is special-cased to the interest-free
/// installment `P/n`.
pub fn emi(
    principal: f64,
    monthly_rate: f64,
    months: u32,
) -> Result<Emi, CalcError> {
    check_finite(principal, "principal must be a finite number")?;
    check_finite(monthly_rate, "rate must be a finite number")?;
    if principal <= 0.0 {
        return Err(CalcError::InvalidInput("principal must be positive"));
    }
    if monthly_rate < 0.0 {
        return Err(CalcError::InvalidInput("rate must not be negative"));
    }
    if months == 0 {
        return Err(CalcError::InvalidInput("tenure must be at least one month"));
    }
    let n = months as f64;
    let monthly = if monthly_rate == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + monthly_rate).powi(months as i32);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total_payment = monthly * n;
    Ok(Emi {
        monthly,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Future value of a fixed monthly installment:
/// `A·(((1+r)^n − 1)/r)·(1+r)`. A zero rate degenerates the same way
/// EMI does and collapses to the sum invested.
pub fn sip(
    installment: f64,
    monthly_rate: f64,
    months: u32,
) -> Result<Sip, CalcError> {
    check_finite(installment, "installment must be a finite number")?;
    check_finite(monthly_rate, "rate must be a finite number")?;
    if installment <= 0.0 {
        return Err(CalcError::InvalidInput("installment must be positive"));
    }
    if monthly_rate < 0.0 {
        return Err(CalcError::InvalidInput("rate must not be negative"));
    }
    if months == 0 {
        return Err(CalcError::InvalidInput("tenure must be at least one month"));
    }
    let invested = installment * months as f64;
    let future_value = if monthly_rate == 0.0 {
        invested
    } else {
        let growth = (1.0 + monthly_rate).powi(months as i32);
        installment * ((growth - 1.0) / monthly_rate) * (1.0 + monthly_rate)
    };
    Ok(Sip {
        invested,
        future_value,
        gain: future_value - invested,
    })
}

/// `A = P·(1 + r/k)^(k·t)` with `r` the annual rate as a fraction, `t`
/// in years and `k` compounding periods per year.
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    compounds_per_year: u32,
) -> Result<Compound, CalcError> {
    check_finite(principal, "principal must be a finite number")?;
    check_finite(annual_rate, "rate must be a finite number")?;
    check_finite(years, "time period must be a finite number")?;
    if principal <= 0.0 {
        return Err(CalcError::InvalidInput("principal must be positive"));
    }
    if annual_rate < 0.0 {
        return Err(CalcError::InvalidInput("rate must not be negative"));
    }
    if years < 0.0 {
        return Err(CalcError::InvalidInput("time period must not be negative"));
    }
    if compounds_per_year == 0 {
        return Err(CalcError::InvalidInput(
            "compounding frequency must be at least once a year",
        ));
    }
    let k = compounds_per_year as f64;
    let amount = principal * (1.0 + annual_rate / k).powf(k * years);
    Ok(Compound {
        amount,
        interest: amount - principal,
        simple_interest: principal * annual_rate * years,
    })
}

pub fn profit_and_loss(
    buy_price: f64,
    current_price: f64,
    quantity: f64,
) -> Result<ProfitLoss, CalcError> {
    check_finite(buy_price, "buy price must be a finite number")?;
    check_finite(current_price, "current price must be a finite number")?;
    check_finite(quantity, "quantity must be a finite number")?;
    if buy_price <= 0.0 || quantity <= 0.0 {
        return Err(CalcError::InvalidInput(
            "buy price and quantity must be positive",
        ));
    }
    let invested = buy_price * quantity;
    let current_value = current_price * quantity;
    let gain = current_value - invested;
    Ok(ProfitLoss {
        invested,
        current_value,
        gain,
        gain_percent: gain / invested * 100.0,
    })
}
