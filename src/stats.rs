use crate::error::CalcError;

/// Descriptive summary of a numeric sample.
///
/// Variance is the population variance (divisor is the count, not
/// count - 1); the standard deviation is its square root. Mode holds
/// every value that attains the maximum frequency, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
}

/// Ordinary least squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Split a comma-separated string into a sample, discarding tokens that
/// do not parse as finite numbers. The result may be empty; `summarize`
/// treats that as an error.
pub fn parse_sample(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .filter(|x| x.is_finite())
        .collect()
}

pub fn summarize(sample: &[f64]) -> Result<Summary, CalcError> {
    if sample.is_empty() {
        return Err(CalcError::EmptySample);
    }
    let count = sample.len();
    let sum: f64 = sample.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| {
        a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal)
    });

    let mid = count / 2;
    let median = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    let variance = sample
        .iter()
        .map(|x| (x - mean) * (x - mean))
        .sum::<f64>() / count as f64;

    Ok(Summary {
        count,
        sum,
        mean,
        median,
        mode: mode_of_sorted(&sorted),
        min,
        max,
        range: max - min,
        variance,
        std_dev: variance.sqrt(),
    })
}

// Runs of equal values in a sorted sample; every value tied for the
// longest run is a mode.
fn mode_of_sorted(sorted: &[f64]) -> Vec<f64> {
    let mut modes = Vec::new();
    let mut best = 0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let run = j - i;
        if run > best {
            best = run;
            modes.clear();
            modes.push(sorted[i]);
        } else if run == best {
            modes.push(sorted[i]);
        }
        i = j;
    }
    modes
}

fn check_paired(xs: &[f64], ys: &[f64]) -> Result<usize, CalcError> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return Err(CalcError::InsufficientData {
            needed: 2,
            found: xs.len().min(ys.len()),
        });
    }
    Ok(xs.len())
}

pub fn regression(xs: &[f64], ys: &[f64]) -> Result<Regression, CalcError> {
    let n = check_paired(xs, ys)? as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        // Every x is the same; the line is vertical
        return Err(CalcError::DivideByZero);
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_res: f64 = xs.iter()
        .zip(ys)
        .map(|(x, y)| {
            let r = y - (slope * x + intercept);
            r * r
        })
        .sum();
    let ss_tot: f64 = ys.iter().map(|y| (y - mean_y) * (y - mean_y)).sum();
    let r_squared = if ss_tot == 0.0 {
        // Constant ys fitted exactly by the horizontal line
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(Regression { slope, intercept, r_squared })
}

/// Pearson product-moment correlation coefficient.
pub fn correlation(xs: &[f64], ys: &[f64]) -> Result<f64, CalcError> {
    let n = check_paired(xs, ys)? as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let numerator: f64 = xs.iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let denom_x = xs.iter()
        .map(|x| (x - mean_x) * (x - mean_x))
        .sum::<f64>()
        .sqrt();
    let denom_y = ys.iter()
        .map(|y| (y - mean_y) * (y - mean_y))
        .sum::<f64>()
        .sqrt();

    if denom_x == 0.0 || denom_y == 0.0 {
        // A constant series has no linear association to measure
        return Err(CalcError::DivideByZero);
    }
    Ok(numerator / (denom_x * denom_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parsing_discards_junk() {
        assert_eq!(
            parse_sample("1, 2.5, apple, 3,, -4 "),
            vec![1.0, 2.5, 3.0, -4.0]
        );
        assert!(parse_sample("no numbers here").is_empty());
    }

    #[test]
    fn summary_of_one_to_five() {
        let s = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.sum, 15.0);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.range, 4.0);
        assert_eq!(s.variance, 2.0);
        assert_eq!(s.std_dev, 2.0_f64.sqrt());
        // Every value occurs once, so every value is a mode
        assert_eq!(s.mode, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn even_count_median_and_modes() {
        let s = summarize(&[4.0, 1.0, 2.0, 2.0, 4.0, 3.0]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.mode, vec![2.0, 4.0]);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn empty_sample_is_an_error() {
        assert_eq!(summarize(&[]), Err(CalcError::EmptySample));
    }

    #[test]
    fn exact_line_regression() {
        // y = 2x + 1
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let fit = regression(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn paired_preconditions() {
        let short = regression(&[1.0], &[2.0]);
        assert_eq!(
            short,
            Err(CalcError::InsufficientData { needed: 2, found: 1 })
        );
        let uneven = correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert_eq!(
            uneven,
            Err(CalcError::InsufficientData { needed: 2, found: 2 })
        );
    }

    #[test]
    fn perfect_correlation() {
        let xs = [1.0, 2.0, 3.0];
        assert!(
            (correlation(&xs, &[2.0, 4.0, 6.0]).unwrap() - 1.0).abs() < 1e-12
        );
        assert!(
            (correlation(&xs, &[3.0, 2.0, 1.0]).unwrap() + 1.0).abs() < 1e-12
        );
        assert_eq!(
            correlation(&xs, &[5.0, 5.0, 5.0]),
            Err(CalcError::DivideByZero)
        );
    }
}
