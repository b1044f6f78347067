//! Descriptive statistics over the calculator's dataset.
//!
//! Every function is pure over its input slice. Statistics with a minimum
//! count report `CalcError::needs_values(min)` below it; the ones defined for
//! any non-empty dataset report `CalcError::no_data()` when it is empty.
//! Sample statistics (variance, standard deviation) divide by n−1; the shape
//! statistics (skewness, excess kurtosis) use population moments.

use reckoner_common::CalcError;
use rustc_hash::FxHashMap;

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

fn mean_unchecked(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn sum(data: &[f64]) -> Result<f64, CalcError> {
    if data.is_empty() {
        return Err(CalcError::no_data());
    }
    Ok(data.iter().sum())
}

pub fn mean(data: &[f64]) -> Result<f64, CalcError> {
    if data.is_empty() {
        return Err(CalcError::no_data());
    }
    Ok(mean_unchecked(data))
}

/// max − min.
pub fn range(data: &[f64]) -> Result<f64, CalcError> {
    if data.is_empty() {
        return Err(CalcError::no_data());
    }
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(max - min)
}

/// Sort ascending; an even count averages the two middle elements.
pub fn median(data: &[f64]) -> Result<f64, CalcError> {
    if data.is_empty() {
        return Err(CalcError::no_data());
    }
    let s = sorted(data);
    let n = s.len();
    if n % 2 == 0 {
        Ok((s[n / 2 - 1] + s[n / 2]) / 2.0)
    } else {
        Ok(s[n / 2])
    }
}

/// Every value tied for the highest frequency, ascending.
///
/// `None` means "no mode": the maximum frequency is 1, i.e. nothing repeats.
pub fn mode(data: &[f64]) -> Result<Option<Vec<f64>>, CalcError> {
    if data.is_empty() {
        return Err(CalcError::no_data());
    }
    let mut freq: FxHashMap<u64, usize> = FxHashMap::default();
    for &v in data {
        *freq.entry(v.to_bits()).or_insert(0) += 1;
    }
    let max_freq = freq.values().copied().max().unwrap_or(0);
    if max_freq <= 1 {
        return Ok(None);
    }
    let mut modes: Vec<f64> = freq
        .iter()
        .filter(|&(_, &count)| count == max_freq)
        .map(|(&bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(f64::total_cmp);
    Ok(Some(modes))
}

/// Sample variance (divisor n−1). Needs at least 2 values.
pub fn variance(data: &[f64]) -> Result<f64, CalcError> {
    if data.len() < 2 {
        return Err(CalcError::needs_values(2));
    }
    let m = mean_unchecked(data);
    let ss = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    Ok(ss / (data.len() - 1) as f64)
}

/// Sample standard deviation. Needs at least 2 values.
pub fn std_dev(data: &[f64]) -> Result<f64, CalcError> {
    Ok(variance(data)?.sqrt())
}

fn population_std_dev(data: &[f64]) -> f64 {
    let m = mean_unchecked(data);
    let ss = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>();
    (ss / data.len() as f64).sqrt()
}

/// Third standardized population moment. Needs at least 3 values.
pub fn skewness(data: &[f64]) -> Result<f64, CalcError> {
    if data.len() < 3 {
        return Err(CalcError::needs_values(3));
    }
    let m = mean_unchecked(data);
    let sd = population_std_dev(data);
    let n = data.len() as f64;
    Ok(data.iter().map(|x| ((x - m) / sd).powi(3)).sum::<f64>() / n)
}

/// Fourth standardized population moment minus 3 (excess kurtosis, so a
/// normal distribution scores 0). Needs at least 4 values.
pub fn kurtosis(data: &[f64]) -> Result<f64, CalcError> {
    if data.len() < 4 {
        return Err(CalcError::needs_values(4));
    }
    let m = mean_unchecked(data);
    let sd = population_std_dev(data);
    let n = data.len() as f64;
    Ok(data.iter().map(|x| ((x - m) / sd).powi(4)).sum::<f64>() / n - 3.0)
}

/// First quartile by the simple index method: sorted[⌊n/4⌋], no
/// interpolation. Needs at least 4 values.
pub fn quartile1(data: &[f64]) -> Result<f64, CalcError> {
    if data.len() < 4 {
        return Err(CalcError::needs_values(4));
    }
    let s = sorted(data);
    Ok(s[s.len() / 4])
}

/// Third quartile: sorted[⌊3n/4⌋]. Needs at least 4 values.
pub fn quartile3(data: &[f64]) -> Result<f64, CalcError> {
    if data.len() < 4 {
        return Err(CalcError::needs_values(4));
    }
    let s = sorted(data);
    Ok(s[3 * s.len() / 4])
}

/// Interquartile range, Q3 − Q1. Needs at least 4 values.
pub fn iqr(data: &[f64]) -> Result<f64, CalcError> {
    Ok(quartile3(data)? - quartile1(data)?)
}
