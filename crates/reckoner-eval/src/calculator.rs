//! The headless calculator engine.
//!
//! `Calculator` owns the expression buffer, the mode configuration, one
//! memory cell, the dataset, and the bounded history, and exposes the full
//! operation surface as plain methods. It performs no I/O: a front end
//! renders `buffer()`, `history()`, `memory()` and the mode indicators
//! however it likes and forwards user actions as method calls.
//!
//! Failure handling is uniform: a failed operation replaces the buffer with
//! the error's sentinel string and touches nothing else.

use crate::builtins::number_theory::{factorial, is_prime};
use crate::builtins::trig::{TrigFn, display_name, eval_trig};
use crate::builtins::{gamma, stats};
use crate::config::{Base, CalcMode, EvalConfig};
use crate::format;
use crate::function_registry::FunctionRegistry;
use crate::interpreter::evaluate_expression;
use reckoner_common::{CalcError, Value};

/// History keeps at most this many entries, most recent first.
pub const HISTORY_LIMIT: usize = 50;

/// Which statistic a stat key computes over the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Mean,
    Median,
    Mode,
    StdDev,
    Variance,
    Sum,
    Range,
    Quartile1,
    Quartile3,
    Iqr,
    Skewness,
    Kurtosis,
}

impl StatKey {
    fn label(self) -> &'static str {
        match self {
            StatKey::Mean => "Mean",
            StatKey::Median => "Median",
            StatKey::Mode => "Mode",
            StatKey::StdDev => "Std Dev",
            StatKey::Variance => "Variance",
            StatKey::Sum => "Sum",
            StatKey::Range => "Range",
            StatKey::Quartile1 => "Q1",
            StatKey::Quartile3 => "Q3",
            StatKey::Iqr => "IQR",
            StatKey::Skewness => "Skewness",
            StatKey::Kurtosis => "Kurtosis",
        }
    }
}

pub struct Calculator {
    buffer: String,
    config: EvalConfig,
    memory: f64,
    dataset: Vec<f64>,
    history: Vec<String>,
    last_result: f64,
    registry: FunctionRegistry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number the way the display shows raw (non-pipeline) results.
/// Negative zero normalizes to `"0"`.
fn fmt_f64(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            buffer: "0".to_string(),
            config: EvalConfig::default(),
            memory: 0.0,
            dataset: Vec::new(),
            history: Vec::new(),
            last_result: 0.0,
            registry: FunctionRegistry::with_builtins(),
        }
    }

    /* ───────────────────────── buffer ───────────────────────── */

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer<S: Into<String>>(&mut self, text: S) {
        self.buffer = text.into();
    }

    /// Append input text; a lone `"0"` buffer is replaced by digit input.
    pub fn append(&mut self, input: &str) {
        if self.buffer == "0" && input.contains(|c: char| c.is_ascii_digit()) {
            self.buffer = input.to_string();
        } else {
            self.buffer.push_str(input);
        }
    }

    pub fn clear_all(&mut self) {
        self.buffer = "0".to_string();
    }

    pub fn clear_entry(&mut self) {
        self.buffer = "0".to_string();
    }

    /// Remove the last character, bottoming out at `"0"`.
    pub fn delete_last(&mut self) {
        let mut chars = self.buffer.chars();
        chars.next_back();
        let rest = chars.as_str();
        if rest.is_empty() {
            self.buffer = "0".to_string();
        } else {
            self.buffer = rest.to_string();
        }
    }

    pub fn toggle_sign(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.buffer = fmt_f64(-n);
        }
    }

    /// Divide the buffer value by 100.
    pub fn percent(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.buffer = fmt_f64(n / 100.0);
        }
    }

    /* ─────────────────────── one-shot keys ───────────────────── */

    pub fn square(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.buffer = fmt_f64(n * n);
            let entry = format!("{n}² = {}", self.buffer);
            self.push_history(entry);
        }
    }

    pub fn reciprocal(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            if n != 0.0 {
                self.buffer = fmt_f64(1.0 / n);
                let entry = format!("1/{n} = {}", self.buffer);
                self.push_history(entry);
            }
        }
    }

    pub fn power_of_ten(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.buffer = fmt_f64(10.0_f64.powf(n));
            let entry = format!("10^{n} = {}", self.buffer);
            self.push_history(entry);
        }
    }

    /// Start an exponent: appends the `**` operator.
    pub fn power_key(&mut self) {
        self.append("**");
    }

    /// Start an nth root: appends `**(1/`.
    pub fn nth_root_key(&mut self) {
        self.append("**(1/");
    }

    /// Start combination / permutation notation.
    pub fn combination_key(&mut self) {
        self.append("C(");
    }

    pub fn permutation_key(&mut self) {
        self.append("P(");
    }

    pub fn modulo_key(&mut self) {
        self.append("%");
    }

    pub fn gcd_key(&mut self) {
        self.append("gcd(");
    }

    pub fn lcm_key(&mut self) {
        self.append("lcm(");
    }

    pub fn factorial_key(&mut self) {
        let Ok(x) = self.buffer.parse::<f64>() else {
            self.buffer = CalcError::new_value().sentinel();
            return;
        };
        match factorial(x.trunc() as i64) {
            Ok(result) => {
                self.buffer = fmt_f64(result);
                let entry = format!("{}! = {}", x.trunc(), self.buffer);
                self.push_history(entry);
            }
            Err(e) => self.buffer = e.sentinel(),
        }
    }

    pub fn gamma_key(&mut self) {
        let Ok(x) = self.buffer.parse::<f64>() else {
            self.buffer = CalcError::new_value().sentinel();
            return;
        };
        match gamma::gamma(x) {
            Ok(result) => {
                self.buffer = fmt_f64(result);
                let entry = format!("Γ({x}) = {}", self.buffer);
                self.push_history(entry);
            }
            Err(e) => self.buffer = e.sentinel(),
        }
    }

    /// Primality check: writes `"Prime"` or `"Not Prime"` to the buffer.
    pub fn prime_key(&mut self) {
        let n = match self.buffer.parse::<f64>() {
            Ok(x) => x.trunc() as i64,
            Err(_) => {
                self.buffer = "Not Prime".to_string();
                return;
            }
        };
        if n < 2 {
            self.buffer = "Not Prime".to_string();
            return;
        }
        let prime = is_prime(n);
        self.buffer = if prime { "Prime" } else { "Not Prime" }.to_string();
        let entry = format!("{n} is {}", if prime { "prime" } else { "not prime" });
        self.push_history(entry);
    }

    /// One of the twelve trig variants, selected by the current flags.
    pub fn trig_key(&mut self, func: TrigFn) {
        let Ok(x) = self.buffer.parse::<f64>() else {
            return;
        };
        match eval_trig(func, x, &self.config) {
            Ok(result) => {
                self.buffer = fmt_f64(result);
                let entry = format!("{}({x}) = {}", display_name(func, &self.config), self.buffer);
                self.push_history(entry);
            }
            Err(e) => self.buffer = e.sentinel(),
        }
    }

    /* ───────────────────────── memory ───────────────────────── */

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub fn memory_recall(&mut self) {
        self.buffer = fmt_f64(self.memory);
    }

    pub fn memory_store(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.memory = n;
        }
    }

    pub fn memory_add(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.memory += n;
        }
    }

    pub fn memory_subtract(&mut self) {
        if let Ok(n) = self.buffer.parse::<f64>() {
            self.memory -= n;
        }
    }

    /* ────────────────────────── modes ───────────────────────── */

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn set_mode(&mut self, mode: CalcMode) {
        self.config.mode = mode;
    }

    pub fn cycle_angle_mode(&mut self) {
        self.config.angle = self.config.angle.cycle();
    }

    pub fn toggle_inverse(&mut self) {
        self.config.inverse = !self.config.inverse;
    }

    pub fn toggle_hyperbolic(&mut self) {
        self.config.hyperbolic = !self.config.hyperbolic;
    }

    /// Switch the integer base, re-rendering the buffer from the old radix
    /// into the new one.
    pub fn set_base(&mut self, base: Base) {
        let old = self.config.base;
        self.config.base = base;
        if self.buffer.is_empty() || self.buffer == "0" {
            return;
        }
        match format::parse_in_base(&self.buffer, old) {
            Ok(i) => self.buffer = format::render_radix(i, base),
            Err(e) => self.buffer = e.sentinel(),
        }
    }

    /// Bitwise complement of the buffer read in the current radix.
    pub fn bitwise_not(&mut self) {
        if let Ok(i) = format::parse_in_base(&self.buffer, self.config.base) {
            self.buffer = format::render_radix(!i, self.config.base);
        }
    }

    /* ───────────────────────── dataset ──────────────────────── */

    pub fn data(&self) -> &[f64] {
        &self.dataset
    }

    /// Push the buffer value onto the dataset and reset the buffer.
    pub fn data_push(&mut self) {
        if let Ok(v) = self.buffer.parse::<f64>() {
            self.dataset.push(v);
            self.buffer = "0".to_string();
        }
    }

    pub fn data_pop(&mut self) -> Option<f64> {
        self.dataset.pop()
    }

    pub fn data_clear(&mut self) {
        self.dataset.clear();
    }

    /// Compute a statistic over the dataset; the buffer receives the result
    /// or the sentinel, and successes are recorded in history.
    pub fn stat_key(&mut self, key: StatKey) {
        match self.stat_value(key) {
            Ok(v) => {
                self.buffer = v.to_string();
                let entry = format!("{} = {}", key.label(), self.buffer);
                self.push_history(entry);
            }
            Err(e) => self.buffer = e.sentinel(),
        }
    }

    fn stat_value(&self, key: StatKey) -> Result<Value, CalcError> {
        let d = &self.dataset;
        Ok(match key {
            StatKey::Mean => Value::Number(stats::mean(d)?),
            StatKey::Median => Value::Number(stats::median(d)?),
            StatKey::Mode => match stats::mode(d)? {
                Some(modes) => Value::Array(modes.into_iter().map(Value::Number).collect()),
                None => Value::Text("No Mode".to_string()),
            },
            StatKey::StdDev => Value::Number(stats::std_dev(d)?),
            StatKey::Variance => Value::Number(stats::variance(d)?),
            StatKey::Sum => Value::Number(stats::sum(d)?),
            StatKey::Range => Value::Number(stats::range(d)?),
            StatKey::Quartile1 => Value::Number(stats::quartile1(d)?),
            StatKey::Quartile3 => Value::Number(stats::quartile3(d)?),
            StatKey::Iqr => Value::Number(stats::iqr(d)?),
            StatKey::Skewness => Value::Number(stats::skewness(d)?),
            StatKey::Kurtosis => Value::Number(stats::kurtosis(d)?),
        })
    }

    /* ───────────────────────── history ──────────────────────── */

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn push_history(&mut self, entry: String) {
        self.history.insert(0, entry);
        self.history.truncate(HISTORY_LIMIT);
    }

    /// Restore the numeric result of a history entry into the buffer.
    ///
    /// Entries whose result is not a plain number (labels, modal lists)
    /// leave the buffer untouched.
    pub fn recall(&mut self, index: usize) {
        if let Some(entry) = self.history.get(index) {
            if let Some((_, result)) = entry.split_once(" = ") {
                if result.parse::<f64>().is_ok() {
                    self.buffer = result.to_string();
                }
            }
        }
    }

    /* ──────────────────────── evaluation ────────────────────── */

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// The `=` key: run the buffer through the evaluation pipeline.
    ///
    /// On success the buffer holds the formatted result; on failure it holds
    /// the sentinel and nothing else changes.
    pub fn evaluate(&mut self) -> &str {
        if self.buffer.is_empty() || self.buffer == "0" {
            return &self.buffer;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("calculate", buffer = %self.buffer).entered();

        let expr = self.buffer.clone();
        match evaluate_expression(&expr, &self.config, &self.registry) {
            Ok(result) => {
                self.push_history(format!("{expr} = {result}"));
                if let Ok(n) = result.parse::<f64>() {
                    self.last_result = n;
                }
                self.buffer = result;
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "calculation failed");
                self.buffer = e.sentinel();
            }
        }
        &self.buffer
    }
}
